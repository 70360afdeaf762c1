use crate::config::ScannerConfig;
use crate::detection::ClassifierRegistry;
use crate::error::{GuardError, Result};
use crate::services::scanner::Scanner;
use crate::services::{Navigator, Notice, SnapshotSource, StatusNotifier};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

struct RunningScanner {
    handle: JoinHandle<Result<()>>,
    cancel_token: CancellationToken,
}

/// Жизненный цикл сервиса: `on_start` / `on_interrupt` / `on_stop`
pub struct ScannerService {
    source: Arc<dyn SnapshotSource>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn StatusNotifier>,
    registry: Arc<ClassifierRegistry>,
    scanner_config: ScannerConfig,
    notice: Notice,
    running: Mutex<Option<RunningScanner>>,
}

impl ScannerService {
    pub fn new(
        source: Arc<dyn SnapshotSource>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn StatusNotifier>,
        registry: ClassifierRegistry,
        scanner_config: ScannerConfig,
        notice: Notice,
    ) -> Self {
        Self {
            source,
            navigator,
            notifier,
            registry: Arc::new(registry),
            scanner_config,
            notice,
            running: Mutex::new(None),
        }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.running
            .lock()
            .as_ref()
            .is_some_and(|running| !running.handle.is_finished())
    }

    /// Показать уведомление и запустить единственный сканер
    pub fn on_start(&self) -> Result<()> {
        let mut running = self.running.lock();
        if running.is_some() {
            return Err(GuardError::ServiceUnavailable(
                "сканер уже запущен".to_string(),
            ));
        }

        self.notifier.show(&self.notice);

        let scanner = Scanner::new(
            self.source.clone(),
            self.navigator.clone(),
            self.registry.clone(),
            &self.scanner_config,
        );
        let cancel_token = CancellationToken::new();
        let handle = tokio::spawn(scanner.run(cancel_token.clone()));

        *running = Some(RunningScanner {
            handle,
            cancel_token,
        });
        info!("Сервис запущен");
        Ok(())
    }

    /// Только сигнал отмены; сканер завершится в пределах одного интервала
    pub fn on_interrupt(&self) {
        if let Some(running) = self.running.lock().as_ref() {
            info!("Сервис прерван");
            running.cancel_token.cancel();
        }
    }

    /// Отменить сканер, дождаться его завершения и снять уведомление
    pub async fn on_stop(&self) -> Result<()> {
        let Some(running) = self.running.lock().take() else {
            return Ok(());
        };

        running.cancel_token.cancel();
        let result = running.handle.await;
        self.notifier.dismiss();

        match result {
            Ok(result) => result,
            Err(e) => {
                error!("Задача сканера завершилась аварийно: {}", e);
                Err(GuardError::Internal(format!("задача сканера: {}", e)))
            }
        }
    }
}
