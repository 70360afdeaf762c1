use crate::config::ScannerConfig;
use crate::debug_if_enabled;
use crate::detection::ClassifierRegistry;
use crate::error::Result;
use crate::model::{MatchReason, UiNode};
use crate::services::{Navigator, SnapshotSource};
use crate::trace_if_enabled;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Итог одного цикла опроса
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Снимок недоступен - ждём следующий цикл
    NoSnapshot,
    /// У корня нет пакета
    NoPackage,
    NotDetected,
    Detected(MatchReason),
    /// Ошибка платформы; залогирована, опрос продолжается
    Failed,
}

/// Цикл "снимок -> классификация -> возможно, назад"
pub struct Scanner {
    source: Arc<dyn SnapshotSource>,
    navigator: Arc<dyn Navigator>,
    registry: Arc<ClassifierRegistry>,
    poll_interval: Duration,
    settle_delay: Duration,
}

impl Scanner {
    pub fn new(
        source: Arc<dyn SnapshotSource>,
        navigator: Arc<dyn Navigator>,
        registry: Arc<ClassifierRegistry>,
        config: &ScannerConfig,
    ) -> Self {
        Self {
            source,
            navigator,
            registry,
            poll_interval: config.poll_interval(),
            settle_delay: config.settle_delay(),
        }
    }

    /// Один цикл опроса. Никогда не возвращает ошибку: сбои остаются внутри цикла.
    #[cfg(test)]
    pub async fn tick(&self) -> TickOutcome {
        let fetched = self.source.current_snapshot().await;
        self.evaluate(fetched).await
    }

    /// Классификация и реакция на уже полученный снимок
    async fn evaluate(&self, fetched: Result<Option<UiNode>>) -> TickOutcome {
        let root = match fetched {
            Ok(Some(root)) => root,
            Ok(None) => {
                trace_if_enabled!("Снимок UI недоступен");
                return TickOutcome::NoSnapshot;
            }
            Err(e) => {
                warn!("Не удалось получить снимок UI: {}", e);
                return TickOutcome::Failed;
            }
        };

        let Some(package) = root.package_name() else {
            trace_if_enabled!("У снимка нет пакета, пропускаем цикл");
            return TickOutcome::NoPackage;
        };

        if !self.registry.supports(package) {
            trace_if_enabled!("Пакет {} не отслеживается", package);
            return TickOutcome::NotDetected;
        }

        let verdict = self.registry.classify(package, &root);
        debug_if_enabled!("{}: {}", package, verdict);

        let Some(reason) = verdict.reason() else {
            return TickOutcome::NotDetected;
        };

        info!("Обнаружено короткое видео в {} ({}), выходим назад", package, reason);
        if let Err(e) = self.navigator.trigger_back_navigation().await {
            warn!("Не удалось отправить навигацию назад: {}", e);
        }
        TickOutcome::Detected(reason)
    }

    /// Пауза после цикла: после срабатывания ждём ещё `settle_delay`
    fn pause_after(&self, outcome: TickOutcome) -> Duration {
        match outcome {
            TickOutcome::Detected(_) => self.settle_delay + self.poll_interval,
            _ => self.poll_interval,
        }
    }

    /// Опрашивать до отмены. Токен проверяется в начале каждой итерации,
    /// ожидание снимка и пауза между циклами прерываются отменой.
    pub async fn run(self, cancel: CancellationToken) -> Result<()> {
        info!(
            "Сканер запущен: интервал {:?}, пауза после срабатывания {:?}, приложений: {}",
            self.poll_interval,
            self.settle_delay,
            self.registry.len()
        );

        loop {
            if cancel.is_cancelled() {
                break;
            }

            // Получение снимка прерывается отменой, классификация - нет
            let fetched = tokio::select! {
                _ = cancel.cancelled() => break,
                fetched = self.source.current_snapshot() => fetched,
            };
            let outcome = self.evaluate(fetched).await;
            let pause = self.pause_after(outcome);

            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(pause) => {}
            }
        }

        info!("Сканер остановлен");
        Ok(())
    }
}
