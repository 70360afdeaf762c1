use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
mod config;
mod detection;
mod error;
mod model;
mod services;
mod utils;

use config::{Config, LoggingConfig};
use detection::ClassifierRegistry;
use services::{
    create_navigator, create_snapshot_source, LogNotifier, Navigator, Notice, ScannerService,
    SnapshotSource,
};

#[derive(Parser, Debug)]
#[command(name = "shorts-guard")]
#[command(about = "Выходит из полноэкранных YouTube Shorts и Instagram Reels")]
struct Args {
    /// Путь к файлу конфигурации
    #[arg(short, long, default_value = "shorts-guard.toml")]
    config: String,

    /// Режим сухого запуска (эмулированные экраны, без реальной навигации)
    #[arg(long)]
    dry_run: bool,

    /// Уровень логирования (перекрывает logging.level из конфигурации)
    #[arg(long)]
    log_level: Option<String>,

    /// Классифицировать один JSON-снимок и выйти
    #[arg(long, value_name = "SNAPSHOT")]
    classify: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Загрузка конфигурации
    let mut config = Config::load(&args.config)?;
    if let Some(level) = args.log_level {
        config.logging.level = level;
        config.validate()?;
    }

    // Инициализация системы логирования
    init_tracing(&config.logging)?;

    info!("Запуск shorts-guard v{}", env!("CARGO_PKG_VERSION"));
    info!("Конфигурация загружена из: {}", args.config);

    let registry = ClassifierRegistry::for_packages(config.apps.enabled.as_slice())?;

    if let Some(path) = args.classify {
        return classify_once(&path, &registry);
    }

    if args.dry_run {
        warn!("Режим сухого запуска - реальные действия отключены");
    }

    let source: Arc<dyn SnapshotSource> = Arc::from(create_snapshot_source(&config, args.dry_run)?);
    let navigator: Arc<dyn Navigator> = Arc::from(create_navigator(&config, args.dry_run)?);
    let service = ScannerService::new(
        source,
        navigator,
        Arc::new(LogNotifier),
        registry,
        config.scanner.clone(),
        Notice::from(&config.notification),
    );

    service.on_start()?;

    // Ожидание сигнала завершения
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Получен сигнал завершения (Ctrl+C)");
        }
        Err(err) => {
            error!("Ошибка при ожидании сигнала завершения: {}", err);
        }
    }

    info!("Завершение работы...");
    service.on_interrupt();

    // Ожидаем завершения сканера (с таймаутом)
    let shutdown_timeout = tokio::time::Duration::from_secs(5);
    match tokio::time::timeout(shutdown_timeout, service.on_stop()).await {
        Ok(Ok(())) => info!("Сканер завершил работу корректно"),
        Ok(Err(e)) => warn!("Сканер завершился с ошибкой: {}", e),
        Err(_) => warn!("Таймаут при завершении сканера"),
    }

    info!("shorts-guard завершил работу");
    Ok(())
}

fn classify_once(path: &Path, registry: &ClassifierRegistry) -> Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Не удалось прочитать снимок {:?}", path))?;
    let root = snapshot_root(&raw)?;

    let Some(root) = root else {
        println!("снимок отсутствует");
        return Ok(());
    };

    match root.package_name() {
        Some(package) => println!("{}: {}", package, registry.classify(package, &root)),
        None => println!("у снимка нет пакета"),
    }
    Ok(())
}

fn snapshot_root(raw: &str) -> Result<Option<model::UiNode>> {
    services::snapshot_source::parse_snapshot(raw).context("Некорректный снимок")
}

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let directives = if logging.filter.is_empty() {
        logging.level.clone()
    } else {
        format!("{},{}", logging.level, logging.filter)
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&directives))?;

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "compact" {
        registry.with(tracing_subscriber::fmt::layer().compact()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    Ok(())
}
