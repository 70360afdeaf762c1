use crate::detection::ClassifierRegistry;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub scanner: ScannerConfig,
    pub snapshot: SnapshotConfig,
    pub navigation: NavigationConfig,
    pub notification: NotificationConfig,
    pub apps: AppsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    #[serde(default)]
    pub filter: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScannerConfig {
    pub poll_interval_ms: u64,
    pub settle_delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotSourceKind {
    File,
    Command,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnapshotConfig {
    pub source: SnapshotSourceKind,
    pub path: PathBuf,
    #[serde(default)]
    pub command: Vec<String>,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NavigationConfig {
    pub back_command: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationConfig {
    pub channel_id: String,
    pub channel_name: String,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppsConfig {
    pub enabled: Vec<String>,
}

impl ScannerConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl SnapshotConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "compact".to_string(),
                filter: String::new(),
            },
            scanner: ScannerConfig {
                poll_interval_ms: 500,
                settle_delay_ms: 1000,
            },
            snapshot: SnapshotConfig {
                source: SnapshotSourceKind::File,
                path: PathBuf::from("snapshot.json"),
                command: Vec::new(),
                timeout_ms: 2000,
            },
            navigation: NavigationConfig {
                back_command: ["adb", "shell", "input", "keyevent", "KEYCODE_BACK"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
            notification: NotificationConfig {
                channel_id: "shorts_blocker_service_channel".to_string(),
                channel_name: "Shorts Blocker Service".to_string(),
                title: "Shorts Blocker is Active".to_string(),
                text: "Protecting your focus.".to_string(),
            },
            apps: AppsConfig {
                enabled: vec![
                    crate::detection::youtube::PACKAGE.to_string(),
                    crate::detection::instagram::PACKAGE.to_string(),
                ],
            },
        }
    }
}

impl Config {
    /// Значения по умолчанию, затем TOML-файл (если есть), затем `SHORTS_GUARD_*`
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        Self::from_figment(
            Figment::from(Serialized::defaults(Config::default()))
                .merge(Toml::file(config_path))
                .merge(Env::prefixed("SHORTS_GUARD_").split("__")),
        )
        .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", config_path))
    }

    fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // Валидация настроек логирования
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Неверный уровень логирования: {}", self.logging.level),
        }

        match self.logging.format.as_str() {
            "full" | "compact" => {}
            _ => anyhow::bail!("Неверный формат логирования: {}", self.logging.format),
        }

        // Валидация настроек опроса
        if self.scanner.poll_interval_ms < 50 {
            anyhow::bail!("poll_interval_ms должно быть минимум 50");
        }

        // Валидация источника снимков
        match self.snapshot.source {
            SnapshotSourceKind::File => {
                if self.snapshot.path.as_os_str().is_empty() {
                    anyhow::bail!("snapshot.path не может быть пустым");
                }
            }
            SnapshotSourceKind::Command => {
                if self.snapshot.command.is_empty() {
                    anyhow::bail!("snapshot.command обязателен для source = \"command\"");
                }
                if self.snapshot.timeout_ms == 0 {
                    anyhow::bail!("snapshot.timeout_ms должно быть больше 0");
                }
            }
        }

        if self.navigation.back_command.is_empty() {
            anyhow::bail!("navigation.back_command не может быть пустым");
        }

        // Валидация списка приложений
        if self.apps.enabled.is_empty() {
            anyhow::bail!("apps.enabled пуст - нечего отслеживать");
        }

        for (i, package) in self.apps.enabled.iter().enumerate() {
            if !ClassifierRegistry::is_builtin(package) {
                let mut known: Vec<_> = ClassifierRegistry::builtin_packages().collect();
                known.sort_unstable();
                anyhow::bail!(
                    "Неизвестный пакет '{}' в apps.enabled #{} (поддерживаются: {})",
                    package,
                    i + 1,
                    known.join(", ")
                );
            }
        }

        Ok(())
    }
}
