use super::Navigator;
use crate::error::{GuardError, Result};
use crate::utils::host_command;
use tracing::debug;

/// Запускает команду "назад" на хосте (по умолчанию `adb shell input keyevent KEYCODE_BACK`)
pub struct CommandNavigator {
    argv: Vec<String>,
}

impl CommandNavigator {
    pub fn new(argv: Vec<String>) -> Result<Self> {
        if argv.is_empty() {
            return GuardError::command("команда навигации назад не задана");
        }
        Ok(Self { argv })
    }
}

#[async_trait::async_trait]
impl Navigator for CommandNavigator {
    async fn trigger_back_navigation(&self) -> Result<()> {
        debug!("Отправляем навигацию назад: {:?}", self.argv);
        host_command::spawn_detached(&self.argv)
    }
}
