use super::{parse_snapshot, SnapshotSource};
use crate::error::{GuardError, Result};
use crate::guard_error;
use crate::model::UiNode;
use crate::utils::host_command;
use std::time::Duration;

/// Запускает команду хоста, которая печатает JSON-снимок в stdout
pub struct CommandSnapshotSource {
    argv: Vec<String>,
    timeout: Duration,
}

impl CommandSnapshotSource {
    pub fn new(argv: Vec<String>, timeout: Duration) -> Result<Self> {
        if argv.is_empty() {
            return GuardError::command("команда получения снимка не задана");
        }
        Ok(Self { argv, timeout })
    }
}

#[async_trait::async_trait]
impl SnapshotSource for CommandSnapshotSource {
    async fn current_snapshot(&self) -> Result<Option<UiNode>> {
        // При таймауте future отбрасывается, kill_on_drop убивает процесс
        let output = tokio::time::timeout(self.timeout, host_command::run(&self.argv))
            .await
            .map_err(|_| {
                guard_error!(command, "{} не ответил за {:?}", self.argv[0], self.timeout)
            })??;

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| guard_error!(command, "{} вернул не UTF-8: {}", self.argv[0], e))?;
        parse_snapshot(&stdout)
    }
}
