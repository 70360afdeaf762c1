use crate::error::{GuardError, Result};
use crate::guard_error;
use std::process::{Output, Stdio};
use tokio::process::{Child, Command};
use tracing::debug;

fn create_command(argv: &[String]) -> Result<Command> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| guard_error!(command, "пустая команда"))?;

    let mut cmd = Command::new(program);
    cmd.args(args).stdin(Stdio::null()).kill_on_drop(true);
    Ok(cmd)
}

/// Выполнить команду и дождаться её вывода. Ненулевой код выхода - ошибка.
pub async fn run(argv: &[String]) -> Result<Output> {
    let output = create_command(argv)?
        .output()
        .await
        .map_err(|e| guard_error!(command, "{} не запустился: {}", argv[0], e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!("{} вернул ошибку: {}", argv[0], stderr.trim());
        return GuardError::command(format!(
            "{} завершился с {}: {}",
            argv[0],
            output.status,
            stderr.trim()
        ));
    }

    Ok(output)
}

/// Запустить команду без ожидания результата; процесс дожидается фоновая задача
pub fn spawn_detached(argv: &[String]) -> Result<()> {
    let child: Child = create_command(argv)?
        .kill_on_drop(false)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| guard_error!(command, "{} не запустился: {}", argv[0], e))?;

    let program = argv[0].clone();
    tokio::spawn(async move {
        let mut child = child;
        match child.wait().await {
            Ok(status) if status.success() => debug!("{} завершился успешно", program),
            Ok(status) => debug!("{} завершился с {}", program, status),
            Err(e) => debug!("Не удалось дождаться {}: {}", program, e),
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_empty_command_is_rejected() {
        assert!(matches!(run(&[]).await, Err(GuardError::Command(_))));
        assert!(spawn_detached(&[]).is_err());
    }

    #[tokio::test]
    async fn test_missing_program_is_error() {
        let result = run(&argv(&["shorts-guard-definitely-missing-binary"])).await;
        assert!(matches!(result, Err(GuardError::Command(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_captures_stdout() {
        let output = run(&argv(&["echo", "hello"])).await.unwrap();
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hello");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_is_error() {
        assert!(run(&argv(&["false"])).await.is_err());
    }
}
