use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuardError {
    #[error("Ошибка конфигурации: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Некорректный снимок UI: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Ошибка внешней команды: {0}")]
    Command(String),

    #[error("Сервис недоступен: {0}")]
    ServiceUnavailable(String),

    #[error("Внутренняя ошибка: {0}")]
    Internal(String),
}

impl GuardError {
    pub fn command<T>(msg: impl Into<String>) -> Result<T> {
        Err(GuardError::Command(msg.into()))
    }
}

pub type Result<T> = std::result::Result<T, GuardError>;

// Удобные макросы для создания ошибок
#[macro_export]
macro_rules! guard_error {
    (command, $($arg:tt)*) => {
        $crate::error::GuardError::Command(format!($($arg)*))
    };
    (service_unavailable, $($arg:tt)*) => {
        $crate::error::GuardError::ServiceUnavailable(format!($($arg)*))
    };
    (internal, $($arg:tt)*) => {
        $crate::error::GuardError::Internal(format!($($arg)*))
    };
}
