use crate::config::NotificationConfig;
use tracing::info;

/// Постоянное уведомление низкой важности, пока идёт опрос
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub channel_id: String,
    pub channel_name: String,
    pub title: String,
    pub text: String,
}

impl From<&NotificationConfig> for Notice {
    fn from(config: &NotificationConfig) -> Self {
        Self {
            channel_id: config.channel_id.clone(),
            channel_name: config.channel_name.clone(),
            title: config.title.clone(),
            text: config.text.clone(),
        }
    }
}

/// Trait for the host's status notification surface
pub trait StatusNotifier: Send + Sync {
    fn show(&self, notice: &Notice);
    fn dismiss(&self);
}

/// Пишет статус в лог вместо системного уведомления
pub struct LogNotifier;

impl StatusNotifier for LogNotifier {
    fn show(&self, notice: &Notice) {
        info!(
            channel = %notice.channel_id,
            "[{}] {}: {}",
            notice.channel_name,
            notice.title,
            notice.text
        );
    }

    fn dismiss(&self) {
        info!("Статусное уведомление снято");
    }
}
