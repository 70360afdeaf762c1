use super::Navigator;
use crate::error::Result;
use tracing::info;

pub struct DryRunNavigator;

impl DryRunNavigator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Navigator for DryRunNavigator {
    async fn trigger_back_navigation(&self) -> Result<()> {
        info!("Dry-run: навигация назад (реальное действие не выполняется)");
        Ok(())
    }
}
