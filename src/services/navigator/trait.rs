use crate::config::Config;
use crate::error::Result;

/// Trait for the host-side "back" navigation action
#[async_trait::async_trait]
pub trait Navigator: Send + Sync {
    /// Fire the back navigation. Implementations must not wait for the
    /// resulting screen; an `Err` only means the action could not be issued.
    async fn trigger_back_navigation(&self) -> Result<()>;
}

/// Factory function to create an appropriate navigator based on the dry_run flag
pub fn create_navigator(config: &Config, dry_run: bool) -> Result<Box<dyn Navigator>> {
    if dry_run {
        Ok(Box::new(super::dry_run::DryRunNavigator::new()))
    } else {
        Ok(Box::new(super::command::CommandNavigator::new(
            config.navigation.back_command.clone(),
        )?))
    }
}
