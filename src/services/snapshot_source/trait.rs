use crate::config::{Config, SnapshotSourceKind};
use crate::error::Result;
use crate::model::UiNode;

/// Trait for the host-side provider of the foreground UI snapshot
#[async_trait::async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetch the current snapshot. `Ok(None)` means no snapshot is available
    /// right now, which is an expected transient state and not an error.
    async fn current_snapshot(&self) -> Result<Option<UiNode>>;
}

/// Factory function to create an appropriate snapshot source based on the dry_run flag
pub fn create_snapshot_source(config: &Config, dry_run: bool) -> Result<Box<dyn SnapshotSource>> {
    if dry_run {
        return Ok(Box::new(super::dry_run::DryRunSnapshotSource::new()));
    }

    match config.snapshot.source {
        SnapshotSourceKind::File => Ok(Box::new(super::file::FileSnapshotSource::new(
            config.snapshot.path.clone(),
        ))),
        SnapshotSourceKind::Command => Ok(Box::new(super::command::CommandSnapshotSource::new(
            config.snapshot.command.clone(),
            config.snapshot.timeout(),
        )?)),
    }
}
