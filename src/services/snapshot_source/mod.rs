//! Snapshot sources: responsibility and boundaries
//!
//! This module is responsible ONLY for obtaining the current foreground UI
//! snapshot from the host. It MUST NOT classify anything; all decisions are
//! made by `detection` and acted on by the scanner.

mod command;
mod dry_run;
mod file;
mod r#trait;

pub use self::r#trait::{create_snapshot_source, SnapshotSource};

use crate::error::Result;
use crate::model::UiNode;

/// Разобрать JSON-снимок. Пустой ввод и `null` означают "снимка нет".
pub(crate) fn parse_snapshot(raw: &str) -> Result<Option<UiNode>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str::<Option<UiNode>>(raw)?)
}
