use super::{parse_snapshot, SnapshotSource};
use crate::error::Result;
use crate::model::UiNode;
use crate::trace_if_enabled;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Читает снимок, который мост на стороне устройства выгружает в файл
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait::async_trait]
impl SnapshotSource for FileSnapshotSource {
    async fn current_snapshot(&self) -> Result<Option<UiNode>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                trace_if_enabled!("Файл снимка {:?} ещё не создан", self.path);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        parse_snapshot(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuardError;
    use std::io::Write;

    #[tokio::test]
    async fn test_missing_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSnapshotSource::new(dir.path().join("snapshot.json"));
        assert!(source.current_snapshot().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reads_snapshot() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"packageName":"com.google.android.youtube","className":"android.widget.FrameLayout"}}"#
        )
        .unwrap();

        let source = FileSnapshotSource::new(file.path().to_path_buf());
        let root = source.current_snapshot().await.unwrap().unwrap();
        assert_eq!(root.package_name(), Some("com.google.android.youtube"));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"children\": [").unwrap();

        let source = FileSnapshotSource::new(file.path().to_path_buf());
        assert!(matches!(
            source.current_snapshot().await,
            Err(GuardError::Snapshot(_))
        ));
    }
}
