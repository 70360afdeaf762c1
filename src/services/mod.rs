pub mod controller;
pub mod navigator;
pub mod notifier;
pub mod scanner;
pub mod snapshot_source;

pub use controller::ScannerService;
pub use navigator::{create_navigator, Navigator};
pub use notifier::{LogNotifier, Notice, StatusNotifier};
pub use snapshot_source::{create_snapshot_source, SnapshotSource};
