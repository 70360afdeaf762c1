mod command;
mod dry_run;
mod r#trait;

pub use self::r#trait::{create_navigator, Navigator};
