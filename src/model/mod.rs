pub mod node;
pub mod verdict;

pub use node::{UiNode, BUTTON_CLASS, IMAGE_BUTTON_CLASS};
pub use verdict::{MatchReason, Verdict};
