//! Распознавание: чистая классификация одного снимка UI.
//!
//! Здесь нет состояния между вызовами: вердикт зависит только от снимка.
//! Опрос, побочные эффекты и тайминги живут в `services::scanner`.

pub mod instagram;
pub mod registry;
pub mod tree_query;
pub mod youtube;

pub use registry::ClassifierRegistry;
