use super::{instagram, youtube};
use crate::model::{UiNode, Verdict};
use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Классификатор одного приложения: чистая функция от текущего снимка
pub type Classifier = fn(&UiNode) -> Verdict;

/// Встроенные классификаторы. Новое приложение - новая строка здесь.
static BUILTIN: Lazy<HashMap<&'static str, Classifier>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, Classifier> = HashMap::new();
    map.insert(youtube::PACKAGE, youtube::classify);
    map.insert(instagram::PACKAGE, instagram::classify);
    map
});

/// Отображение "идентификатор пакета -> классификатор"
#[derive(Clone, Default)]
pub struct ClassifierRegistry {
    classifiers: HashMap<String, Classifier>,
}

impl std::fmt::Debug for ClassifierRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.classifiers.keys()).finish()
    }
}

impl ClassifierRegistry {
    pub fn builtin_packages() -> impl Iterator<Item = &'static str> {
        BUILTIN.keys().copied()
    }

    pub fn is_builtin(package: &str) -> bool {
        BUILTIN.contains_key(package)
    }

    /// Все встроенные классификаторы
    pub fn with_defaults() -> Self {
        Self {
            classifiers: BUILTIN
                .iter()
                .map(|(package, classifier)| (package.to_string(), *classifier))
                .collect(),
        }
    }

    /// Только перечисленные встроенные пакеты
    pub fn for_packages<S: AsRef<str>>(packages: &[S]) -> Result<Self> {
        let mut registry = Self::default();
        for package in packages {
            let package = package.as_ref();
            match BUILTIN.get(package) {
                Some(classifier) => registry.register(package, *classifier),
                None => bail!("Нет классификатора для пакета: {}", package),
            }
        }
        Ok(registry)
    }

    pub fn register(&mut self, package: impl Into<String>, classifier: Classifier) {
        self.classifiers.insert(package.into(), classifier);
    }

    pub fn supports(&self, package: &str) -> bool {
        self.classifiers.contains_key(package)
    }

    pub fn len(&self) -> usize {
        self.classifiers.len()
    }

    /// Неизвестный пакет даёт `NotDetected`
    pub fn classify(&self, package: &str, root: &UiNode) -> Verdict {
        self.classifiers
            .get(package)
            .map_or(Verdict::NotDetected, |classifier| classifier(root))
    }
}
