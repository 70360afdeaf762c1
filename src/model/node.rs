use serde::{Deserialize, Serialize};
use std::fmt;

/// Классы виджетов, которые проверяют классификаторы
pub const BUTTON_CLASS: &str = "android.widget.Button";
pub const IMAGE_BUTTON_CLASS: &str = "android.widget.ImageButton";

/// Один элемент снимка дерева UI активного окна.
///
/// Снимок принадлежит циклу опроса, который его получил, и не переживает его.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_id: Option<String>,
    #[serde(default)]
    pub selected: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<UiNode>,
}

impl UiNode {
    pub fn new(class_name: impl Into<String>) -> Self {
        let mut node = Self::default();
        node.class_name = Some(class_name.into());
        node
    }

    pub fn with_package(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = Some(package_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.content_description = Some(description.into());
        self
    }

    pub fn with_view_id(mut self, view_id: impl Into<String>) -> Self {
        self.view_id = Some(view_id.into());
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_child(mut self, child: UiNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = UiNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Пакет приложения на переднем плане (осмысленно только для корня)
    pub fn package_name(&self) -> Option<&str> {
        self.package_name.as_deref()
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.content_description.as_deref()
    }

    pub fn view_id(&self) -> Option<&str> {
        self.view_id.as_deref()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn children(&self) -> &[UiNode] {
        &self.children
    }

    /// Проверить класс и точное описание узла
    pub fn is_widget(&self, class_name: &str, description: &str) -> bool {
        self.class_name() == Some(class_name) && self.description() == Some(description)
    }
}

// Разбираем дерево итеративно: глубокие снимки не должны переполнять стек
impl Drop for UiNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl fmt::Display for UiNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class_name().unwrap_or("?"))?;
        if let Some(id) = self.view_id() {
            write!(f, "#{}", id)?;
        }
        if let Some(desc) = self.description() {
            write!(f, " \"{}\"", desc)?;
        }
        if self.selected {
            write!(f, " [selected]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let node = UiNode::new(BUTTON_CLASS)
            .with_description("Shorts")
            .with_view_id("com.example:id/tab")
            .selected(true);

        assert_eq!(node.class_name(), Some(BUTTON_CLASS));
        assert_eq!(node.description(), Some("Shorts"));
        assert_eq!(node.view_id(), Some("com.example:id/tab"));
        assert!(node.is_selected());
        assert!(node.is_widget(BUTTON_CLASS, "Shorts"));
        assert!(!node.is_widget(IMAGE_BUTTON_CLASS, "Shorts"));
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let json = r#"{
            "packageName": "com.instagram.android",
            "children": [
                { "viewId": "android:id/list" },
                { "className": "android.widget.Button", "selected": true }
            ]
        }"#;

        let root: UiNode = serde_json::from_str(json).unwrap();
        assert_eq!(root.package_name(), Some("com.instagram.android"));
        assert_eq!(root.class_name(), None);
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.children()[0].view_id(), Some("android:id/list"));
        assert!(!root.children()[0].is_selected());
        assert!(root.children()[1].is_selected());
    }

    #[test]
    fn test_deep_tree_drops_without_overflow() {
        let mut node = UiNode::new("android.widget.TextView");
        for _ in 0..200_000 {
            node = UiNode::new("android.widget.FrameLayout").with_child(node);
        }
        drop(node);
    }

    #[test]
    fn test_display() {
        let node = UiNode::new(BUTTON_CLASS)
            .with_view_id("app:id/tab")
            .with_description("Shorts")
            .selected(true);
        assert_eq!(
            node.to_string(),
            "android.widget.Button#app:id/tab \"Shorts\" [selected]"
        );
    }
}
