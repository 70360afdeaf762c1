//! Примитивы поиска по снимку дерева UI.
//!
//! Обход всегда итеративный (явный стек), порядок - pre-order, поиск
//! прерывается на первом совпадении.

use crate::model::UiNode;
use smallvec::SmallVec;

/// Pre-order итератор по узлу и всем его потомкам
pub struct Descendants<'a> {
    stack: SmallVec<[&'a UiNode; 32]>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a UiNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Дети кладутся в обратном порядке, чтобы первый ребёнок вышел первым
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

pub fn descendants(root: &UiNode) -> Descendants<'_> {
    let mut stack = SmallVec::new();
    stack.push(root);
    Descendants { stack }
}

/// Поиск по идентификатору ресурса (точное совпадение, включая сам корень)
pub fn find_by_identifier<'a>(
    root: &'a UiNode,
    id: &'a str,
) -> impl Iterator<Item = &'a UiNode> + 'a {
    descendants(root).filter(move |node| node.view_id() == Some(id))
}

pub fn has_descendant_with_identifier(root: &UiNode, id: &str) -> bool {
    find_by_identifier(root, id).next().is_some()
}

pub fn has_descendant_where<F>(root: &UiNode, predicate: F) -> bool
where
    F: FnMut(&UiNode) -> bool,
{
    descendants(root).any(predicate)
}

/// Регистронезависимый поиск подстроки в описании узла
#[allow(dead_code)]
pub fn has_descendant_with_partial_description(root: &UiNode, substring: &str) -> bool {
    let needle = substring.to_lowercase();
    has_descendant_where(root, |node| {
        node.description()
            .is_some_and(|desc| desc.to_lowercase().contains(&needle))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> UiNode {
        UiNode::new("root").with_children([
            UiNode::new("a")
                .with_view_id("app:id/a")
                .with_child(UiNode::new("a1").with_description("Like this video")),
            UiNode::new("b")
                .with_view_id("app:id/b")
                .with_children([
                    UiNode::new("b1").with_view_id("app:id/tab"),
                    UiNode::new("b2").with_view_id("app:id/tab").selected(true),
                ]),
        ])
    }

    #[test]
    fn test_descendants_pre_order() {
        let tree = sample_tree();
        let order: Vec<_> = descendants(&tree)
            .map(|node| node.class_name().unwrap_or_default())
            .collect();
        assert_eq!(order, vec!["root", "a", "a1", "b", "b1", "b2"]);
    }

    #[test]
    fn test_identifier_lookup() {
        let tree = sample_tree();
        assert!(has_descendant_with_identifier(&tree, "app:id/b"));
        assert!(!has_descendant_with_identifier(&tree, "app:id/missing"));
        // Префикс идентификатора не считается совпадением
        assert!(!has_descendant_with_identifier(&tree, "app:id"));
        assert_eq!(find_by_identifier(&tree, "app:id/tab").count(), 2);
    }

    #[test]
    fn test_identifier_lookup_includes_root() {
        let root = UiNode::new("root").with_view_id("app:id/root");
        assert!(has_descendant_with_identifier(&root, "app:id/root"));
    }

    #[test]
    fn test_has_descendant_where_short_circuits() {
        let tree = sample_tree();
        let mut visited = 0;
        let found = has_descendant_where(&tree, |node| {
            visited += 1;
            node.view_id() == Some("app:id/a")
        });
        assert!(found);
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_empty_tree_is_not_found() {
        let leaf = UiNode::default();
        assert!(!has_descendant_with_identifier(&leaf, "app:id/a"));
        assert!(!has_descendant_where(&leaf, |node| node.is_selected()));
        assert!(!has_descendant_with_partial_description(&leaf, "like"));
    }

    #[test]
    fn test_partial_description_ignores_case() {
        let tree = sample_tree();
        assert!(has_descendant_with_partial_description(&tree, "LIKE THIS"));
        assert!(has_descendant_with_partial_description(&tree, "video"));
        assert!(!has_descendant_with_partial_description(&tree, "subscribe"));
    }

    #[test]
    fn test_deep_tree_traversal() {
        let mut node = UiNode::new("leaf").with_view_id("app:id/deep");
        for _ in 0..100_000 {
            node = UiNode::new("android.widget.FrameLayout").with_child(node);
        }
        assert!(has_descendant_with_identifier(&node, "app:id/deep"));
        assert!(!has_descendant_where(&node, |n| n.is_selected()));
    }
}
