//! Классификатор YouTube Shorts.

use super::tree_query::{has_descendant_where, has_descendant_with_identifier};
use crate::model::{MatchReason, UiNode, Verdict, BUTTON_CLASS, IMAGE_BUTTON_CLASS};

pub const PACKAGE: &str = "com.google.android.youtube";

const REEL_WATCH_FRAGMENT_ID: &str = "com.google.android.youtube:id/reel_watch_fragment_root";
const SHORTS_TAB_DESCRIPTION: &str = "Shorts";
const NAVIGATE_UP_DESCRIPTION: &str = "Navigate up";

/// Проверки в порядке приоритета, первое совпадение побеждает
pub fn classify(root: &UiNode) -> Verdict {
    if is_shorts_tab_active(root) {
        return Verdict::Detected(MatchReason::ShortsTabSelected);
    }
    if has_descendant_with_identifier(root, REEL_WATCH_FRAGMENT_ID) {
        return Verdict::Detected(MatchReason::ReelWatchFragment);
    }
    // Кнопка "Navigate up" встречается и на других экранах YouTube - ложные срабатывания допустимы
    if has_navigate_up_button(root) {
        return Verdict::Detected(MatchReason::NavigateUpButton);
    }
    Verdict::NotDetected
}

fn is_shorts_tab_active(root: &UiNode) -> bool {
    has_descendant_where(root, |node| {
        node.is_selected() && node.is_widget(BUTTON_CLASS, SHORTS_TAB_DESCRIPTION)
    })
}

fn has_navigate_up_button(root: &UiNode) -> bool {
    has_descendant_where(root, |node| {
        node.is_widget(IMAGE_BUTTON_CLASS, NAVIGATE_UP_DESCRIPTION)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(children: impl IntoIterator<Item = UiNode>) -> UiNode {
        UiNode::new("android.widget.FrameLayout")
            .with_package(PACKAGE)
            .with_children(children)
    }

    fn bottom_bar(shorts_selected: bool) -> UiNode {
        UiNode::new("android.widget.LinearLayout").with_children([
            UiNode::new(BUTTON_CLASS).with_description("Home").selected(!shorts_selected),
            UiNode::new(BUTTON_CLASS)
                .with_description("Shorts")
                .selected(shorts_selected),
            UiNode::new(BUTTON_CLASS).with_description("Subscriptions"),
        ])
    }

    #[test]
    fn test_home_feed_not_detected() {
        let root = screen([
            UiNode::new("android.support.v7.widget.RecyclerView")
                .with_view_id("com.google.android.youtube:id/results"),
            bottom_bar(false),
        ]);
        assert_eq!(classify(&root), Verdict::NotDetected);
    }

    #[test]
    fn test_selected_shorts_tab_wins() {
        // Остальные сигналы тоже присутствуют, но приоритет у вкладки
        let root = screen([
            UiNode::new("android.widget.FrameLayout").with_view_id(REEL_WATCH_FRAGMENT_ID),
            UiNode::new(IMAGE_BUTTON_CLASS).with_description("Navigate up"),
            bottom_bar(true),
        ]);
        assert_eq!(
            classify(&root),
            Verdict::Detected(MatchReason::ShortsTabSelected)
        );
    }

    #[test]
    fn test_shorts_tab_requires_button_class() {
        let root = screen([UiNode::new("android.widget.TextView")
            .with_description("Shorts")
            .selected(true)]);
        assert_eq!(classify(&root), Verdict::NotDetected);
    }

    #[test]
    fn test_shorts_tab_description_is_exact() {
        let root = screen([UiNode::new(BUTTON_CLASS)
            .with_description("shorts")
            .selected(true)]);
        assert_eq!(classify(&root), Verdict::NotDetected);
    }

    #[test]
    fn test_reel_watch_fragment_detected() {
        let root = screen([
            UiNode::new("android.widget.FrameLayout")
                .with_child(UiNode::new("android.view.View").with_view_id(REEL_WATCH_FRAGMENT_ID)),
            bottom_bar(false),
        ]);
        assert_eq!(
            classify(&root),
            Verdict::Detected(MatchReason::ReelWatchFragment)
        );
    }

    #[test]
    fn test_reel_watch_fragment_checked_before_navigate_up() {
        let root = screen([
            UiNode::new(IMAGE_BUTTON_CLASS).with_description("Navigate up"),
            UiNode::new("android.view.View").with_view_id(REEL_WATCH_FRAGMENT_ID),
        ]);
        assert_eq!(
            classify(&root),
            Verdict::Detected(MatchReason::ReelWatchFragment)
        );
    }

    #[test]
    fn test_navigate_up_over_fires_outside_shorts() {
        // Известное ложное срабатывание: экран настроек тоже имеет "Navigate up"
        let root = screen([
            UiNode::new(IMAGE_BUTTON_CLASS).with_description("Navigate up"),
            UiNode::new("android.widget.TextView").with_description("Settings"),
        ]);
        assert_eq!(
            classify(&root),
            Verdict::Detected(MatchReason::NavigateUpButton)
        );
    }

    #[test]
    fn test_navigate_up_requires_image_button() {
        let root = screen([UiNode::new(BUTTON_CLASS).with_description("Navigate up")]);
        assert_eq!(classify(&root), Verdict::NotDetected);
    }

    #[test]
    fn test_classify_is_repeatable() {
        let root = screen([bottom_bar(true)]);
        assert_eq!(classify(&root), classify(&root));
    }
}
