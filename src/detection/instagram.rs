//! Классификатор Instagram Reels.
//!
//! Превью Reels в ленте тоже несёт идентификатор просмотрщика, поэтому
//! сигналы просмотрщика и кнопки "назад" учитываются только когда
//! основная лента (`android:id/list`) отсутствует на экране.

use super::tree_query::{find_by_identifier, has_descendant_with_identifier};
use crate::model::{MatchReason, UiNode, Verdict};

pub const PACKAGE: &str = "com.instagram.android";

const CLIPS_VIEWER_ID: &str = "com.instagram.android:id/clips_viewer_view_pager";
const BACK_BUTTON_ID: &str = "com.instagram.android:id/action_bar_button_back";
const CLIPS_TAB_ID: &str = "com.instagram.android:id/clips_tab";
const MAIN_FEED_LIST_ID: &str = "android:id/list";

pub fn classify(root: &UiNode) -> Verdict {
    let feed_present = is_main_feed_present(root);

    if !feed_present && has_descendant_with_identifier(root, CLIPS_VIEWER_ID) {
        return Verdict::Detected(MatchReason::ClipsViewerWithoutFeed);
    }
    if !feed_present && has_descendant_with_identifier(root, BACK_BUTTON_ID) {
        return Verdict::Detected(MatchReason::BackButtonWithoutFeed);
    }
    if is_clips_tab_active(root) {
        return Verdict::Detected(MatchReason::ClipsTabSelected);
    }
    Verdict::NotDetected
}

fn is_main_feed_present(root: &UiNode) -> bool {
    has_descendant_with_identifier(root, MAIN_FEED_LIST_ID)
}

fn is_clips_tab_active(root: &UiNode) -> bool {
    find_by_identifier(root, CLIPS_TAB_ID).any(|tab| tab.is_selected())
}
