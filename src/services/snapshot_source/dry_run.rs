use super::SnapshotSource;
use crate::detection::{instagram, youtube};
use crate::error::Result;
use crate::model::{UiNode, BUTTON_CLASS};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// Эмулированные экраны, по кругу
#[derive(Debug, Clone, Copy)]
enum FakeScreen {
    YouTubeHome,
    YouTubeShorts,
    NoWindow,
    InstagramFeedWithReelPreview,
    InstagramReels,
}

const FAKE_SCREENS: [FakeScreen; 5] = [
    FakeScreen::YouTubeHome,
    FakeScreen::YouTubeShorts,
    FakeScreen::NoWindow,
    FakeScreen::InstagramFeedWithReelPreview,
    FakeScreen::InstagramReels,
];

pub struct DryRunSnapshotSource {
    index: AtomicUsize,
}

impl DryRunSnapshotSource {
    pub fn new() -> Self {
        info!("Dry-run режим - снимки UI эмулируются");
        Self {
            index: AtomicUsize::new(0),
        }
    }
}

impl FakeScreen {
    fn render(self) -> Option<UiNode> {
        let youtube_bar = |shorts: bool| {
            UiNode::new("android.widget.LinearLayout").with_children([
                UiNode::new(BUTTON_CLASS).with_description("Home").selected(!shorts),
                UiNode::new(BUTTON_CLASS).with_description("Shorts").selected(shorts),
            ])
        };

        let root = match self {
            FakeScreen::YouTubeHome => UiNode::new("android.widget.FrameLayout")
                .with_package(youtube::PACKAGE)
                .with_child(youtube_bar(false)),
            FakeScreen::YouTubeShorts => UiNode::new("android.widget.FrameLayout")
                .with_package(youtube::PACKAGE)
                .with_child(youtube_bar(true)),
            FakeScreen::NoWindow => return None,
            FakeScreen::InstagramFeedWithReelPreview => UiNode::new("android.widget.FrameLayout")
                .with_package(instagram::PACKAGE)
                .with_child(
                    UiNode::new("androidx.recyclerview.widget.RecyclerView")
                        .with_view_id("android:id/list")
                        .with_child(
                            UiNode::new("androidx.viewpager.widget.ViewPager")
                                .with_view_id("com.instagram.android:id/clips_viewer_view_pager"),
                        ),
                ),
            FakeScreen::InstagramReels => UiNode::new("android.widget.FrameLayout")
                .with_package(instagram::PACKAGE)
                .with_child(
                    UiNode::new("androidx.viewpager.widget.ViewPager")
                        .with_view_id("com.instagram.android:id/clips_viewer_view_pager"),
                ),
        };
        Some(root)
    }
}

#[async_trait::async_trait]
impl SnapshotSource for DryRunSnapshotSource {
    async fn current_snapshot(&self) -> Result<Option<UiNode>> {
        let i = self.index.fetch_add(1, Ordering::Relaxed) % FAKE_SCREENS.len();
        let screen = FAKE_SCREENS[i];
        info!("Dry-run: эмулируем экран {:?}", screen);
        Ok(screen.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::ClassifierRegistry;

    #[tokio::test]
    async fn test_cycle_covers_both_verdicts() {
        let source = DryRunSnapshotSource::new();
        let registry = ClassifierRegistry::with_defaults();

        let mut verdicts = Vec::new();
        for _ in 0..FAKE_SCREENS.len() {
            let verdict = source.current_snapshot().await.unwrap().map(|root| {
                let package = root.package_name().unwrap_or_default().to_string();
                registry.classify(&package, &root).is_detected()
            });
            verdicts.push(verdict);
        }

        assert_eq!(
            verdicts,
            vec![Some(false), Some(true), None, Some(false), Some(true)]
        );
    }
}
