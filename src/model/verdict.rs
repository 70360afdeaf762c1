use std::fmt;

/// Правило классификатора, которое сработало
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchReason {
    /// YouTube: выбрана вкладка "Shorts"
    ShortsTabSelected,
    /// YouTube: в дереве есть контейнер плеера Shorts
    ReelWatchFragment,
    /// YouTube: кнопка "Navigate up" (срабатывает и вне Shorts)
    NavigateUpButton,
    /// Instagram: просмотрщик Reels без основной ленты
    ClipsViewerWithoutFeed,
    /// Instagram: кнопка "назад" Reels без основной ленты
    BackButtonWithoutFeed,
    /// Instagram: выбрана вкладка Reels
    ClipsTabSelected,
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchReason::ShortsTabSelected => "shorts-tab-selected",
            MatchReason::ReelWatchFragment => "reel-watch-fragment",
            MatchReason::NavigateUpButton => "navigate-up-button",
            MatchReason::ClipsViewerWithoutFeed => "clips-viewer-without-feed",
            MatchReason::BackButtonWithoutFeed => "back-button-without-feed",
            MatchReason::ClipsTabSelected => "clips-tab-selected",
        };
        f.write_str(name)
    }
}

/// Результат классификации одного снимка. Пересчитывается каждый цикл.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Verdict {
    #[default]
    NotDetected,
    Detected(MatchReason),
}

impl Verdict {
    pub fn is_detected(&self) -> bool {
        matches!(self, Verdict::Detected(_))
    }

    pub fn reason(&self) -> Option<MatchReason> {
        match self {
            Verdict::Detected(reason) => Some(*reason),
            Verdict::NotDetected => None,
        }
    }
}

impl From<Option<MatchReason>> for Verdict {
    fn from(reason: Option<MatchReason>) -> Self {
        reason.map_or(Verdict::NotDetected, Verdict::Detected)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::NotDetected => write!(f, "not detected"),
            Verdict::Detected(reason) => write!(f, "detected ({})", reason),
        }
    }
}
