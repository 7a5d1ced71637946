use serde::{Deserialize, Serialize};

/// Messages specific to UiState: scrolling, in-page navigation and the marquee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    /// Scroll by a number of rows; negative scrolls up
    ScrollBy(i32),
    /// Scroll by a number of viewport heights
    ScrollPages(i32),
    ScrollToTop,
    ScrollToBottom,

    /// Jump to the section whose id equals the anchor
    FollowAnchor(String),
    /// Jump to the target of the nth navigation item
    FollowNav(usize),
    NextSection,
    PrevSection,

    AdvanceMarquee,
    /// Mouse pointer moved to a screen cell
    PointerMoved { column: u16, row: u16 },
    ToggleMarqueePause,
}

impl UiMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, UiMsg::AdvanceMarquee | UiMsg::PointerMoved { .. })
    }
}
