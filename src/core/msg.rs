use serde::{Deserialize, Serialize};

pub mod system;
pub mod theme;
pub mod ui;

use system::SystemMsg;
use theme::ThemeMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Theme operations (delegated to ThemeController)
    Theme(ThemeMsg),

    // Scrolling, navigation and marquee (delegated to UiState)
    Ui(UiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Ui(ui) => ui.is_frequent(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(Msg::Ui(UiMsg::AdvanceMarquee).is_frequent());
        assert!(Msg::Ui(UiMsg::PointerMoved { column: 1, row: 2 }).is_frequent());
        assert!(!Msg::Ui(UiMsg::ScrollBy(1)).is_frequent());
        assert!(!Msg::Theme(ThemeMsg::Toggle).is_frequent());
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
    }

    #[test]
    fn test_msg_serialization() {
        let msg = Msg::Ui(UiMsg::FollowAnchor("skills".to_string()));
        let serialized = serde_json::to_string(&msg).unwrap();
        let deserialized: Msg = serde_json::from_str(&serialized).unwrap();
        assert_eq!(msg, deserialized);
    }
}
