use crate::core::{
    cmd::Cmd,
    msg::{system::SystemMsg, theme::ThemeMsg, Msg},
    state::AppState,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // Resize touches both the page geometry and the system state
        Msg::System(SystemMsg::Resize(width, height)) => {
            state.resize(width, height);
            let commands = state.system.update(SystemMsg::Resize(width, height));
            (state, commands)
        }

        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Theme messages (delegated to ThemeController)
        Msg::Theme(theme_msg) => {
            let theme = match theme_msg {
                ThemeMsg::Toggle => state.theme.toggle(),
            };
            let commands = vec![
                Cmd::LogInfo {
                    message: format!("Theme switched to {theme}"),
                },
                Cmd::RequestRender,
            ];
            (state, commands)
        }

        // UI messages (delegated to UiState)
        Msg::Ui(ui_msg) => {
            let commands = state.ui.update(ui_msg);
            (state, commands)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::msg::ui::UiMsg,
        domain::{
            content::Content,
            nav::SectionId,
            theme::{PresentationClass, Theme},
        },
        infrastructure::config::Config,
    };

    fn create_test_state() -> AppState {
        let mut state = AppState::new(
            Arc::new(Content::bundled().unwrap()),
            Config::bundled().unwrap(),
            Theme::Dark,
            4.0,
        );
        state.resize(100, 20);
        state
    }

    #[test]
    fn test_quit_message() {
        let state = create_test_state();
        let (new_state, cmds) = update(Msg::System(SystemMsg::Quit), state);
        assert!(new_state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_resize_relayouts_page() {
        let state = create_test_state();
        let (new_state, cmds) = update(Msg::System(SystemMsg::Resize(60, 40)), state);
        assert_eq!(new_state.ui.layout.width(), 60);
        assert_eq!(new_state.ui.page_height(), 38);
        assert_eq!(cmds, vec![Cmd::RequestRender]);
    }

    #[test]
    fn test_theme_toggle() {
        let state = create_test_state();
        let (new_state, cmds) = update(Msg::Theme(ThemeMsg::Toggle), state);
        assert_eq!(new_state.current_theme(), Theme::Light);
        assert!(new_state
            .theme
            .root_classes()
            .contains(PresentationClass::TextDark));
        assert_eq!(
            cmds,
            vec![
                Cmd::LogInfo {
                    message: "Theme switched to light".to_string()
                },
                Cmd::RequestRender
            ]
        );
    }

    #[test]
    fn test_theme_toggle_twice_restores_classes() {
        let state = create_test_state();
        let original = state.theme.root_classes().clone();
        let (state, _) = update(Msg::Theme(ThemeMsg::Toggle), state);
        let (state, _) = update(Msg::Theme(ThemeMsg::Toggle), state);
        assert_eq!(state.theme.root_classes(), &original);
    }

    #[test]
    fn test_follow_anchor_through_update() {
        let state = create_test_state();
        let (state, _) = update(Msg::Ui(UiMsg::FollowAnchor("skills".into())), state);
        assert_eq!(state.ui.scroll, state.ui.layout.anchor_offset(SectionId::Skills));
    }

    #[test]
    fn test_theme_survives_scrolling() {
        let state = create_test_state();
        let (state, _) = update(Msg::Theme(ThemeMsg::Toggle), state);
        let (state, _) = update(Msg::Ui(UiMsg::ScrollBy(4)), state);
        assert_eq!(state.current_theme(), Theme::Light);
    }
}
