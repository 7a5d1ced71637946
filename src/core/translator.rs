use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::{
    core::{
        msg::{system::SystemMsg, theme::ThemeMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::nav::nav_items,
    presentation::{config::keybindings::Action, widgets::nav_bar::NavBarLayout},
};

/// Rows moved per mouse wheel notch.
const WHEEL_STEP: i32 = 3;

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on key bindings and page geometry
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),

        // The marquee moves on the tick clock
        RawMsg::Tick => vec![Msg::Ui(UiMsg::AdvanceMarquee)],

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Drawing is driven by the host
        RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Get keybindings from config state (flat mapping)
    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(action);
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: &Action) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::ToggleTheme => vec![Msg::Theme(ThemeMsg::Toggle)],
        Action::ScrollUp => vec![Msg::Ui(UiMsg::ScrollBy(-1))],
        Action::ScrollDown => vec![Msg::Ui(UiMsg::ScrollBy(1))],
        Action::PageUp => vec![Msg::Ui(UiMsg::ScrollPages(-1))],
        Action::PageDown => vec![Msg::Ui(UiMsg::ScrollPages(1))],
        Action::ScrollToTop => vec![Msg::Ui(UiMsg::ScrollToTop)],
        Action::ScrollToBottom => vec![Msg::Ui(UiMsg::ScrollToBottom)],
        Action::NextSection => vec![Msg::Ui(UiMsg::NextSection)],
        Action::PrevSection => vec![Msg::Ui(UiMsg::PrevSection)],
        Action::FollowNav(index) => vec![Msg::Ui(UiMsg::FollowNav(*index))],
        Action::ToggleMarquee => vec![Msg::Ui(UiMsg::ToggleMarqueePause)],
    }
}

/// Hit-tests clicks against the nav bar. Pointer moves are passed on for
/// the marquee hover check.
fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    let position = Position::new(mouse.column, mouse.row);
    let screen = state.ui.screen;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if screen.nav.contains(position) => {
            let nav_bar = NavBarLayout::new(screen.nav);
            if nav_bar.toggle.contains(position) {
                vec![Msg::Theme(ThemeMsg::Toggle)]
            } else {
                nav_bar
                    .item_at(position)
                    .and_then(|index| nav_items().into_iter().nth(index))
                    .map(|item| vec![Msg::Ui(UiMsg::FollowAnchor(item.anchor))])
                    .unwrap_or_default()
            }
        }
        MouseEventKind::ScrollDown => vec![Msg::Ui(UiMsg::ScrollBy(WHEEL_STEP))],
        MouseEventKind::ScrollUp => vec![Msg::Ui(UiMsg::ScrollBy(-WHEEL_STEP))],
        MouseEventKind::Moved if state.ui.pointer != Some(position) => {
            vec![Msg::Ui(UiMsg::PointerMoved {
                column: mouse.column,
                row: mouse.row,
            })]
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::KeyEventKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        domain::{content::Content, theme::Theme},
        infrastructure::config::Config,
    };

    fn create_test_state() -> AppState {
        let mut state = AppState::new(
            Arc::new(Content::bundled().unwrap()),
            Config::bundled().unwrap(),
            Theme::Dark,
            4.0,
        );
        state.resize(100, 30);
        state
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> RawMsg {
        RawMsg::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> RawMsg {
        RawMsg::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_system_events() {
        let state = create_test_state();
        assert_eq!(
            translate_raw_to_domain(RawMsg::Quit, &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Resize(80, 24), &state),
            vec![Msg::System(SystemMsg::Resize(80, 24))]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Tick, &state),
            vec![Msg::Ui(UiMsg::AdvanceMarquee)]
        );
        assert!(translate_raw_to_domain(RawMsg::Render, &state).is_empty());
    }

    #[rstest]
    #[case(KeyCode::Char('q'), KeyModifiers::NONE, Msg::System(SystemMsg::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Msg::System(SystemMsg::Quit))]
    #[case(KeyCode::Char('z'), KeyModifiers::CONTROL, Msg::System(SystemMsg::Suspend))]
    #[case(KeyCode::Char('t'), KeyModifiers::NONE, Msg::Theme(ThemeMsg::Toggle))]
    #[case(KeyCode::Char('j'), KeyModifiers::NONE, Msg::Ui(UiMsg::ScrollBy(1)))]
    #[case(KeyCode::Up, KeyModifiers::NONE, Msg::Ui(UiMsg::ScrollBy(-1)))]
    #[case(KeyCode::PageDown, KeyModifiers::NONE, Msg::Ui(UiMsg::ScrollPages(1)))]
    #[case(KeyCode::Char('g'), KeyModifiers::NONE, Msg::Ui(UiMsg::ScrollToTop))]
    #[case(KeyCode::Char('G'), KeyModifiers::SHIFT, Msg::Ui(UiMsg::ScrollToBottom))]
    #[case(KeyCode::Char('G'), KeyModifiers::NONE, Msg::Ui(UiMsg::ScrollToBottom))]
    #[case(KeyCode::Tab, KeyModifiers::NONE, Msg::Ui(UiMsg::NextSection))]
    #[case(KeyCode::BackTab, KeyModifiers::SHIFT, Msg::Ui(UiMsg::PrevSection))]
    #[case(KeyCode::Char('3'), KeyModifiers::NONE, Msg::Ui(UiMsg::FollowNav(2)))]
    #[case(KeyCode::Char('p'), KeyModifiers::NONE, Msg::Ui(UiMsg::ToggleMarqueePause))]
    fn test_default_keybindings(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] expected: Msg,
    ) {
        let state = create_test_state();
        assert_eq!(
            translate_raw_to_domain(key(code, modifiers), &state),
            vec![expected]
        );
    }

    #[test]
    fn test_unbound_key() {
        let state = create_test_state();
        assert!(translate_raw_to_domain(key(KeyCode::Char('x'), KeyModifiers::NONE), &state)
            .is_empty());
    }

    #[test]
    fn test_key_release_kind_is_ignored_by_binding_lookup() {
        // only presses match the configured bindings
        let state = create_test_state();
        let mut event = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert!(translate_raw_to_domain(RawMsg::Key(event), &state).is_empty());
    }

    #[test]
    fn test_click_nav_item() {
        let state = create_test_state();
        let nav_bar = NavBarLayout::new(state.ui.screen.nav);
        let skills = nav_bar.items[2];
        assert_eq!(
            translate_raw_to_domain(
                mouse(MouseEventKind::Down(MouseButton::Left), skills.x, 0),
                &state
            ),
            vec![Msg::Ui(UiMsg::FollowAnchor("skills".to_string()))]
        );
    }

    #[test]
    fn test_click_theme_toggle() {
        let state = create_test_state();
        let toggle = NavBarLayout::new(state.ui.screen.nav).toggle;
        assert_eq!(
            translate_raw_to_domain(
                mouse(MouseEventKind::Down(MouseButton::Left), toggle.x, 0),
                &state
            ),
            vec![Msg::Theme(ThemeMsg::Toggle)]
        );
    }

    #[test]
    fn test_click_in_page_does_nothing() {
        let state = create_test_state();
        assert!(translate_raw_to_domain(
            mouse(MouseEventKind::Down(MouseButton::Left), 5, 5),
            &state
        )
        .is_empty());
    }

    #[test]
    fn test_wheel_scrolls() {
        let state = create_test_state();
        assert_eq!(
            translate_raw_to_domain(mouse(MouseEventKind::ScrollDown, 5, 5), &state),
            vec![Msg::Ui(UiMsg::ScrollBy(WHEEL_STEP))]
        );
        assert_eq!(
            translate_raw_to_domain(mouse(MouseEventKind::ScrollUp, 5, 5), &state),
            vec![Msg::Ui(UiMsg::ScrollBy(-WHEEL_STEP))]
        );
    }

    #[test]
    fn test_pointer_moves() {
        let mut state = create_test_state();
        assert_eq!(
            translate_raw_to_domain(mouse(MouseEventKind::Moved, 10, 7), &state),
            vec![Msg::Ui(UiMsg::PointerMoved { column: 10, row: 7 })]
        );

        // no repeat for the same cell
        state.ui.pointer = Some(Position::new(10, 7));
        assert!(translate_raw_to_domain(mouse(MouseEventKind::Moved, 10, 7), &state).is_empty());
    }

    fn apply(state: &mut AppState, raw: RawMsg) {
        for msg in translate_raw_to_domain(raw, state) {
            if let Msg::Ui(ui_msg) = msg {
                state.ui.update(ui_msg);
            }
        }
    }

    #[test]
    fn test_hover_follows_scrolling() {
        let mut state = create_test_state();
        // page window starts one row below the nav bar
        let screen_row = state.ui.layout.marquee_row() + 1;
        apply(&mut state, mouse(MouseEventKind::Moved, 10, screen_row));
        assert!(state.ui.marquee.is_paused());

        // the row scrolls away from a still pointer
        apply(&mut state, mouse(MouseEventKind::ScrollDown, 10, screen_row));
        assert_eq!(state.ui.scroll, WHEEL_STEP as u16);
        assert!(!state.ui.marquee.is_hovered());
        assert!(!state.ui.marquee.is_paused());

        // and back under it
        apply(&mut state, key(KeyCode::Char('g'), KeyModifiers::NONE));
        assert!(state.ui.marquee.is_paused());
    }
}
