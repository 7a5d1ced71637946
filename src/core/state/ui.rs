use ratatui::layout::{Position, Rect};

use crate::{
    core::{cmd::Cmd, msg::ui::UiMsg, state::marquee::MarqueeState},
    domain::{
        content::Content,
        nav::{nav_items, SectionId, NAV_LABELS},
    },
    presentation::layout::{PageLayout, ScreenLayout},
};

/// UI-related state: screen geometry, scroll position and the marquee
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub screen: ScreenLayout,
    pub layout: PageLayout,
    /// First page row shown in the page window.
    pub scroll: u16,
    /// Nav item last followed. Cleared by free scrolling.
    pub active_nav: Option<usize>,
    /// Last known mouse pointer cell on screen.
    pub pointer: Option<Position>,
    pub marquee: MarqueeState,
}

impl UiState {
    pub fn new(marquee: MarqueeState) -> Self {
        Self {
            marquee,
            ..Default::default()
        }
    }

    /// Recompute geometry for a new terminal size.
    pub fn resize(&mut self, content: &Content, width: u16, height: u16) {
        self.screen = ScreenLayout::new(Rect::new(0, 0, width, height));
        if self.layout.width() != width || self.layout.height() == 0 {
            self.layout = PageLayout::compute(content, width);
        }
        self.scroll = self.scroll.min(self.max_scroll());
        self.refresh_hover();
    }

    /// Re-run the marquee hit test. The row can move under a still pointer.
    fn refresh_hover(&mut self) {
        let hovered = self.pointer.is_some_and(|pointer| {
            self.layout.page_row_at(self.screen.page, self.scroll, pointer)
                == Some(self.layout.marquee_row())
        });
        self.marquee.set_hovered(hovered);
    }

    pub fn page_height(&self) -> u16 {
        self.screen.page.height
    }

    pub fn max_scroll(&self) -> u16 {
        self.layout.max_scroll(self.page_height())
    }

    /// Nav item to highlight: the one last followed, otherwise the one whose
    /// section is at the top of the page window.
    pub fn current_nav_index(&self) -> usize {
        self.active_nav.unwrap_or_else(|| {
            self.layout
                .section_at(self.scroll)
                .nav_index()
                .unwrap_or(NAV_LABELS.len() - 1)
        })
    }

    fn scroll_to(&mut self, row: i64) {
        self.scroll = row.clamp(0, i64::from(self.max_scroll())) as u16;
    }

    fn follow_anchor(&mut self, anchor: &str) -> Vec<Cmd> {
        let Some(id) = SectionId::from_anchor(anchor) else {
            return vec![Cmd::LogWarn {
                message: format!("No section with id #{anchor}"),
            }];
        };
        self.scroll = self.layout.anchor_offset(id).min(self.max_scroll());
        self.active_nav = id.nav_index();
        vec![Cmd::RequestRender]
    }

    fn follow_nav(&mut self, index: usize) -> Vec<Cmd> {
        match nav_items().get(index) {
            Some(item) => self.follow_anchor(&item.anchor),
            None => vec![],
        }
    }

    /// UI-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        let commands = self.apply(msg);
        self.refresh_hover();
        commands
    }

    fn apply(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::ScrollBy(rows) => {
                self.active_nav = None;
                self.scroll_to(i64::from(self.scroll) + i64::from(rows));
                vec![Cmd::RequestRender]
            }
            UiMsg::ScrollPages(pages) => {
                let rows = i64::from(self.page_height().max(1)) * i64::from(pages);
                self.active_nav = None;
                self.scroll_to(i64::from(self.scroll) + rows);
                vec![Cmd::RequestRender]
            }
            UiMsg::ScrollToTop => {
                self.active_nav = None;
                self.scroll = 0;
                vec![Cmd::RequestRender]
            }
            UiMsg::ScrollToBottom => {
                self.active_nav = None;
                self.scroll = self.max_scroll();
                vec![Cmd::RequestRender]
            }

            UiMsg::FollowAnchor(anchor) => self.follow_anchor(&anchor),
            UiMsg::FollowNav(index) => self.follow_nav(index),
            UiMsg::NextSection => {
                let next = (self.current_nav_index() + 1) % NAV_LABELS.len();
                self.follow_nav(next)
            }
            UiMsg::PrevSection => {
                let len = NAV_LABELS.len();
                let prev = (self.current_nav_index() + len - 1) % len;
                self.follow_nav(prev)
            }

            UiMsg::AdvanceMarquee => {
                self.marquee.advance();
                vec![]
            }
            UiMsg::PointerMoved { column, row } => {
                self.pointer = Some(Position::new(column, row));
                vec![]
            }
            UiMsg::ToggleMarqueePause => {
                let paused = self.marquee.toggle_pause();
                vec![
                    Cmd::LogInfo {
                        message: format!(
                            "Marquee {}",
                            if paused { "paused" } else { "resumed" }
                        ),
                    },
                    Cmd::RequestRender,
                ]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn ui_state(width: u16, height: u16) -> UiState {
        let mut ui = UiState::new(MarqueeState::new(1.0, 1.0, 10, true));
        ui.resize(&Content::bundled().unwrap(), width, height);
        ui
    }

    #[test]
    fn test_resize_sets_page_window() {
        let ui = ui_state(100, 30);
        assert_eq!(ui.page_height(), 28);
        assert_eq!(ui.layout.width(), 100);
        assert_eq!(ui.max_scroll(), ui.layout.height() - 28);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut ui = ui_state(100, 20);
        ui.update(UiMsg::ScrollBy(-5));
        assert_eq!(ui.scroll, 0);

        ui.update(UiMsg::ScrollBy(10_000));
        assert_eq!(ui.scroll, ui.max_scroll());

        ui.update(UiMsg::ScrollToTop);
        assert_eq!(ui.scroll, 0);
        ui.update(UiMsg::ScrollToBottom);
        assert_eq!(ui.scroll, ui.max_scroll());
    }

    #[test]
    fn test_scroll_pages() {
        let mut ui = ui_state(100, 12);
        ui.update(UiMsg::ScrollPages(1));
        assert_eq!(ui.scroll, 10.min(ui.max_scroll()));
        ui.update(UiMsg::ScrollPages(-1));
        assert_eq!(ui.scroll, 0);
    }

    #[rstest]
    #[case("home", SectionId::Home)]
    #[case("aboutme", SectionId::AboutMe)]
    #[case("#skills", SectionId::Skills)]
    #[case("projects", SectionId::Projects)]
    fn test_follow_anchor_puts_section_at_top(#[case] anchor: &str, #[case] id: SectionId) {
        let mut ui = ui_state(100, 10);
        let cmds = ui.update(UiMsg::FollowAnchor(anchor.to_string()));
        assert_eq!(cmds, vec![Cmd::RequestRender]);
        assert_eq!(ui.scroll, ui.layout.anchor_offset(id));
        assert_eq!(ui.layout.section_at(ui.scroll), id);
    }

    #[test]
    fn test_follow_anchor_clamps_to_max_scroll() {
        let mut ui = ui_state(100, 10);
        ui.update(UiMsg::FollowAnchor("footer".to_string()));
        assert_eq!(ui.scroll, ui.max_scroll());
    }

    #[test]
    fn test_follow_unknown_anchor_keeps_scroll() {
        let mut ui = ui_state(100, 10);
        ui.update(UiMsg::ScrollBy(3));
        let cmds = ui.update(UiMsg::FollowAnchor("blog".to_string()));
        assert_eq!(ui.scroll, 3);
        assert!(matches!(cmds.as_slice(), [Cmd::LogWarn { .. }]));
    }

    #[test]
    fn test_follow_nav_highlights_item() {
        let mut ui = ui_state(100, 40);
        ui.update(UiMsg::FollowNav(4));
        assert_eq!(ui.current_nav_index(), 4);

        // out of range is ignored
        assert!(ui.update(UiMsg::FollowNav(9)).is_empty());
        assert_eq!(ui.current_nav_index(), 4);
    }

    #[test]
    fn test_next_and_prev_section_wrap() {
        let mut ui = ui_state(100, 10);
        assert_eq!(ui.current_nav_index(), 0);

        ui.update(UiMsg::NextSection);
        assert_eq!(ui.current_nav_index(), 1);
        assert_eq!(ui.scroll, ui.layout.anchor_offset(SectionId::AboutMe));

        ui.update(UiMsg::PrevSection);
        ui.update(UiMsg::PrevSection);
        assert_eq!(ui.current_nav_index(), NAV_LABELS.len() - 1);

        ui.update(UiMsg::NextSection);
        assert_eq!(ui.current_nav_index(), 0);
        assert_eq!(ui.scroll, 0);
    }

    #[test]
    fn test_free_scroll_clears_followed_item() {
        let mut ui = ui_state(100, 10);
        ui.update(UiMsg::FollowNav(2));
        ui.update(UiMsg::ScrollToTop);
        assert_eq!(ui.active_nav, None);
        assert_eq!(ui.current_nav_index(), 0);
    }

    #[test]
    fn test_marquee_messages() {
        let mut ui = ui_state(100, 30);
        ui.update(UiMsg::AdvanceMarquee);
        assert_eq!(ui.marquee.window_start(), 1);

        let marquee_row = ui.layout.marquee_row() + ui.screen.page.y;
        ui.update(UiMsg::PointerMoved {
            column: 3,
            row: marquee_row,
        });
        ui.update(UiMsg::AdvanceMarquee);
        assert_eq!(ui.marquee.window_start(), 1);

        ui.update(UiMsg::PointerMoved {
            column: 3,
            row: marquee_row + 1,
        });
        ui.update(UiMsg::ToggleMarqueePause);
        ui.update(UiMsg::AdvanceMarquee);
        assert_eq!(ui.marquee.window_start(), 1);
    }

    #[test]
    fn test_shrinking_window_clamps_scroll() {
        let mut ui = ui_state(100, 10);
        ui.update(UiMsg::ScrollToBottom);
        ui.resize(&Content::bundled().unwrap(), 100, 60);
        assert_eq!(ui.scroll, ui.max_scroll());
    }

    #[test]
    fn test_scrolling_rechecks_hover() {
        let mut ui = ui_state(100, 30);
        let marquee_row = ui.layout.marquee_row() + ui.screen.page.y;
        ui.update(UiMsg::PointerMoved {
            column: 3,
            row: marquee_row,
        });
        assert!(ui.marquee.is_paused());

        ui.update(UiMsg::ScrollBy(1));
        assert!(!ui.marquee.is_paused());

        // pointer now sits one row above the strip; scrolling back brings it under
        ui.update(UiMsg::ScrollToTop);
        assert!(ui.marquee.is_paused());

        ui.update(UiMsg::FollowAnchor("projects".to_string()));
        assert!(!ui.marquee.is_hovered());
    }

    #[test]
    fn test_resize_rechecks_hover() {
        let mut ui = ui_state(100, 30);
        let marquee_row = ui.layout.marquee_row() + ui.screen.page.y;
        ui.update(UiMsg::PointerMoved {
            column: 3,
            row: marquee_row,
        });
        assert!(ui.marquee.is_hovered());

        // the strip row falls outside a short window
        ui.resize(&Content::bundled().unwrap(), 100, 8);
        assert!(!ui.marquee.is_hovered());
    }
}
