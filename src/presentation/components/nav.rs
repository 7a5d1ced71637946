//! Sticky navigation bar component

use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::widgets::nav_bar::NavBarWidget};

#[derive(Debug, Clone, Default)]
pub struct NavComponent;

impl NavComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let palette = &state.page.palette;
        let widget = NavBarWidget::new(Some(state.ui.current_nav_index()), state.current_theme())
            .style(palette.navbar)
            .active_style(palette.navbar_active)
            .toggle_style(palette.toggle);
        frame.render_widget(widget, area);
    }
}
