//! Status bar component
//!
//! Displays the last status message, or key hints, on the bottom row.

use ratatui::{prelude::*, widgets::Clear};

use crate::{core::state::AppState, presentation::widgets::status_bar::StatusBarWidget};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        let message = state.system.status_message().map(String::as_str);
        let root = state.theme.root_classes().style(&state.page.palette);
        let widget = StatusBarWidget::new(message).style(root.patch(state.page.palette.status_bar));
        frame.render_widget(widget, area);
    }
}
