//! Reusable UI widgets
//!
//! One widget per page section, plus the nav bar, the status bar and the
//! pieces they are built from. Widgets draw into whatever area they are
//! given and hold no state of their own.

use ratatui::prelude::*;

use crate::presentation::layout::MARGIN;

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod marquee;
pub mod nav_bar;
pub mod project_card;
pub mod projects;
pub mod skills;
pub mod status_bar;

/// Draw a section heading on the first row of `area`.
pub(crate) fn render_heading(title: &str, style: Style, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }
    let x = area.x.saturating_add(MARGIN).min(area.right());
    buf.set_stringn(
        x,
        area.y,
        title,
        (area.right() - x) as usize,
        style,
    );
}

/// Area below the heading and its blank row, inset by the side margins.
pub(crate) fn section_body(area: Rect) -> Rect {
    let inset = area.width.min(MARGIN);
    Rect {
        x: area.x + inset,
        y: area.y.saturating_add(2),
        width: area.width.saturating_sub(MARGIN * 2).max(1).min(area.width),
        height: area.height.saturating_sub(2),
    }
}
