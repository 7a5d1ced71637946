use ratatui::{layout::Position, prelude::*};
use unicode_width::UnicodeWidthStr;

use crate::domain::{icon::IconName, nav::NAV_LABELS, theme::Theme};

/// Columns between nav labels.
const ITEM_GAP: u16 = 3;

/// Where each nav label and the theme toggle sit on the nav row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarLayout {
    /// One rectangle per entry of `NAV_LABELS`. Labels that do not fit are
    /// clipped, possibly to nothing.
    pub items: Vec<Rect>,
    pub toggle: Rect,
}

impl NavBarLayout {
    pub fn new(area: Rect) -> Self {
        let toggle_width = toggle_label(Theme::Dark).width() as u16;
        let toggle = Rect {
            x: area.right().saturating_sub(toggle_width),
            y: area.y,
            width: toggle_width.min(area.width),
            height: area.height.min(1),
        };

        let limit = toggle.x.saturating_sub(1);
        let mut x = area.x.saturating_add(1);
        let items = NAV_LABELS
            .iter()
            .map(|label| {
                let start = x.min(limit);
                let end = x.saturating_add(label.width() as u16).min(limit);
                x = x.saturating_add(label.width() as u16 + ITEM_GAP);
                Rect::new(start, area.y, end - start, toggle.height)
            })
            .collect();

        Self { items, toggle }
    }

    pub fn item_at(&self, position: Position) -> Option<usize> {
        self.items.iter().position(|item| item.contains(position))
    }
}

/// Sun while dark, Moon while light.
pub fn toggle_label(theme: Theme) -> String {
    let icon = match theme {
        Theme::Dark => IconName::Sun,
        Theme::Light => IconName::Moon,
    };
    format!("[{}]", icon.glyph().symbol)
}

/// The sticky top row. It is always drawn dark whatever the theme.
pub struct NavBarWidget {
    active: Option<usize>,
    theme: Theme,
    style: Style,
    active_style: Style,
    toggle_style: Style,
}

impl NavBarWidget {
    pub fn new(active: Option<usize>, theme: Theme) -> Self {
        Self {
            active,
            theme,
            style: Style::default(),
            active_style: Style::default(),
            toggle_style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn active_style(mut self, style: Style) -> Self {
        self.active_style = style;
        self
    }

    pub fn toggle_style(mut self, style: Style) -> Self {
        self.toggle_style = style;
        self
    }
}

impl Widget for NavBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if area.is_empty() {
            return;
        }
        let area = Rect {
            height: 1,
            ..area
        };
        buf.set_style(area, self.style);

        let layout = NavBarLayout::new(area);
        for (index, (label, rect)) in NAV_LABELS.iter().zip(&layout.items).enumerate() {
            if rect.is_empty() {
                continue;
            }
            let style = if self.active == Some(index) {
                self.active_style
            } else {
                self.style
            };
            buf.set_stringn(rect.x, rect.y, label, rect.width as usize, style);
        }

        if !layout.toggle.is_empty() {
            buf.set_stringn(
                layout.toggle.x,
                layout.toggle.y,
                toggle_label(self.theme),
                layout.toggle.width as usize,
                self.toggle_style,
            );
        }
    }
}
