use ratatui::{prelude::*, widgets::Paragraph};

pub const KEY_HINTS: &str =
    "q quit  t theme  j/k scroll  tab next section  1-5 jump  p pause marquee";

/// Bottom row: the last status message, or key hints when there is none.
pub struct StatusBarWidget<'a> {
    message: Option<&'a str>,
    style: Style,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(message: Option<&'a str>) -> Self {
        Self {
            message,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn text(&self) -> &str {
        self.message.unwrap_or(KEY_HINTS)
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Paragraph::new(format!(" {}", self.text()))
            .style(self.style)
            .render(area, buf);
    }
}
