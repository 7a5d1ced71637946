use ratatui::prelude::*;

use crate::domain::text::wrap_words;
use crate::presentation::widgets::{render_heading, section_body};

pub const ABOUT_HEADING: &str = "About Me";

pub struct AboutWidget<'a> {
    about: &'a str,
    heading_style: Style,
}

impl<'a> AboutWidget<'a> {
    pub fn new(about: &'a str) -> Self {
        Self {
            about,
            heading_style: Style::default(),
        }
    }

    pub fn heading_style(mut self, style: Style) -> Self {
        self.heading_style = style;
        self
    }
}

impl Widget for AboutWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        render_heading(ABOUT_HEADING, self.heading_style, area, buf);

        let body = section_body(area);
        for (line, y) in wrap_words(self.about, body.width as usize)
            .iter()
            .zip(body.top()..body.bottom())
        {
            buf.set_string(body.x, y, line, Style::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_wraps_text() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 16, 5));
        AboutWidget::new("I build fast tools").render(buf.area, &mut buf);
        assert_eq!(
            buf,
            Buffer::with_lines([
                "  About Me      ",
                "                ",
                "  I build fast  ",
                "  tools         ",
                "                ",
            ])
        );
    }
}
