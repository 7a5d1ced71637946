use ratatui::prelude::*;

use crate::presentation::widgets::{
    marquee::{MarqueeStrip, MarqueeWidget},
    render_heading,
};

pub const SKILLS_HEADING: &str = "Skills";

/// Heading plus the marquee on the third row.
pub struct SkillsWidget<'a> {
    strip: &'a MarqueeStrip,
    start: usize,
    heading_style: Style,
    glyph_style: Style,
    label_style: Style,
}

impl<'a> SkillsWidget<'a> {
    pub fn new(strip: &'a MarqueeStrip, start: usize) -> Self {
        Self {
            strip,
            start,
            heading_style: Style::default(),
            glyph_style: Style::default(),
            label_style: Style::default(),
        }
    }

    pub fn heading_style(mut self, style: Style) -> Self {
        self.heading_style = style;
        self
    }

    pub fn glyph_style(mut self, style: Style) -> Self {
        self.glyph_style = style;
        self
    }

    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }
}

impl Widget for SkillsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        render_heading(SKILLS_HEADING, self.heading_style, area, buf);

        if area.height < 3 {
            return;
        }
        let row = Rect::new(area.x, area.y + 2, area.width, 1);
        MarqueeWidget::new(self.strip, self.start)
            .glyph_style(self.glyph_style)
            .label_style(self.label_style)
            .render(row, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::content::Skill;

    #[test]
    fn test_render() {
        let strip = MarqueeStrip::new(
            &[Skill {
                name: "Go".into(),
                icon: "NotARealIcon".into(),
            }],
            None,
        );
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 4));
        SkillsWidget::new(&strip, 0).render(buf.area, &mut buf);
        assert_eq!(
            buf,
            Buffer::with_lines(["  Skills", "        ", "Go    Go", "        "])
        );
    }
}
