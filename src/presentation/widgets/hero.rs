use ratatui::{prelude::*, widgets::Paragraph};

use crate::domain::{content::Profile, text::truncate_text};

/// Name and title, centred.
pub struct HeroWidget<'a> {
    profile: &'a Profile,
    name_style: Style,
    title_style: Style,
}

impl<'a> HeroWidget<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self {
            profile,
            name_style: Style::default(),
            title_style: Style::default(),
        }
    }

    pub fn name_style(mut self, style: Style) -> Self {
        self.name_style = style;
        self
    }

    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }
}

impl Widget for HeroWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let width = area.width as usize;
        let lines = vec![
            Line::default(),
            Line::styled(truncate_text(&self.profile.name, width), self.name_style),
            Line::styled(truncate_text(&self.profile.title, width), self.title_style),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
