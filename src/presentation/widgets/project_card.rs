use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders},
};

use crate::domain::{content::Project, icon::IconName, text::truncate_text};
use crate::presentation::layout::card_description_lines;

/// A bordered card: image reference, name, then the wrapped description.
pub struct ProjectCardWidget<'a> {
    project: &'a Project,
    card_style: Style,
    title_style: Style,
    image_style: Style,
}

impl<'a> ProjectCardWidget<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self {
            project,
            card_style: Style::default(),
            title_style: Style::default(),
            image_style: Style::default(),
        }
    }

    pub fn card_style(mut self, style: Style) -> Self {
        self.card_style = style;
        self
    }

    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    pub fn image_style(mut self, style: Style) -> Self {
        self.image_style = style;
        self
    }

    /// The image is shown by reference only.
    pub fn image_line(&self) -> String {
        let glyph = IconName::Image.glyph().symbol;
        if self.project.image.is_empty() {
            glyph.to_string()
        } else {
            format!("{glyph} {}", self.project.image)
        }
    }
}

impl Widget for ProjectCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(self.card_style);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let width = inner.width as usize;
        let mut rows = inner.top()..inner.bottom();
        if let Some(y) = rows.next() {
            buf.set_string(
                inner.x,
                y,
                truncate_text(&self.image_line(), width),
                self.image_style,
            );
        }
        if let Some(y) = rows.next() {
            buf.set_string(
                inner.x,
                y,
                truncate_text(&self.project.name, width),
                self.title_style,
            );
        }
        for (line, y) in card_description_lines(&self.project.description, area.width)
            .iter()
            .zip(rows)
        {
            buf.set_string(inner.x, y, line, Style::default());
        }
    }
}
