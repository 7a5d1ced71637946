use ratatui::prelude::*;

use crate::domain::content::Project;
use crate::presentation::widgets::{project_card::ProjectCardWidget, render_heading};

pub const PROJECTS_HEADING: &str = "Projects";

/// Heading plus one card per project. Card rectangles come from the page
/// layout and are relative to the same buffer.
pub struct ProjectsWidget<'a> {
    projects: &'a [Project],
    cards: &'a [Rect],
    heading_style: Style,
    card_style: Style,
    title_style: Style,
    image_style: Style,
}

impl<'a> ProjectsWidget<'a> {
    pub fn new(projects: &'a [Project], cards: &'a [Rect]) -> Self {
        Self {
            projects,
            cards,
            heading_style: Style::default(),
            card_style: Style::default(),
            title_style: Style::default(),
            image_style: Style::default(),
        }
    }

    pub fn heading_style(mut self, style: Style) -> Self {
        self.heading_style = style;
        self
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
}

impl Widget for ProjectsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        render_heading(PROJECTS_HEADING, self.heading_style, area, buf);

        let bounds = buf.area;
        for (project, card) in self.projects.iter().zip(self.cards) {
            let card = card.intersection(bounds);
            if card.is_empty() {
                continue;
            }
            ProjectCardWidget::new(project)
                .card_style(self.card_style)
                .title_style(self.title_style)
                .image_style(self.image_style)
                .render(card, buf);
        }
    }
}
