use ratatui::prelude::*;

use crate::domain::content::ContactInfo;
use crate::presentation::widgets::{render_heading, section_body};

pub const CONTACT_HEADING: &str = "Contact";

pub struct ContactWidget<'a> {
    contact: &'a ContactInfo,
    heading_style: Style,
    link_style: Style,
}

impl<'a> ContactWidget<'a> {
    pub fn new(contact: &'a ContactInfo) -> Self {
        Self {
            contact,
            heading_style: Style::default(),
            link_style: Style::default(),
        }
    }

    pub fn heading_style(mut self, style: Style) -> Self {
        self.heading_style = style;
        self
    }

    pub fn link_style(mut self, style: Style) -> Self {
        self.link_style = style;
        self
    }

    pub fn lines(&self) -> Vec<Line<'_>> {
        vec![
            Line::from(format!("Email: {}", self.contact.email)),
            Line::from(format!("Mobile no: {}", self.contact.mobile_number)),
            Line::from(vec![
                Span::raw("LinkedIn: "),
                Span::styled(self.contact.linkedin_url.as_str(), self.link_style),
            ]),
        ]
    }
}

impl Widget for ContactWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        render_heading(CONTACT_HEADING, self.heading_style, area, buf);

        let body = section_body(area);
        for (line, y) in self.lines().iter().zip(body.top()..body.bottom()) {
            buf.set_line(body.x, y, line, body.width);
        }
    }
}
