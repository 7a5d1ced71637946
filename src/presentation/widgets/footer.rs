use ratatui::{prelude::*, widgets::Paragraph};

pub fn copyright(year: i32, name: &str) -> String {
    format!("© {year} {name}. All rights reserved.")
}

pub struct FooterWidget<'a> {
    name: &'a str,
    year: i32,
}

impl<'a> FooterWidget<'a> {
    pub fn new(name: &'a str, year: i32) -> Self {
        Self { name, year }
    }
}

impl Widget for FooterWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Paragraph::new(vec![
            Line::default(),
            Line::from(copyright(self.year, self.name)),
        ])
        .alignment(Alignment::Center)
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_copyright() {
        assert_eq!(
            copyright(2025, "Jane Doe"),
            "© 2025 Jane Doe. All rights reserved."
        );
    }
}
