//! The scrolling page
//!
//! The whole page is drawn into an off-screen buffer sized by the
//! [`PageLayout`], then the rows under the scroll position are copied into
//! the frame.

use ratatui::{buffer::Buffer, prelude::*};
use unicode_width::UnicodeWidthStr;

use crate::{
    core::state::{AppState, PageSettings},
    domain::{
        content::Content,
        nav::SectionId,
        theme::{Theme, ThemeController},
    },
    infrastructure::config::Config,
    presentation::{
        layout::PageLayout,
        widgets::{
            about::AboutWidget, contact::ContactWidget, footer::FooterWidget, hero::HeroWidget,
            projects::ProjectsWidget, skills::SkillsWidget,
        },
    },
};

/// Everything the page needs to draw itself.
pub struct PageView<'a> {
    pub content: &'a Content,
    pub theme: &'a ThemeController,
    pub settings: &'a PageSettings,
    pub layout: &'a PageLayout,
    pub marquee_start: usize,
}

impl PageView<'_> {
    /// Draw the full page into a buffer of its own.
    pub fn to_buffer(&self) -> Buffer {
        let mut buf = Buffer::empty(self.layout.area());
        self.render_into(&mut buf);
        buf
    }

    fn render_into(&self, buf: &mut Buffer) {
        let palette = &self.settings.palette;
        let theme = self.theme.current();
        let area = buf.area;
        buf.set_style(area, self.theme.root_classes().style(palette));

        for span in self.layout.sections() {
            let area = self.layout.section_rect(span.id);
            match span.id {
                SectionId::Home => HeroWidget::new(&self.content.profile)
                    .name_style(palette.hero_name)
                    .title_style(palette.hero_title)
                    .render(area, buf),
                SectionId::AboutMe => AboutWidget::new(&self.content.profile.about)
                    .heading_style(palette.heading)
                    .render(area, buf),
                SectionId::Skills => SkillsWidget::new(&self.settings.strip, self.marquee_start)
                    .heading_style(palette.heading)
                    .glyph_style(palette.marquee_glyph)
                    .label_style(palette.marquee_label)
                    .render(area, buf),
                SectionId::Projects => {
                    ProjectsWidget::new(&self.content.projects, self.layout.cards())
                        .heading_style(palette.heading)
                        .card_style(palette.card_style(theme))
                        .title_style(palette.card_title)
                        .image_style(palette.card_image)
                        .render(area, buf)
                }
                SectionId::Contact => ContactWidget::new(&self.content.contact)
                    .heading_style(palette.heading)
                    .link_style(palette.link)
                    .render(area, buf),
                SectionId::Footer => {
                    FooterWidget::new(&self.content.profile.name, self.settings.footer_year)
                        .render(area, buf)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageComponent;

impl PageComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, layout: &PageLayout, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }

        let page = PageView {
            content: &state.content,
            theme: &state.theme,
            settings: &state.page,
            layout,
            marquee_start: state.ui.marquee.window_start(),
        }
        .to_buffer();

        let scroll = state.ui.scroll.min(layout.max_scroll(area.height));
        let root = state.theme.root_classes().style(&state.page.palette);
        blit(&page, scroll, frame.buffer_mut(), area, root);
    }
}

/// Copy page rows starting at `scroll` into `area` of `dst`. Rows past the
/// end of the page are filled with `fill`.
fn blit(page: &Buffer, scroll: u16, dst: &mut Buffer, area: Rect, fill: Style) {
    for dy in 0..area.height {
        let src_y = scroll.saturating_add(dy);
        for dx in 0..area.width {
            let Some(target) = dst.cell_mut((area.x + dx, area.y + dy)) else {
                continue;
            };
            match page.cell((dx, src_y)) {
                Some(cell) => *target = cell.clone(),
                None => {
                    target.reset();
                    target.set_style(fill);
                }
            }
        }
    }
}

/// Plain-text lines of a buffer with trailing blanks trimmed.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let mut line = String::new();
            let mut skip = 0;
            for x in area.left()..area.right() {
                if skip > 0 {
                    skip -= 1;
                    continue;
                }
                if let Some(cell) = buf.cell((x, y)) {
                    line.push_str(cell.symbol());
                    skip = cell.symbol().width().saturating_sub(1);
                }
            }
            line.trim_end().to_string()
        })
        .collect()
}

/// The whole page as text at `width` columns, with built-in styles and the
/// marquee at rest.
pub fn render_page_text(content: &Content, theme: Theme, width: u16) -> Vec<String> {
    let settings = PageSettings::new(content, &Config::default());
    render_page_text_with(content, theme, &settings, width)
}

pub fn render_page_text_with(
    content: &Content,
    theme: Theme,
    settings: &PageSettings,
    width: u16,
) -> Vec<String> {
    let theme = ThemeController::new(theme);
    let layout = PageLayout::compute(content, width);
    let page = PageView {
        content,
        theme: &theme,
        settings,
        layout: &layout,
        marquee_start: 0,
    };
    buffer_lines(&page.to_buffer())
}
