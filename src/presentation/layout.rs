//! Page geometry.
//!
//! The page is laid out once per width into a [`PageLayout`] that records
//! where every section and project card sits, in page rows. The screen is
//! split into a sticky nav row, the scrolling page window and a status row.

use ratatui::layout::{Position, Rect};

use crate::domain::{content::Content, nav::SectionId, text::wrap_words};

pub const HERO_HEIGHT: u16 = 5;
pub const SKILLS_HEIGHT: u16 = 4;
pub const CONTACT_HEIGHT: u16 = 6;
pub const FOOTER_HEIGHT: u16 = 3;

/// Blank columns on either side of section bodies.
pub const MARGIN: u16 = 2;
/// Blank columns between project cards.
pub const CARD_GAP: u16 = 2;

/// Project card columns for a page width.
pub fn card_columns(width: u16) -> u16 {
    match width {
        w if w >= 120 => 3,
        w if w >= 80 => 2,
        _ => 1,
    }
}

/// Width available to section bodies.
pub fn body_width(width: u16) -> u16 {
    width.saturating_sub(MARGIN * 2).max(1)
}

/// Lines of a project description inside a card of `card_width`.
pub fn card_description_lines(description: &str, card_width: u16) -> Vec<String> {
    wrap_words(description, card_width.saturating_sub(2).max(1) as usize)
}

/// Split of the terminal into nav bar, page window and status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub nav: Rect,
    pub page: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let nav = Rect {
            height: area.height.min(1),
            ..area
        };
        let status_height = u16::from(area.height >= 2);
        let status = Rect {
            y: area.bottom().saturating_sub(status_height),
            height: status_height,
            ..area
        };
        let page = Rect {
            y: nav.bottom(),
            height: area.height.saturating_sub(nav.height + status.height),
            ..area
        };
        Self { nav, page, status }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub top: u16,
    pub height: u16,
}

impl SectionSpan {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }

    pub fn contains_row(&self, row: u16) -> bool {
        (self.top..self.bottom()).contains(&row)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageLayout {
    width: u16,
    sections: Vec<SectionSpan>,
    cards: Vec<Rect>,
    height: u16,
}

impl PageLayout {
    pub fn compute(content: &Content, width: u16) -> Self {
        let about_lines = wrap_words(&content.profile.about, body_width(width) as usize).len();
        let about_height = 3u16.saturating_add(row_count(about_lines));

        let mut sections = Vec::with_capacity(SectionId::ORDER.len());
        let mut cards = Vec::with_capacity(content.projects.len());
        let mut top = 0u16;

        for id in SectionId::ORDER {
            let height = match id {
                SectionId::Home => HERO_HEIGHT,
                SectionId::AboutMe => about_height,
                SectionId::Skills => SKILLS_HEIGHT,
                SectionId::Projects => {
                    let grid_top = top.saturating_add(2);
                    let grid = layout_cards(content, width, grid_top);
                    let grid_height = grid
                        .iter()
                        .map(|card| card.bottom())
                        .max()
                        .map_or(0, |bottom| bottom.saturating_sub(grid_top));
                    cards = grid;
                    3u16.saturating_add(grid_height)
                }
                SectionId::Contact => CONTACT_HEIGHT,
                SectionId::Footer => FOOTER_HEIGHT,
            };
            sections.push(SectionSpan { id, top, height });
            top = top.saturating_add(height);
        }

        Self {
            width,
            sections,
            cards,
            height: top,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Total page height in rows.
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn sections(&self) -> &[SectionSpan] {
        &self.sections
    }

    pub fn section(&self, id: SectionId) -> Option<SectionSpan> {
        self.sections.iter().copied().find(|span| span.id == id)
    }

    pub fn section_rect(&self, id: SectionId) -> Rect {
        self.section(id)
            .map(|span| Rect::new(0, span.top, self.width, span.height))
            .unwrap_or_default()
    }

    /// Page-relative card rectangles, one per project in source order.
    pub fn cards(&self) -> &[Rect] {
        &self.cards
    }

    /// Row offset that puts `id` at the top of the page window.
    pub fn anchor_offset(&self, id: SectionId) -> u16 {
        self.section(id).map_or(0, |span| span.top)
    }

    /// Section covering page row `row`. Rows past the end belong to the last
    /// section.
    pub fn section_at(&self, row: u16) -> SectionId {
        self.sections
            .iter()
            .find(|span| span.contains_row(row))
            .or(self.sections.last())
            .map_or(SectionId::Home, |span| span.id)
    }

    pub fn marquee_row(&self) -> u16 {
        self.anchor_offset(SectionId::Skills).saturating_add(2)
    }

    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.height.saturating_sub(viewport_height)
    }

    /// Page row under a screen position, if it falls inside the page window.
    pub fn page_row_at(&self, page_window: Rect, scroll: u16, position: Position) -> Option<u16> {
        page_window
            .contains(position)
            .then(|| scroll.saturating_add(position.y - page_window.y))
    }
}

fn layout_cards(content: &Content, width: u16, grid_top: u16) -> Vec<Rect> {
    let columns = card_columns(width);
    let inner = body_width(width);
    let card_width = (inner.saturating_sub(CARD_GAP * (columns - 1)) / columns).max(4);

    let mut cards = Vec::with_capacity(content.projects.len());
    let mut row_top = grid_top;
    for row in content.projects.chunks(columns as usize) {
        let row_height = row
            .iter()
            .map(|project| card_height(&project.description, card_width))
            .max()
            .unwrap_or(0);
        for (column, project) in row.iter().enumerate() {
            let x = MARGIN + column as u16 * (card_width + CARD_GAP);
            let height = card_height(&project.description, card_width);
            cards.push(Rect::new(x, row_top, card_width, height.max(row_height)));
        }
        row_top = row_top.saturating_add(row_height).saturating_add(1);
    }
    cards
}

/// Borders, image line, name line and the wrapped description.
fn card_height(description: &str, card_width: u16) -> u16 {
    4u16.saturating_add(row_count(
        card_description_lines(description, card_width).len(),
    ))
}

/// Line count as rows, pinned at the largest page a `u16` can address.
fn row_count(lines: usize) -> u16 {
    u16::try_from(lines).unwrap_or(u16::MAX)
}
