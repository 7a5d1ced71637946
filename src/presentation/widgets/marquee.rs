use ratatui::prelude::*;
use unicode_width::UnicodeWidthChar;

use crate::domain::{content::Skill, icon};

/// Blank cells after every entry.
const ENTRY_GAP: usize = 4;

/// One skill as it appears in the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarqueeEntry {
    pub glyph: Option<String>,
    pub label: String,
}

impl MarqueeEntry {
    pub fn from_skill(skill: &Skill, missing_icon_placeholder: Option<&str>) -> Self {
        let glyph = match icon::resolve(&skill.icon).glyph() {
            Some(glyph) => Some(glyph.symbol.to_string()),
            None => missing_icon_placeholder.map(String::from),
        };
        Self {
            glyph,
            label: skill.name.clone(),
        }
    }

    pub fn text(&self) -> String {
        match &self.glyph {
            Some(glyph) => format!("{glyph} {}", self.label),
            None => self.label.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Glyph,
    Label,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StripCell {
    symbol: String,
    kind: CellKind,
}

/// The skills laid end to end as a single cycle of cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarqueeStrip {
    entries: Vec<MarqueeEntry>,
    cells: Vec<StripCell>,
}

impl MarqueeStrip {
    pub fn new(skills: &[Skill], missing_icon_placeholder: Option<&str>) -> Self {
        let entries: Vec<_> = skills
            .iter()
            .map(|skill| MarqueeEntry::from_skill(skill, missing_icon_placeholder))
            .collect();

        let mut cells = Vec::new();
        for entry in &entries {
            if let Some(glyph) = &entry.glyph {
                push_cells(&mut cells, glyph, CellKind::Glyph);
                push_cells(&mut cells, " ", CellKind::Blank);
            }
            push_cells(&mut cells, &entry.label, CellKind::Label);
            push_cells(&mut cells, &" ".repeat(ENTRY_GAP), CellKind::Blank);
        }

        Self { entries, cells }
    }

    pub fn entries(&self) -> &[MarqueeEntry] {
        &self.entries
    }

    /// Width of one cycle in cells.
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Visible text for a window of `width` cells starting at `start`,
    /// repeating the strip as often as needed.
    pub fn window_text(&self, start: usize, width: usize) -> String {
        self.window(start, width)
            .map(|cell| cell.symbol.as_str())
            .collect()
    }

    fn window(&self, start: usize, width: usize) -> impl Iterator<Item = &StripCell> + '_ {
        let len = self.cells.len();
        (0..if len == 0 { 0 } else { width }).map(move |i| &self.cells[(start + i) % len])
    }
}

/// Wide characters take one cell plus an empty continuation cell.
fn push_cells(cells: &mut Vec<StripCell>, text: &str, kind: CellKind) {
    for c in text.chars() {
        let width = c.width().unwrap_or(0);
        if width == 0 {
            continue;
        }
        cells.push(StripCell {
            symbol: c.to_string(),
            kind,
        });
        for _ in 1..width {
            cells.push(StripCell {
                symbol: String::new(),
                kind,
            });
        }
    }
}

/// One row of the strip, scrolled to `start`.
pub struct MarqueeWidget<'a> {
    strip: &'a MarqueeStrip,
    start: usize,
    glyph_style: Style,
    label_style: Style,
}

impl<'a> MarqueeWidget<'a> {
    pub fn new(strip: &'a MarqueeStrip, start: usize) -> Self {
        Self {
            strip,
            start,
            glyph_style: Style::default(),
            label_style: Style::default(),
        }
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

impl Widget for MarqueeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if area.is_empty() {
            return;
        }

        let mut x = area.left();
        for (i, cell) in self.strip.window(self.start, area.width as usize).enumerate() {
            if x >= area.right() {
                break;
            }
            if cell.symbol.is_empty() {
                // a window that opens on the tail of a wide glyph shows a blank
                if i == 0 {
                    x += 1;
                }
                continue;
            }
            let style = match cell.kind {
                CellKind::Glyph => self.glyph_style,
                CellKind::Label => self.label_style,
                CellKind::Blank => Style::default(),
            };
            let (next_x, _) = buf.set_stringn(
                x,
                area.top(),
                &cell.symbol,
                (area.right() - x) as usize,
                style,
            );
            x = next_x.max(x + 1);
        }
    }
}
