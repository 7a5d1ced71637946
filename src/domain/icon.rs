//! Icon names and their glyphs
//!
//! Skills name their icon with a free-form string. Only the parse from that
//! string into [`IconName`] can fail; every variant maps to a glyph.

use std::str::FromStr;

use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum IconName {
    Atom,
    BarChart,
    Binary,
    Book,
    Bot,
    Braces,
    Brain,
    Bug,
    Camera,
    Cloud,
    Code,
    Coffee,
    Cog,
    Container,
    Cpu,
    Database,
    Gem,
    GitBranch,
    Github,
    Globe,
    Hash,
    Heart,
    Image,
    Key,
    Layers,
    Layout,
    Linkedin,
    Lock,
    Mail,
    Monitor,
    Moon,
    Music,
    Network,
    Package,
    Palette,
    PenTool,
    Phone,
    Server,
    Shield,
    Smartphone,
    Star,
    Sun,
    Terminal,
    Wifi,
    Workflow,
    Wrench,
    Zap,
}

/// A renderable symbol for an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub name: IconName,
    pub symbol: &'static str,
}

impl IconName {
    pub fn glyph(self) -> Glyph {
        let symbol = match self {
            IconName::Atom => "⚛",
            IconName::BarChart => "▇",
            IconName::Binary => "01",
            IconName::Book => "▤",
            IconName::Bot => "⊡",
            IconName::Braces => "{}",
            IconName::Brain => "◎",
            IconName::Bug => "✱",
            IconName::Camera => "◙",
            IconName::Cloud => "☁",
            IconName::Code => "</>",
            IconName::Coffee => "♨",
            IconName::Cog => "⚙",
            IconName::Container => "▥",
            IconName::Cpu => "▣",
            IconName::Database => "⛁",
            IconName::Gem => "◆",
            IconName::GitBranch => "⎇",
            IconName::Github => "◉",
            IconName::Globe => "◍",
            IconName::Hash => "#",
            IconName::Heart => "♥",
            IconName::Image => "▨",
            IconName::Key => "⚷",
            IconName::Layers => "≣",
            IconName::Layout => "▦",
            IconName::Linkedin => "in",
            IconName::Lock => "⊠",
            IconName::Mail => "✉",
            IconName::Monitor => "▭",
            IconName::Moon => "☾",
            IconName::Music => "♪",
            IconName::Network => "⋈",
            IconName::Package => "▧",
            IconName::Palette => "◐",
            IconName::PenTool => "✎",
            IconName::Phone => "☏",
            IconName::Server => "▤",
            IconName::Shield => "◈",
            IconName::Smartphone => "▯",
            IconName::Star => "★",
            IconName::Sun => "☀",
            IconName::Terminal => ">_",
            IconName::Wifi => "≋",
            IconName::Workflow => "⇄",
            IconName::Wrench => "⚒",
            IconName::Zap => "ϟ",
        };
        Glyph { name: self, symbol }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconResolution {
    Glyph(Glyph),
    Missing,
}

impl IconResolution {
    pub fn glyph(self) -> Option<Glyph> {
        match self {
            IconResolution::Glyph(glyph) => Some(glyph),
            IconResolution::Missing => None,
        }
    }
}

/// Resolve an author-supplied icon name.
///
/// Matching ignores ASCII case and separators, so `GitBranch`, `gitbranch`
/// and `git-branch` all resolve to the same glyph.
pub fn resolve(name: &str) -> IconResolution {
    let normalized: String = name
        .trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .collect();
    match IconName::from_str(&normalized) {
        Ok(icon) => IconResolution::Glyph(icon.glyph()),
        Err(_) => IconResolution::Missing,
    }
}
