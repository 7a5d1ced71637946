//! In-page navigation
//!
//! Nav labels turn into anchors by lower-casing and dropping spaces. Each
//! anchor names one [`SectionId`].

use std::str::FromStr;

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Labels shown in the navigation bar, in order.
pub const NAV_LABELS: [&str; 5] = ["Home", "About Me", "Skills", "Projects", "Contact"];

/// Sections of the page. The string form is the section's anchor id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum SectionId {
    Home,
    AboutMe,
    Skills,
    Projects,
    Contact,
    Footer,
}

impl SectionId {
    /// Rendering order, top to bottom.
    pub const ORDER: [SectionId; 6] = [
        SectionId::Home,
        SectionId::AboutMe,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
        SectionId::Footer,
    ];

    pub fn id(&self) -> &str {
        self.as_ref()
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        SectionId::from_str(anchor.trim_start_matches('#')).ok()
    }

    /// Index into [`NAV_LABELS`] of the nav item pointing at this section.
    pub fn nav_index(&self) -> Option<usize> {
        nav_items()
            .iter()
            .position(|item| item.target() == Some(*self))
    }
}

pub fn anchor_for(label: &str) -> String {
    label.to_lowercase().replace(' ', "")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: String,
}

impl NavItem {
    pub fn target(&self) -> Option<SectionId> {
        SectionId::from_anchor(&self.anchor)
    }
}

pub fn nav_items() -> Vec<NavItem> {
    NAV_LABELS
        .into_iter()
        .map(|label| NavItem {
            label,
            anchor: anchor_for(label),
        })
        .collect()
}
