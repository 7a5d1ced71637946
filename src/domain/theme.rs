//! Light/dark theme and the presentation classes it puts on the page root.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumIter,
)]
pub enum PresentationClass {
    #[strum(serialize = "bg-dark")]
    BgDark,
    #[strum(serialize = "text-white")]
    TextWhite,
    #[strum(serialize = "bg-light")]
    BgLight,
    #[strum(serialize = "text-dark")]
    TextDark,
}

/// Classes currently applied to the page root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootClasses(BTreeSet<PresentationClass>);

impl RootClasses {
    pub fn contains(&self, class: PresentationClass) -> bool {
        self.0.contains(&class)
    }

    pub fn iter(&self) -> impl Iterator<Item = PresentationClass> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn toggle(&mut self, class: PresentationClass, on: bool) {
        if on {
            self.0.insert(class);
        } else {
            self.0.remove(&class);
        }
    }

    /// Bring the class set in line with `theme`: exactly one background and
    /// one text class end up active.
    pub fn reconcile(&mut self, theme: Theme) {
        let dark = theme.is_dark();
        self.toggle(PresentationClass::BgDark, dark);
        self.toggle(PresentationClass::TextWhite, dark);
        self.toggle(PresentationClass::BgLight, !dark);
        self.toggle(PresentationClass::TextDark, !dark);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeController {
    theme: Theme,
    classes: RootClasses,
}

impl ThemeController {
    pub fn new(theme: Theme) -> Self {
        let mut classes = RootClasses::default();
        classes.reconcile(theme);
        Self { theme, classes }
    }

    pub fn current(&self) -> Theme {
        self.theme
    }

    pub fn root_classes(&self) -> &RootClasses {
        &self.classes
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.classes.reconcile(theme);
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }
}

impl Default for ThemeController {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_initial_classes() {
        let controller = ThemeController::new(Theme::Dark);
        let classes: Vec<_> = controller.root_classes().iter().collect();
        assert_eq!(
            classes,
            vec![PresentationClass::BgDark, PresentationClass::TextWhite]
        );

        let controller = ThemeController::new(Theme::Light);
        let classes: Vec<_> = controller.root_classes().iter().collect();
        assert_eq!(
            classes,
            vec![PresentationClass::BgLight, PresentationClass::TextDark]
        );
    }

    #[rstest]
    #[case(Theme::Dark)]
    #[case(Theme::Light)]
    fn test_toggle_twice_restores_classes(#[case] initial: Theme) {
        let mut controller = ThemeController::new(initial);
        let before = controller.root_classes().clone();

        assert_eq!(controller.toggle(), initial.toggled());
        assert_ne!(controller.root_classes(), &before);
        assert_eq!(controller.toggle(), initial);
        assert_eq!(controller.root_classes(), &before);
    }

    #[test]
    fn test_exactly_one_pair_active() {
        let mut controller = ThemeController::default();
        for _ in 0..5 {
            controller.toggle();
            let classes = controller.root_classes();
            assert_eq!(classes.len(), 2);
            assert_ne!(
                classes.contains(PresentationClass::BgDark),
                classes.contains(PresentationClass::BgLight)
            );
            assert_ne!(
                classes.contains(PresentationClass::TextWhite),
                classes.contains(PresentationClass::TextDark)
            );
        }
    }

    #[test]
    fn test_class_names() {
        assert_eq!(PresentationClass::BgDark.to_string(), "bg-dark");
        assert_eq!(PresentationClass::TextWhite.as_ref(), "text-white");
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(Theme::Light.to_string(), "light");
    }
}
