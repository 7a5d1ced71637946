//! Resolved styles for every part of the page.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::theme::{PresentationClass, RootClasses, Theme};
use crate::presentation::config::Styles;

const CHARCOAL: Color = Color::Rgb(0x21, 0x25, 0x29);
const SNOW: Color = Color::Rgb(0xf8, 0xf9, 0xfa);
const SLATE: Color = Color::Rgb(0x6c, 0x75, 0x7d);
const MIST: Color = Color::Rgb(0xe9, 0xec, 0xef);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub root_bg_dark: Style,
    pub root_text_white: Style,
    pub root_bg_light: Style,
    pub root_text_dark: Style,
    pub navbar: Style,
    pub navbar_active: Style,
    pub toggle: Style,
    pub hero_name: Style,
    pub hero_title: Style,
    pub heading: Style,
    pub link: Style,
    pub card_dark: Style,
    pub card_light: Style,
    pub card_title: Style,
    pub card_image: Style,
    pub marquee_glyph: Style,
    pub marquee_label: Style,
    pub status_bar: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            root_bg_dark: Style::new().bg(CHARCOAL),
            root_text_white: Style::new().fg(Color::White),
            root_bg_light: Style::new().bg(SNOW),
            root_text_dark: Style::new().fg(CHARCOAL),
            navbar: Style::new().fg(Color::Gray).bg(CHARCOAL),
            navbar_active: Style::new()
                .fg(Color::White)
                .bg(CHARCOAL)
                .add_modifier(Modifier::BOLD),
            toggle: Style::new().fg(Color::LightCyan).bg(CHARCOAL),
            hero_name: Style::new()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
            hero_title: Style::new().fg(Color::Yellow),
            heading: Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
            link: Style::new()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::UNDERLINED),
            card_dark: Style::new().fg(Color::White).bg(SLATE),
            card_light: Style::new().fg(CHARCOAL).bg(MIST),
            card_title: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            card_image: Style::new().add_modifier(Modifier::DIM),
            marquee_glyph: Style::new().fg(Color::LightCyan),
            marquee_label: Style::new().add_modifier(Modifier::BOLD),
            status_bar: Style::new().add_modifier(Modifier::DIM),
        }
    }
}

impl Palette {
    /// Build from configured styles. Keys the user left out keep their
    /// built-in look.
    pub fn from_styles(styles: &Styles) -> Self {
        let defaults = Self::default();
        let pick = |key: &str, fallback: Style| styles.get(key).copied().unwrap_or(fallback);

        Self {
            root_bg_dark: pick("root-bg-dark", defaults.root_bg_dark),
            root_text_white: pick("root-text-white", defaults.root_text_white),
            root_bg_light: pick("root-bg-light", defaults.root_bg_light),
            root_text_dark: pick("root-text-dark", defaults.root_text_dark),
            navbar: pick("navbar", defaults.navbar),
            navbar_active: pick("navbar-active", defaults.navbar_active),
            toggle: pick("toggle", defaults.toggle),
            hero_name: pick("hero-name", defaults.hero_name),
            hero_title: pick("hero-title", defaults.hero_title),
            heading: pick("heading", defaults.heading),
            link: pick("link", defaults.link),
            card_dark: pick("card-dark", defaults.card_dark),
            card_light: pick("card-light", defaults.card_light),
            card_title: pick("card-title", defaults.card_title),
            card_image: pick("card-image", defaults.card_image),
            marquee_glyph: pick("marquee-glyph", defaults.marquee_glyph),
            marquee_label: pick("marquee-label", defaults.marquee_label),
            status_bar: pick("status-bar", defaults.status_bar),
        }
    }

    pub fn class_style(&self, class: PresentationClass) -> Style {
        match class {
            PresentationClass::BgDark => self.root_bg_dark,
            PresentationClass::TextWhite => self.root_text_white,
            PresentationClass::BgLight => self.root_bg_light,
            PresentationClass::TextDark => self.root_text_dark,
        }
    }

    pub fn card_style(&self, theme: Theme) -> Style {
        match theme {
            Theme::Dark => self.card_dark,
            Theme::Light => self.card_light,
        }
    }
}

impl RootClasses {
    /// Style of the page root: every active class patched in turn.
    pub fn style(&self, palette: &Palette) -> Style {
        self.iter()
            .fold(Style::default(), |style, class| {
                style.patch(palette.class_style(class))
            })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::theme::ThemeController;
    use crate::infrastructure::config::Config;

    #[test]
    fn test_root_style_follows_theme() {
        let palette = Palette::default();
        let mut theme = ThemeController::new(Theme::Dark);

        let dark = theme.root_classes().style(&palette);
        assert_eq!(dark.bg, Some(CHARCOAL));
        assert_eq!(dark.fg, Some(Color::White));

        theme.toggle();
        let light = theme.root_classes().style(&palette);
        assert_eq!(light.bg, Some(SNOW));
        assert_eq!(light.fg, Some(CHARCOAL));
    }

    #[test]
    fn test_empty_class_set_has_no_style() {
        assert_eq!(RootClasses::default().style(&Palette::default()), Style::default());
    }

    #[test]
    fn test_bundled_styles_match_builtin_palette() {
        let config = Config::bundled().unwrap();
        assert_eq!(Palette::from_styles(&config.styles), Palette::default());
    }

    #[test]
    fn test_user_style_overrides_one_key() {
        let mut styles = Styles::default();
        styles.insert("heading".to_string(), Style::new().fg(Color::Magenta));
        let palette = Palette::from_styles(&styles);
        assert_eq!(palette.heading, Style::new().fg(Color::Magenta));
        assert_eq!(palette.link, Palette::default().link);
    }

    #[test]
    fn test_card_style() {
        let palette = Palette::default();
        assert_eq!(palette.card_style(Theme::Dark), palette.card_dark);
        assert_eq!(palette.card_style(Theme::Light), palette.card_light);
    }
}
