use std::sync::Arc;

use crate::{
    domain::{
        content::Content,
        theme::{Theme, ThemeController},
    },
    infrastructure::config::Config,
    presentation::{palette::Palette, widgets::marquee::MarqueeStrip},
};

pub mod marquee;
pub mod system;
pub mod ui;

pub use marquee::MarqueeState;
pub use system::SystemState;
pub use ui::UiState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub content: Arc<Content>,
    pub theme: ThemeController,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
    pub page: PageSettings,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

/// Render inputs derived once from content and config.
#[derive(Debug, Clone, Default)]
pub struct PageSettings {
    pub palette: Palette,
    pub strip: MarqueeStrip,
    pub footer_year: i32,
}

impl PageSettings {
    pub fn new(content: &Content, config: &Config) -> Self {
        Self {
            palette: Palette::from_styles(&config.styles),
            strip: MarqueeStrip::new(
                &content.skills,
                config.marquee.missing_icon_placeholder.as_deref(),
            ),
            footer_year: config.footer_year(),
        }
    }
}

impl AppState {
    pub fn new(content: Arc<Content>, config: Config, theme: Theme, tick_rate: f64) -> Self {
        let page = PageSettings::new(&content, &config);
        let marquee = MarqueeState::new(
            config.marquee.speed,
            tick_rate,
            page.strip.width(),
            config.marquee.pause_on_hover,
        );
        Self {
            content,
            theme: ThemeController::new(theme),
            ui: UiState::new(marquee),
            system: SystemState::default(),
            config: ConfigState { config },
            page,
        }
    }

    /// Recompute geometry for a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.ui.resize(&self.content, width, height);
    }

    pub fn current_theme(&self) -> Theme {
        self.theme.current()
    }
}
