use std::path::PathBuf;

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::domain::{content::ContentSource, theme::Theme};
use crate::presentation::config::{keybindings, styles};
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub content_path: Option<PathBuf>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub marquee: MarqueeConfig,
    #[serde(default)]
    pub footer: FooterConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MarqueeConfig {
    /// Scroll speed in cells per second.
    #[serde(default = "default_marquee_speed")]
    pub speed: f64,
    #[serde(default = "default_pause_on_hover")]
    pub pause_on_hover: bool,
    /// Drawn in place of an icon that does not resolve. Unset skips the glyph.
    #[serde(default)]
    pub missing_icon_placeholder: Option<String>,
}

fn default_marquee_speed() -> f64 {
    8.0
}

fn default_pause_on_hover() -> bool {
    true
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            speed: default_marquee_speed(),
            pause_on_hover: default_pause_on_hover(),
            missing_icon_placeholder: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FooterConfig {
    /// Copyright year. Defaults to the current year.
    #[serde(default)]
    pub year: Option<i32>,
}

impl Config {
    /// Defaults compiled into the binary.
    pub fn bundled() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::bundled()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
            return Ok(Self {
                config: AppConfig {
                    _data_dir: data_dir,
                    _config_dir: config_dir,
                },
                ..default_config
            });
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(&default_config);

        Ok(cfg)
    }

    /// Fill in bundled keybindings and styles the user did not override.
    pub fn merge_defaults(&mut self, defaults: &Config) {
        for (keyseq, action) in defaults.keybindings.iter() {
            self.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| action.clone());
        }
        for (style_key, style) in defaults.styles.iter() {
            self.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }
    }

    /// Where page content should be read from. Relative paths are resolved
    /// against the config directory.
    pub fn content_source(&self) -> ContentSource {
        match &self.content_path {
            Some(path) if path.is_relative() && !self.config._config_dir.as_os_str().is_empty() => {
                ContentSource::File(self.config._config_dir.join(path))
            }
            Some(path) => ContentSource::File(path.clone()),
            None => ContentSource::Bundled,
        }
    }

    pub fn footer_year(&self) -> i32 {
        use chrono::Datelike;

        self.footer
            .year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}
