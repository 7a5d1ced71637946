//! # Folio - a portfolio page for the terminal
//!
//! A single-page personal portfolio rendered with Ratatui: a navigation bar,
//! hero, about, a scrolling skills marquee, project cards, contact details and
//! a footer, with a light/dark theme toggle.
//!
//! ## Architecture Overview
//!
//! The crate follows the Elm architecture:
//!
//! - **Model** (`core::state`): Application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects requested by the update
//! - **View** (`presentation::components`): Rendering from the current state
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use folio::{
//!     core::{msg::theme::ThemeMsg, state::AppState, update::update},
//!     domain::{content::Content, theme::Theme},
//!     infrastructure::config::Config,
//!     Msg,
//! };
//!
//! let content = Arc::new(Content::bundled().unwrap());
//! let state = AppState::new(content, Config::bundled().unwrap(), Theme::Dark, 16.0);
//!
//! let (state, commands) = update(Msg::Theme(ThemeMsg::Toggle), state);
//!
//! assert_eq!(state.current_theme(), Theme::Light);
//! assert!(!commands.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, update and translation
//! - [`domain`] - Content store, icons, navigation and theme
//! - [`infrastructure`] - Terminal, CLI and configuration
//! - [`integration`] - Runtime and main loop
//! - [`presentation`] - Layout, widgets and components

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use integration::runtime::{ElmRuntime, ElmRuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
