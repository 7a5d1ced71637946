//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components rendering from `AppState`
//! - Reusable section widgets
//! - Page layout and hit-testing
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod layout;
pub mod palette;
pub mod widgets;
