//! Integration layer
//!
//! This module wires the Elm core to the terminal:
//! - Elm runtime (message queues and command execution)
//! - App runner (main event loop)

pub mod app_runner;
pub mod runtime;
