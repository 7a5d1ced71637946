use serde::{Deserialize, Serialize};

/// Elm-like command definitions
/// Side effects requested by `update` and carried out by the runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Ask the host to draw a new frame before the next scheduled one
    RequestRender,

    // Logging related
    LogInfo { message: String },
    LogWarn { message: String },
}
