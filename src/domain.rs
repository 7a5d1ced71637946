//! Domain logic
//!
//! This module contains the page's data and the rules around it:
//! - Content store loading and validation
//! - Icon name resolution
//! - Navigation anchors and section ids
//! - Theme state and root presentation classes
//! - Text wrapping utilities

pub mod content;
pub mod icon;
pub mod nav;
pub mod text;
pub mod theme;
