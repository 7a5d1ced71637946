//! Component collection and management
//!
//! Components are stateless renderers that receive `AppState` as a parameter
//! and draw one region of the screen.

use std::borrow::Cow;

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::layout::{PageLayout, ScreenLayout},
};

pub mod nav;
pub mod page;
pub mod status_bar;

pub use nav::NavComponent;
pub use page::PageComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
pub struct Components {
    pub nav: NavComponent,
    pub page: PageComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    /// Create a new component collection
    pub fn new() -> Self {
        Self {
            nav: NavComponent::new(),
            page: PageComponent::new(),
            status_bar: StatusBarComponent::new(),
        }
    }

    /// Render all components
    ///
    /// This is the main rendering entry point that delegates to individual components.
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let screen = ScreenLayout::new(frame.area());

        // The state is laid out on resize; fall back to a fresh layout if the
        // frame disagrees with it.
        let layout = if state.ui.layout.width() == screen.page.width
            && state.ui.layout.height() > 0
        {
            Cow::Borrowed(&state.ui.layout)
        } else {
            Cow::Owned(PageLayout::compute(&state.content, screen.page.width))
        };

        self.page.view(state, &layout, frame, screen.page);
        self.nav.view(state, frame, screen.nav);
        self.status_bar.view(state, frame, screen.status);
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
