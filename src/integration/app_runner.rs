use color_eyre::eyre::Result;
use ratatui::prelude::Rect;

use crate::{
    core::{raw_msg::RawMsg, state::AppState},
    infrastructure::tui::{Event, TuiLike},
    integration::runtime::ElmRuntime,
    presentation::components::Components,
};

/// Drives the Elm runtime from terminal events and draws the result.
///
/// The terminal is injected, so the same loop runs against a real terminal
/// or a `TestTui`. The loop ends on quit or when the event source closes.
pub struct AppRunner<T: TuiLike> {
    tui: T,
    runtime: ElmRuntime,
    components: Components,
}

impl<T: TuiLike> AppRunner<T> {
    pub fn new(tui: T, initial_state: AppState) -> Self {
        Self {
            tui,
            runtime: ElmRuntime::new(initial_state),
            components: Components::new(),
        }
    }

    pub fn runtime(&self) -> &ElmRuntime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut ElmRuntime {
        &mut self.runtime
    }

    pub fn tui(&self) -> &T {
        &self.tui
    }

    /// Run the main loop: translate TUI events, update state and render.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;

        // Lay the page out for the starting terminal size
        let area = self.tui.size()?;
        self.runtime
            .send_raw_msg(RawMsg::Resize(area.width, area.height));
        self.runtime.run_update_cycle();
        self.runtime.take_render_request();
        self.render()?;

        while let Some(event) = self.tui.next().await {
            let mut render_now = false;
            match event {
                Event::Quit | Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
                Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
                Event::Render => render_now = true,
                Event::Resize(width, height) => {
                    self.tui.resize(Rect::new(0, 0, width, height))?;
                    self.runtime.send_raw_msg(RawMsg::Resize(width, height));
                }
                Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
                Event::Mouse(mouse) => self.runtime.send_raw_msg(RawMsg::Mouse(mouse)),
                Event::Error => self
                    .runtime
                    .send_raw_msg(RawMsg::Error("terminal input failed".to_string())),
                Event::Init | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }

            self.runtime.run_update_cycle();

            if self.runtime.take_render_request() || render_now {
                self.render()?;
            }

            if self.runtime.state().system.should_suspend {
                self.tui.suspend()?;
                self.runtime.send_raw_msg(RawMsg::Resume);
                self.runtime.run_update_cycle();
                self.runtime.take_render_request();
                self.tui.enter()?;
                self.render()?;
            }

            if self.runtime.state().system.should_quit {
                break;
            }
        }

        self.tui.exit()?;
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &mut self.components;
        self.tui.draw(&mut |frame| components.render(frame, state))?;
        Ok(())
    }
}
