use crate::core::{cmd::Cmd, msg::system::SystemMsg};

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
}

impl SystemState {
    pub fn status_message(&self) -> Option<&String> {
        self.status_message.as_ref()
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            // System control
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }

            // Geometry lives in UiState; the host only needs a fresh frame
            SystemMsg::Resize(_, _) => vec![Cmd::RequestRender],

            // Status management
            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
                vec![Cmd::RequestRender]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![Cmd::RequestRender]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![Cmd::LogWarn { message: error }, Cmd::RequestRender]
            }
        }
    }
}
