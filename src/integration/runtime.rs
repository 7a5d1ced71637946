use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};

/// Integration point between the Elm core and the host loop
pub struct ElmRuntime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    render_requested: bool,
}

impl ElmRuntime {
    /// Create a new ElmRuntime
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            render_requested: false,
        }
    }

    /// Get sender for message transmission from other tasks
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Whether a command asked for a frame since the last call. Resets the flag.
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.render_requested)
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("update: {msg:?}");
        }
        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update(msg, state);
        self.state = new_state;

        // Add commands to queue
        self.cmd_queue.extend(commands.iter().cloned());

        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Translate each raw message against the state as it stands after the
        // messages before it
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            if !raw_msg.is_frequent() {
                log::debug!("translate: {raw_msg:?}");
            }
            for msg in translate_raw_to_domain(raw_msg, &self.state) {
                all_commands.extend(self.process_message(msg));
            }
        }

        // Process domain messages in internal queue
        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        // Process domain messages from external sources
        while let Ok(msg) = self.msg_rx.try_recv() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Carry out queued commands. Logging happens here; render requests are
    /// latched for the host.
    pub fn execute_pending_commands(&mut self) -> usize {
        let commands = self.pending_commands();
        for cmd in &commands {
            match cmd {
                Cmd::RequestRender => self.render_requested = true,
                Cmd::LogInfo { message } => log::info!("{message}"),
                Cmd::LogWarn { message } => log::warn!("{message}"),
            }
        }
        commands.len()
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> usize {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> ElmRuntimeStats {
        ElmRuntimeStats {
            queued_messages: self.msg_queue.len() + self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            scroll: self.state.ui.scroll,
            theme: self.state.current_theme().to_string(),
        }
    }
}

/// ElmRuntime statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElmRuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub scroll: u16,
    pub theme: String,
}
