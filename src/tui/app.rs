//! TUI Application
//!
//! Translates key presses into state changes and actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{Action, AppState, InteractionMode, Notification};
use crate::tools::ToolDescriptor;

/// Main TUI application
#[derive(Debug, Default)]
pub struct App {
    state: AppState,
}

impl App {
    /// Create an application showing the given tools
    pub fn new(tools: Vec<ToolDescriptor>) -> Self {
        Self {
            state: AppState::new(tools),
        }
    }

    /// Get the application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Handle a key press. Returns true if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        match self.state.mode {
            InteractionMode::Notification(_) => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.dismiss_notification();
                }
            }
            InteractionMode::Normal => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.quit(),
                KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.select_next(),
                KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => self.select_prev(),
                KeyCode::Enter | KeyCode::Char('o') => self.open_selected(),
                _ => {}
            },
        }

        self.state.should_quit
    }

    /// Select the next card, wrapping to the first
    pub fn select_next(&mut self) {
        let len = self.state.tools.len();
        if len == 0 {
            return;
        }
        self.state.selected = (self.state.selected + 1) % len;
    }

    /// Select the previous card, wrapping to the last
    pub fn select_prev(&mut self) {
        let len = self.state.tools.len();
        if len == 0 {
            return;
        }
        self.state.selected = (self.state.selected + len - 1) % len;
    }

    /// Queue an open action for the highlighted tool
    pub fn open_selected(&mut self) {
        if let Some(tool) = self.state.selected_tool() {
            let action = Action::Open(tool.id().to_string());
            self.state.pending_action = Some(action);
        }
    }

    /// Take the queued action, if any
    pub fn take_action(&mut self) -> Option<Action> {
        self.state.pending_action.take()
    }

    /// Show a modal notification
    pub fn notify(&mut self, notification: Notification) {
        self.state.mode = InteractionMode::Notification(notification);
    }

    /// Close the modal notification
    pub fn dismiss_notification(&mut self) {
        self.state.mode = InteractionMode::Normal;
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.state.status_message = Some(message.into());
    }

    /// Request to quit
    pub fn quit(&mut self) {
        self.state.should_quit = true;
    }
}
