//! Application state for the TUI.
//!
//! This module defines the core state types that drive the TUI:
//! - `AppState`: All mutable application state
//! - `InteractionMode`: Normal navigation or a notification on screen
//! - `Action`: A request produced by input and carried out by the runner

use crate::error::ToolboxError;
use crate::tools::ToolDescriptor;

/// The primary application state.
///
/// Owned by `App` and updated in response to key events and launch outcomes.
#[derive(Debug, Default)]
pub struct AppState {
    /// One card per tool, in display order
    pub tools: Vec<ToolDescriptor>,
    /// Index of the highlighted card
    pub selected: usize,
    /// Current interaction mode
    pub mode: InteractionMode,
    /// Action waiting for the runner
    pub pending_action: Option<Action>,
    /// One-line status shown in the footer
    pub status_message: Option<String>,
    /// Whether the application should quit
    pub should_quit: bool,
}

impl AppState {
    /// Create state showing the given tools.
    pub fn new(tools: Vec<ToolDescriptor>) -> Self {
        Self {
            tools,
            ..Self::default()
        }
    }

    /// The highlighted tool, if any.
    pub fn selected_tool(&self) -> Option<&ToolDescriptor> {
        self.tools.get(self.selected)
    }

    /// The notification on screen, if any.
    pub fn notification(&self) -> Option<&Notification> {
        match &self.mode {
            InteractionMode::Notification(n) => Some(n),
            InteractionMode::Normal => None,
        }
    }
}

/// Current interaction mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Normal navigation
    #[default]
    Normal,
    /// Modal notification; must be dismissed before anything else
    Notification(Notification),
}

/// Modal message shown after a failed launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Dialog heading
    pub title: String,
    /// Dialog body, may span several lines
    pub body: String,
}

impl Notification {
    /// Create a notification.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

impl From<&ToolboxError> for Notification {
    fn from(err: &ToolboxError) -> Self {
        Self::new(err.title(), err.details())
    }
}

/// Requests carried from input handling to the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run the launch sequence for the tool with this identifier
    Open(String),
}
