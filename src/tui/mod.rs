//! Terminal User Interface for Hexon's Toolbox.
//!
//! One screen: a header and one card per bundled tool. Opening a card runs
//! the launch sequence synchronously on the UI thread; failures appear in a
//! modal notification.

mod app;
mod events;
mod runner;
mod state;
mod views;

pub use app::App;
pub use events::{Event, EventHandler};
pub use runner::{TuiRunner, dispatch};
pub use state::{Action, AppState, InteractionMode, Notification};
pub use views::render;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::Result;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode.
///
/// Enables raw mode and switches to the alternate screen.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
///
/// Disables raw mode and leaves the alternate screen.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Palette taken from the desktop build's stylesheet.
pub mod colors {
    use ratatui::style::Color;

    pub const HEADER: Color = Color::White;
    pub const SUBTITLE: Color = Color::Rgb(0xbb, 0xbb, 0xbb);
    pub const CARD_BG: Color = Color::Rgb(0x18, 0x18, 0x20);
    pub const CARD_BORDER: Color = Color::Rgb(0x2b, 0x2b, 0x35);
    pub const SELECTED_BORDER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const TITLE: Color = Color::White;
    pub const DESCRIPTION: Color = Color::Rgb(0xc0, 0xc0, 0xc0);
    pub const ERROR: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const STATUS: Color = Color::Rgb(50, 205, 50); // Lime green
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const DIM: Color = Color::DarkGray;
}
