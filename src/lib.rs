//! Hexon's Toolbox - a launcher for bundled MapleStory dev tools
//!
//! Each tool ships as an executable in a bundled `tools/` directory. Opening a
//! tool copies it into a temp staging directory and starts the copy as an
//! independent process, so the bundled file is never held open.

pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;
pub mod resources;
pub mod tools;
pub mod tui;

pub use error::{Result, ToolboxError};
pub use launcher::{Launched, Launcher, ProcessSpawner, Spawner};
pub use resources::ResolvedPaths;
pub use tools::{ToolCatalog, ToolDescriptor};
