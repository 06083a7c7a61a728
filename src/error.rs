//! Error types for Hexon's Toolbox
//!
//! Centralized error handling using thiserror. Every launch failure is
//! terminal for that one launch only and is shown to the user as a
//! notification built from `title()` and `details()`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// All error types that can occur while launching a tool
#[derive(Debug, Error)]
pub enum ToolboxError {
    /// The bundled executable does not exist in the source directory
    #[error("Bundled tool not found: {name} ({})", .path.display())]
    ToolMissing { name: String, path: PathBuf },

    /// Copying the executable into the runtime directory failed
    #[error("Could not copy tool to temp folder: {} -> {}: {error}", .source_path.display(), .destination.display())]
    StagingFailed {
        source_path: PathBuf,
        destination: PathBuf,
        error: io::Error,
    },

    /// The staged executable could not be started
    #[error("Could not launch tool: {}: {error}", .path.display())]
    LaunchFailed { path: PathBuf, error: io::Error },

    /// No configured tool answers to the identifier
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

impl ToolboxError {
    /// Short heading for the notification dialog
    pub fn title(&self) -> &'static str {
        match self {
            Self::ToolMissing { .. } => "Tool Missing",
            Self::StagingFailed { .. } => "Failed to Extract Tool",
            Self::LaunchFailed { .. } => "Failed to Launch",
            Self::UnknownTool(_) => "Unknown Tool",
        }
    }

    /// Multi-line body for the notification dialog
    pub fn details(&self) -> String {
        match self {
            Self::ToolMissing { path, .. } => format!(
                "Bundled tool not found:\n{}\n\nMake sure it was included in the tools directory when packaging.",
                path.display()
            ),
            Self::StagingFailed {
                source_path,
                destination,
                error,
            } => format!(
                "Could not copy tool to temp folder.\n\nSource: {}\nDest: {}\n\nError: {}",
                source_path.display(),
                destination.display(),
                error
            ),
            Self::LaunchFailed { path, error } => {
                format!("Could not launch tool:\n{}\n\nError:\n{}", path.display(), error)
            }
            Self::UnknownTool(id) => format!("No configured tool matches '{}'.", id),
        }
    }
}

/// Result type alias for toolbox operations
pub type Result<T> = std::result::Result<T, ToolboxError>;
