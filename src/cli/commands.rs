//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: show the bundled tools
//! - open: stage and start one tool
//! - paths: show the resolved directories

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hexon's Toolbox - quick access to your MapleStory dev tools
#[derive(Parser, Debug)]
#[command(name = "hexons-toolbox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the bundled tools
    List,

    /// Stage and start a tool
    Open {
        /// Executable name, slug (quest-editor) or title of the tool
        tool: String,
    },

    /// Show where tools are read from and staged to
    Paths,
}
