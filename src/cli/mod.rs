//! CLI module for hexons-toolbox - command-line interface and subcommands.
//!
//! With no subcommand the terminal launcher window starts.

pub mod commands;

pub use commands::Cli;
