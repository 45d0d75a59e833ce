//! Command-line interface.
//!
//! # Modules
//!
//! - [`args`] - Argument definitions (clap derive)
//! - [`commands`] - Command implementations and dispatching

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, ToolsArgs};
pub use commands::{dispatch, CheckCommand, CommandResult, ToolsCommand};
