//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// envcheck - Toolchain version preflight for code generation projects.
#[derive(Debug, Parser)]
#[command(name = "envcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Suppress the success summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check installed toolchain versions (default if no command specified)
    Check(CheckArgs),

    /// List the registered toolchain checks
    Tools(ToolsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Treat version warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `tools` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ToolsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
