//! Toolchain checking.
//!
//! This module decides which tools a project's declared language requires,
//! probes the installed versions, and validates them against minimums.
//!
//! # Modules
//!
//! - [`registry`] - Mapping from language to its ordered toolchain checks
//! - [`probe`] - Subprocess invocation of version commands
//! - [`validator`] - Version extraction and minimum-version validation
//! - [`environment`] - The `check_environment` entry point tying it together

pub mod environment;
pub mod probe;
pub mod registry;
pub mod validator;

pub use environment::{check_environment, EnvironmentCheck};
pub use probe::{probe_tool, ScriptedRunner, SystemRunner, ToolRunner};
pub use registry::{CheckRegistry, ToolCheck};
pub use validator::validate_version;
