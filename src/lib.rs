//! envcheck - Toolchain version preflight for CDKTF-style projects.
//!
//! Before a code-generation workflow runs, envcheck verifies that the host
//! machine's installed toolchain meets minimum version requirements. The
//! project's `cdktf.json` declares the target language; the language picks
//! which toolchains get checked (Go projects need a Go toolchain, and every
//! project needs Node.js for synthesis).
//!
//! Version violations are advisory: they are reported as diagnostics and
//! the check still resolves. A tool that cannot be invoked at all, or a
//! missing project configuration, halts the check with an error.
//!
//! # Modules
//!
//! - [`checks`] - Toolchain registry, version probing and validation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Project configuration loading and parsing
//! - [`diagnostics`] - Advisory finding reporting
//! - [`error`] - Error types and result aliases
//! - [`version`] - Tolerant semantic-version extraction
//!
//! # Example
//!
//! ```
//! use envcheck::checks::{EnvironmentCheck, ScriptedRunner};
//! use envcheck::diagnostics::MemorySink;
//!
//! // Drive the check with scripted tool output instead of real subprocesses.
//! let runner = ScriptedRunner::new().with_output("node", "v16.0.0\n");
//! let mut sink = MemorySink::new();
//! let check = EnvironmentCheck::new(&runner);
//! // check.run("check", project_path, &mut sink) probes node and validates.
//! # let _ = check.registry();
//! # let _ = &mut sink;
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod version;

pub use error::{EnvcheckError, Result};
