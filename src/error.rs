//! Error types for envcheck operations.
//!
//! This module defines [`EnvcheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `Usage` is for user-correctable conditions (tool missing, config file
//!   missing or malformed) and always carries the invoking command name
//! - `Internal` is for unexpected tool output shapes, not attributable to
//!   user action
//! - Use `anyhow::Error` (via `EnvcheckError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users
//!
//! A raised error halts the check. Advisory findings (version too old,
//! unparseable version output) are *reported* through a
//! [`DiagnosticSink`](crate::diagnostics::DiagnosticSink) instead and never
//! surface as this type.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envcheck operations.
#[derive(Debug, Error)]
pub enum EnvcheckError {
    /// User-correctable failure, attributed to the invoking command.
    #[error("Usage error [{command}]: {message}")]
    Usage { command: String, message: String },

    /// Unexpected condition not attributable to user action.
    #[error("Internal error [{command}]: {message}")]
    Internal { command: String, message: String },

    /// Project configuration file not found at the resolved location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the project configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EnvcheckError {
    /// Construct a usage error attributed to `command`.
    pub fn usage(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Usage {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Construct an internal error attributed to `command`.
    pub fn internal(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Internal {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Whether this error is user-correctable (setup/environment problem).
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::Usage { .. } | Self::ConfigNotFound { .. } | Self::ConfigParseError { .. }
        )
    }
}

/// Result type alias for envcheck operations.
pub type Result<T> = std::result::Result<T, EnvcheckError>;
