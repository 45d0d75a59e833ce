//! Configuration file loading.
//!
//! Unlike tools that walk up the directory tree looking for their config,
//! the project file lives at a fixed name directly inside the project path:
//! `<project>/cdktf.json`. A missing or malformed file is a setup problem
//! the user has to fix, so both map to distinct error variants the caller
//! can attribute to its command context.

use crate::config::schema::ProjectConfig;
use crate::error::{EnvcheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = "cdktf.json";

/// Resolve the configuration file path for a project directory.
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(CONFIG_FILE_NAME)
}

/// Load and parse the project configuration from `project_path`.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the JSON is invalid or missing `language`.
pub fn load_project_config(project_path: &Path) -> Result<ProjectConfig> {
    let path = config_path(project_path);
    let content = fs::read_to_string(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EnvcheckError::ConfigNotFound { path: path.clone() }
        } else {
            EnvcheckError::Io(e)
        }
    })?;

    parse_config(&content, &path)
}

/// Parse JSON content into a [`ProjectConfig`].
///
/// # Arguments
///
/// * `content` - The JSON content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProjectConfig> {
    serde_json::from_str(content).map_err(|e| EnvcheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
