//! Project configuration loading and parsing.
//!
//! The project declares its target language (and codegen settings) in a
//! `cdktf.json` file at the project root. Only `language` drives the
//! toolchain checks; the remaining fields are parsed so a real project file
//! round-trips cleanly.
//!
//! # Modules
//!
//! - [`schema`] - Typed configuration structure
//! - [`loader`] - Fixed-filename loading and parse-error mapping

pub mod loader;
pub mod schema;

pub use loader::{config_path, load_project_config, parse_config, CONFIG_FILE_NAME};
pub use schema::ProjectConfig;
