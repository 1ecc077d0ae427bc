//! Error types for controller config loading.

use thiserror::Error;

/// Errors that can occur when loading the controller config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A field parsed but holds a value the controller cannot use.
    #[error("Invalid value for '{field}': {details}")]
    InvalidValue { field: &'static str, details: String },
}
