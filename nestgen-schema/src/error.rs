//! Error types for schema compilation and configuration loading.

// These warnings are false positives - the fields are used by derive macros
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can surface from the schema compiler.
///
/// Unknown type tokens, unrecognized attributes and malformed lines are never
/// reported here: they degrade into `Unsupported` properties or skipped lines.
/// Only an unreadable source and broken configuration are hard failures.
#[derive(Error, Debug, Diagnostic)]
pub enum SchemaError {
    /// Error reading a file.
    #[error("failed to read file: {path}")]
    #[diagnostic(code(nestgen::schema::io_error))]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A model was requested that the schema does not declare.
    #[error("model `{name}` is not declared in the schema")]
    #[diagnostic(
        code(nestgen::schema::unknown_model),
        help("check the spelling; model names are case sensitive")
    )]
    UnknownModel { name: String },

    /// Configuration error.
    #[error("configuration error: {message}")]
    #[diagnostic(code(nestgen::schema::config_error))]
    ConfigError { message: String },

    /// TOML parsing error.
    #[error("failed to parse TOML")]
    #[diagnostic(code(nestgen::schema::toml_error))]
    TomlError {
        #[source]
        source: toml::de::Error,
    },
}

impl SchemaError {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create an unknown model error.
    pub fn unknown_model(name: impl Into<String>) -> Self {
        Self::UnknownModel { name: name.into() }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Whether this error came from reading the schema or config source.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::IoError { .. })
    }
}
