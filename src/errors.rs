//! Error types for the folio application.
//!
//! This module defines the error taxonomy shared by the session gate,
//! the project catalog, the idea board and the CLI front end.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for the folio application.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Errors related to file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A required field was missing on create or submit.
    #[error("Please fill in all required fields: {}", fields.join(", "))]
    ValidationFailed { fields: Vec<String> },

    /// Login attempt with a username/password pair that does not match.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A protected view was requested without an authenticated session.
    #[error("Login required to open {route}")]
    Unauthorized { route: String },

    /// Project was not found when performing an update.
    #[error("Project not found: {id}")]
    ProjectNotFound { id: String },

    /// Idea was not found when performing an update.
    #[error("Project idea not found: {id}")]
    IdeaNotFound { id: String },

    /// Unknown tag, status or theme name.
    #[error("Invalid value: {message}")]
    InvalidValue { message: String },

    /// Errors related to configuration.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Directory creation or access failed.
    #[error("Failed to create or access directory: {path}")]
    DirectoryError { path: PathBuf },

    #[error("{message}")]
    EditorError { message: String },

    /// Generic application error with a custom message.
    #[error("{message}")]
    ApplicationError { message: String },
}

impl FolioError {
    /// Builds a `ValidationFailed` from the names of the missing fields.
    pub fn missing_fields(fields: &[&str]) -> Self {
        FolioError::ValidationFailed {
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }
}
