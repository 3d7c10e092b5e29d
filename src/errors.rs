//! Error types for the inventory store.
//!
//! This module defines the error type shared by the item model, the storage
//! backends, the item store and the command-line front end.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// A single failed form rule, e.g. an empty name or a negative price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending field
    pub field: &'static str,
    /// Human readable message
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// The main error type for the inventory application.
#[derive(Error, Debug)]
pub enum InventoryError {
    /// Errors related to file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Persisted or supplied JSON could not be parsed or produced.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A timestamp string was not valid ISO-8601.
    #[error("Invalid timestamp '{value}': {message}")]
    InvalidTimestamp { value: String, message: String },

    /// No item with the given id exists in the collection.
    #[error("Item not found: {id}")]
    ItemNotFound { id: String },

    /// An item with the same id already exists.
    #[error("Item already exists: {id}")]
    ItemAlreadyExists { id: String },

    /// The storage key cannot be used by the backend.
    #[error("Invalid storage key: '{key}'")]
    InvalidKey { key: String },

    /// Input rejected by the form rules.
    #[error("Invalid item: {}", format_field_errors(.errors))]
    Validation { errors: Vec<FieldError> },

    /// Errors related to configuration.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Directory creation or access failed.
    #[error("Failed to create or access directory: {path}")]
    DirectoryError { path: PathBuf },

    /// for mutex lock acquisition issues
    #[error("{message}")]
    LockAcquisitionFailed { message: String },
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
