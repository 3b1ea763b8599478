//! Dataset error types

use thiserror::Error;

/// Errors raised while reading or ingesting records
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    /// A record breaks the unified schema
    #[error("Schema violation in record '{record_id}': {reason}")]
    SchemaViolation { record_id: String, reason: String },

    /// A field holds a value outside its vocabulary
    #[error("Invalid value for '{field}': {value}")]
    InvalidValue { field: String, value: String },

    /// The same record id appears twice
    #[error("Duplicate record id: {0}")]
    DuplicateRecord(String),

    /// An impact link points at an event that does not exist
    #[error("Impact link '{link_id}' references unknown event '{event_id}'")]
    UnknownEvent { link_id: String, event_id: String },

    /// Failed to open or read the underlying source
    #[error("Read error: {0}")]
    ReadError(String),

    /// Failed to parse CSV
    #[error("CSV error: {0}")]
    CsvError(String),
}

impl DatasetError {
    /// Shorthand for a [`DatasetError::SchemaViolation`]
    pub fn violation(record_id: &str, reason: impl Into<String>) -> Self {
        Self::SchemaViolation {
            record_id: record_id.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_value(field: &str, value: &str) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}
