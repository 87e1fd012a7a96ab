//! Unified error handling for the record permission layer.
//!
//! Every fallible operation in this crate reports through [`GuardError`] so
//! callers see one error surface whether a failure came from the store, a
//! permission lookup, or a record's own validation.

use thiserror::Error;

/// Unified error type for store, permission, and validation failures.
#[derive(Error, Debug)]
pub enum GuardError {
    // ========== Missing Integration Errors ==========
    /// An extension point was invoked on a type that does not specialize it.
    /// Signals a missing integration, not a recoverable runtime condition.
    #[error("{operation} is not implemented for {subject}")]
    NotImplemented { operation: String, subject: String },

    /// A record type was asked for a user-filtered listing it never
    /// registered. The message names the offending type.
    #[error("I do not know how to return a list of {record_type} that a user has permission to")]
    ConventionViolation { record_type: String },

    // ========== Runtime Errors ==========
    /// A record failed self-validation at save time. The payload is the
    /// record's own explanation, suitable for relaying to an end user.
    #[error("{0}")]
    Validation(String),

    /// A record type or record id was not known to the store or registry
    #[error("Not found: {0}")]
    NotFound(String),

    /// Store-level failure with context
    #[error("Database error: {0}")]
    Database(String),

    // ========== Wrapped Error Sources ==========
    #[error("Sled error: {0}")]
    Sled(#[from] sled::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl GuardError {
    /// NotImplemented error naming the operation and the type that failed to
    /// specialize it.
    pub fn not_implemented(operation: impl Into<String>, subject: impl Into<String>) -> Self {
        Self::NotImplemented {
            operation: operation.into(),
            subject: subject.into(),
        }
    }

    /// ConventionViolation error naming the record type missing the
    /// user-filter capability.
    pub fn convention_violation(record_type: impl Into<String>) -> Self {
        Self::ConventionViolation {
            record_type: record_type.into(),
        }
    }
}

/// Result type alias for operations in this crate
pub type GuardResult<T> = Result<T, GuardError>;
