//! Contract error types for the solution directory
//!
//! These errors are transport-agnostic and used for inter-module communication.
//! Missing entities on single reads, updates and deletes are NOT errors: those
//! operations return `Option`/`bool`.

use thiserror::Error;

/// Solution directory errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// Input rejected before reaching storage
    #[error("Validation error: {message}")]
    Validation {
        /// Validation error message
        message: String,
    },

    /// Explicitly supplied identifier is already taken
    #[error("Conflict: {reason}")]
    Conflict {
        /// Conflict reason
        reason: String,
    },

    /// Resource unexpectedly missing (remote clients only)
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (company, solution)
        resource: String,
        /// Resource identifier
        id: String,
    },

    /// Storage or transport failure
    #[error("Internal error")]
    Internal,
}

impl DirectoryError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict {
            reason: reason.into(),
        }
    }
}
