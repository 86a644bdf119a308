//! Error types for Tally core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages.

use thiserror::Error;

/// Result type alias for Tally operations.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Core error type for Tally operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TallyError {
    /// A record or argument failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// No record matched the given key
    #[error("Not found: {0}")]
    NotFound(String),

    /// A stock withdrawal exceeds what is on hand
    #[error(
        "Insufficient quantity for item {id}: requested {requested}, available {available}"
    )]
    InsufficientQuantity {
        id: i64,
        requested: i64,
        available: i64,
    },

    /// A record with the same unique key already exists
    #[error("Duplicate: {0}")]
    Duplicate(String),
}

impl TallyError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    /// Whether this error was caused by the caller's input rather than by
    /// the state of the collection.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
