//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes, plus
//! the hints shown next to domain errors inside the interactive menus.

use std::fmt;

use tally_core::TallyError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config file)
    NotFound { message: String, hint: String },

    /// Invalid user input, flags or configuration
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for any error that reaches `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>()
        .map(CliError::exit_code)
        .unwrap_or(super::constants::exit_codes::FAILURE)
}

/// Split an error message into its first line and an optional trailing hint.
pub fn split_hint(message: &str) -> (&str, Option<&str>) {
    match message.find("\nHint:") {
        Some(idx) => (&message[..idx], Some(&message[idx + 1..])),
        None => (message, None),
    }
}

/// Contextual hint for a domain error raised inside a menu.
pub fn domain_hint(err: &TallyError) -> Option<&'static str> {
    match err {
        TallyError::InsufficientQuantity { .. } => {
            Some("Withdraw at most the quantity on hand, or restock first.")
        }
        TallyError::NotFound(message) if message.contains("item") => {
            Some("List the items to see the registered ids.")
        }
        TallyError::NotFound(message) if message.contains("task") => {
            Some("View the tasks to check the exact title.")
        }
        TallyError::Duplicate(message) if message.contains("item") => {
            Some("Item ids must be unique; pick another id.")
        }
        _ => None,
    }
}
