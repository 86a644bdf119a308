//! # Tally Core
//!
//! Core library for Tally - small in-memory record keepers driven from the
//! console.
//!
//! This crate provides the domain logic and data models independent of the
//! CLI interface. Nothing here performs I/O; mutations emit `tracing` events.
//!
//! ## Architecture
//!
//! - **inventory**: Stock ledger (register, adjust, restock, report, total value)
//! - **todo**: To-do list (add, complete, delete, search, statistics)
//! - **gym**: Trainer and client register (age, BMI and birthday queries)
//! - **error**: Shared error type

pub mod error;
pub mod gym;
pub mod inventory;
pub mod todo;

pub use error::{Result, TallyError};
pub use gym::Gym;
pub use inventory::Ledger;
pub use todo::TaskList;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
