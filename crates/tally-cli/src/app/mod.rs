//! Application-level utilities for the Tally CLI.
//!
//! This module provides:
//! - The per-run application context (flags, UI context, lazy config)
//! - Sample records loaded into each menu unless `--no-seed` is given

mod context;
mod samples;

// Re-export public API
pub use context::AppContext;
pub use samples::{sample_gym, sample_ledger};
