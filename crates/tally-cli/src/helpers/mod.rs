//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Terminal and line-based prompting (`input`)
//! - Date, amount, number and format parsing (`parsing`)

mod input;
mod parsing;

// Re-export public API
pub use input::{ask, LinePrompter, Prompter, TermPrompter};
pub use parsing::{
    parse_date, parse_decimal, parse_f64, parse_int, parse_month, parse_output_format,
    parse_text, OutputFormat,
};
