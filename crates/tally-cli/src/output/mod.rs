//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying items, tasks
//! and gym members in various formats (JSON, table, plain text).

mod json;
mod text;

// Re-export public API
pub use json::{
    clients_json, item_json, items_json, people_json, print_json, stats_json, task_json,
    tasks_json, total_json, trainers_json,
};
pub use text::{
    clients_table, items_table, people_table, stats_lines, tasks_table, total_line,
    trainers_table,
};
