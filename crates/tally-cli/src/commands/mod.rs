//! Command handlers.
//!
//! `inventory`, `todo` and `gym` each run an interactive menu over an
//! in-memory collection that lives for the duration of the command.

mod config;
mod gym;
mod inventory;
mod menu;
mod misc;
mod todo;

pub use config::handle_config;
pub use gym::handle_gym;
pub use inventory::handle_inventory;
pub use misc::handle_completions;
pub use todo::handle_todo;
