//! To-do list manager.

mod list;
mod types;

pub use list::TaskList;
pub use types::{NewTask, Task, TaskStats};
