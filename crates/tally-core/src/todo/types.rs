//! Core data types for the to-do list.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{Result, TallyError};

/// A to-do task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Unique identifier for this task
    pub id: Uuid,

    /// Title, matched case-insensitively
    pub title: String,

    /// Free-form description (may be empty)
    pub description: String,

    /// Due date
    pub due: NaiveDate,

    /// Whether the task has been completed
    pub completed: bool,
}

impl Task {
    /// Case-insensitive title comparison.
    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.trim().to_lowercase()
    }

    /// Whether the title or description contains `keyword`, ignoring case.
    pub fn mentions(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.title.to_lowercase().contains(&keyword)
            || self.description.to_lowercase().contains(&keyword)
    }
}

/// Builder for adding new tasks.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due: NaiveDate,
}

impl NewTask {
    pub fn new(title: impl Into<String>, description: impl Into<String>, due: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due,
        }
    }

    pub(super) fn validate(self) -> Result<Task> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TallyError::validation("task title cannot be empty"));
        }
        Ok(Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: self.description.trim().to_string(),
            due: self.due,
            completed: false,
        })
    }
}

/// Summary counts for a task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStats<'a> {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,

    /// Task with the earliest due date (first inserted on ties)
    pub earliest: Option<&'a Task>,

    /// Task with the latest due date (first inserted on ties)
    pub latest: Option<&'a Task>,
}
