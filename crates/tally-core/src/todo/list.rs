//! The to-do list.

use super::types::{NewTask, Task, TaskStats};
use crate::error::{Result, TallyError};

/// In-memory, insertion-ordered list of [`Task`]s keyed by title.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new pending task.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::Validation` for a blank title and
    /// `TallyError::Duplicate` if a task with the same title exists.
    pub fn add(&mut self, new_task: NewTask) -> Result<&Task> {
        let task = new_task.validate()?;
        if self.find(&task.title).is_some() {
            return Err(TallyError::duplicate(format!(
                "a task titled \"{}\" already exists",
                task.title
            )));
        }

        tracing::debug!(id = %task.id, title = %task.title, due = %task.due, "added task");
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Find a task by title, ignoring case.
    pub fn find(&self, title: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.has_title(title))
    }

    /// Mark the task with `title` as completed.
    pub fn complete(&mut self, title: &str) -> Result<&Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.has_title(title))
            .ok_or_else(|| not_found(title))?;

        task.completed = true;
        tracing::debug!(id = %task.id, title = %task.title, "completed task");
        Ok(task)
    }

    /// Remove the task with `title` and return it.
    pub fn delete(&mut self, title: &str) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.has_title(title))
            .ok_or_else(|| not_found(title))?;

        let task = self.tasks.remove(index);
        tracing::debug!(id = %task.id, title = %task.title, "deleted task");
        Ok(task)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn pending(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| !task.completed).collect()
    }

    pub fn completed(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.completed).collect()
    }

    /// Tasks whose title or description contains `keyword`, ignoring case.
    pub fn search(&self, keyword: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.mentions(keyword))
            .collect()
    }

    pub fn stats(&self) -> TaskStats<'_> {
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        let earliest = self
            .tasks
            .iter()
            .reduce(|best, task| if task.due < best.due { task } else { best });
        let latest = self
            .tasks
            .iter()
            .reduce(|best, task| if task.due > best.due { task } else { best });

        TaskStats {
            total: self.tasks.len(),
            completed,
            pending: self.tasks.len() - completed,
            earliest,
            latest,
        }
    }
}

fn not_found(title: &str) -> TallyError {
    TallyError::not_found(format!("no task titled \"{}\"", title.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> TaskList {
        let mut list = TaskList::new();
        list.add(NewTask::new("Write report", "quarterly numbers", date(2024, 5, 10)))
            .unwrap();
        list.add(NewTask::new("Call plumber", "kitchen sink", date(2024, 4, 2)))
            .unwrap();
        list.add(NewTask::new("Renew passport", "", date(2024, 9, 30)))
            .unwrap();
        list
    }

    #[test]
    fn test_add_rejects_duplicate_title_ignoring_case() {
        let mut list = sample();
        let err = list
            .add(NewTask::new("WRITE REPORT", "", date(2025, 1, 1)))
            .unwrap_err();
        assert!(matches!(err, TallyError::Duplicate(_)));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_complete_moves_task_to_completed() {
        let mut list = sample();
        list.complete("call PLUMBER").unwrap();

        let pending: Vec<&str> = list.pending().iter().map(|t| t.title.as_str()).collect();
        let completed: Vec<&str> = list.completed().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(pending, vec!["Write report", "Renew passport"]);
        assert_eq!(completed, vec!["Call plumber"]);

        // Completing twice is harmless.
        assert!(list.complete("Call plumber").unwrap().completed);
    }

    #[test]
    fn test_complete_unknown_title() {
        let mut list = sample();
        assert!(matches!(
            list.complete("Walk dog").unwrap_err(),
            TallyError::NotFound(_)
        ));
    }

    #[test]
    fn test_delete() {
        let mut list = sample();
        let removed = list.delete("renew passport").unwrap();
        assert_eq!(removed.title, "Renew passport");
        assert_eq!(list.len(), 2);
        assert!(list.find("Renew passport").is_none());
        assert!(matches!(
            list.delete("Renew passport").unwrap_err(),
            TallyError::NotFound(_)
        ));
    }

    #[test]
    fn test_search_title_and_description() {
        let list = sample();
        let hits: Vec<&str> = list.search("SINK").iter().map(|t| t.title.as_str()).collect();
        assert_eq!(hits, vec!["Call plumber"]);

        let hits: Vec<&str> = list.search("re").iter().map(|t| t.title.as_str()).collect();
        assert_eq!(hits, vec!["Write report", "Renew passport"]);

        assert!(list.search("zebra").is_empty());
    }

    #[test]
    fn test_stats() {
        let mut list = sample();
        list.complete("Write report").unwrap();

        let stats = list.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.earliest.unwrap().title, "Call plumber");
        assert_eq!(stats.latest.unwrap().title, "Renew passport");
    }

    #[test]
    fn test_stats_ties_pick_first_inserted() {
        let mut list = TaskList::new();
        list.add(NewTask::new("A", "", date(2024, 1, 1))).unwrap();
        list.add(NewTask::new("B", "", date(2024, 1, 1))).unwrap();

        let stats = list.stats();
        assert_eq!(stats.earliest.unwrap().title, "A");
        assert_eq!(stats.latest.unwrap().title, "A");
    }

    #[test]
    fn test_stats_empty() {
        let list = TaskList::new();
        let stats = list.stats();
        assert_eq!(stats.total, 0);
        assert!(stats.earliest.is_none());
        assert!(stats.latest.is_none());
    }
}
