use tally_core::todo::{NewTask, Task};
use tally_core::TaskList;

use crate::app::AppContext;
use crate::helpers::{parse_date, parse_text};
use crate::output::{print_json, stats_json, stats_lines, task_json, tasks_json, tasks_table};
use crate::ui::{blank_line, format_date, print, UiContext};

use super::menu::{banner, confirm, listing, settle, Console, MenuAction, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    View,
    Complete,
    Delete,
    Search,
    Stats,
    Exit,
}

impl MenuAction for Action {
    const ALL: &'static [Self] = &[
        Self::Add,
        Self::View,
        Self::Complete,
        Self::Delete,
        Self::Search,
        Self::Stats,
        Self::Exit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add task",
            Self::View => "View tasks",
            Self::Complete => "Mark task as completed",
            Self::Delete => "Delete task",
            Self::Search => "Search tasks",
            Self::Stats => "Statistics",
            Self::Exit => "Exit",
        }
    }

    fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }
}

pub fn handle_todo(ctx: &AppContext) -> anyhow::Result<()> {
    let config = ctx.config()?;
    let mut session = Session {
        console: Console::new(ctx.ui(), ctx.prompter()),
        date_format: &config.ui.date_format,
        tasks: TaskList::new(),
    };

    banner(ctx.ui(), "todo", None);
    session.run()
}

struct Session<'a> {
    console: Console<'a>,
    date_format: &'a str,
    tasks: TaskList,
}

impl Session<'_> {
    fn run(&mut self) -> anyhow::Result<()> {
        while let Some(action) = self.console.choose::<Action>()? {
            let outcome = match action {
                Action::Add => self.add(),
                Action::View => self.view(),
                Action::Complete => self.complete(),
                Action::Delete => self.delete(),
                Action::Search => self.search(),
                Action::Stats => self.stats(),
                Action::Exit => break,
            };
            if settle(self.console.ui, outcome)? == Step::InputEnded {
                break;
            }
            blank_line(self.console.ui);
        }
        tracing::debug!(tasks = self.tasks.len(), "todo menu closed");
        Ok(())
    }

    fn add(&mut self) -> anyhow::Result<Step> {
        let Some(title) = self.console.ask("Title", None, parse_text)? else {
            return Ok(Step::InputEnded);
        };
        let Some(description) = self.console.ask("Description", None, parse_text)? else {
            return Ok(Step::InputEnded);
        };
        let Some(due) = self.console.ask("Due date (dd/mm/yyyy)", None, parse_date)? else {
            return Ok(Step::InputEnded);
        };

        let task = self.tasks.add(NewTask::new(title, description, due))?;
        report_task(self.console.ui, "Task added", task, self.date_format)?;
        Ok(Step::Done)
    }

    fn view(&mut self) -> anyhow::Result<Step> {
        let ui = self.console.ui;
        let pending = self.tasks.pending();
        let completed = self.tasks.completed();
        if ui.mode.is_json() {
            print_json(&serde_json::json!({
                "pending": tasks_json(&pending),
                "completed": tasks_json(&completed),
            }))?;
            return Ok(Step::Done);
        }

        let body = tasks_table(ui, &pending, self.date_format);
        listing(ui, "Pending", &body, pending.len());
        let body = tasks_table(ui, &completed, self.date_format);
        listing(ui, "Completed", &body, completed.len());
        Ok(Step::Done)
    }

    fn complete(&mut self) -> anyhow::Result<Step> {
        let Some(title) = self.console.ask("Title of the task to complete", None, parse_text)?
        else {
            return Ok(Step::InputEnded);
        };

        let task = self.tasks.complete(&title)?;
        report_task(self.console.ui, "Task completed", task, self.date_format)?;
        Ok(Step::Done)
    }

    fn delete(&mut self) -> anyhow::Result<Step> {
        let Some(title) = self.console.ask("Title of the task to delete", None, parse_text)?
        else {
            return Ok(Step::InputEnded);
        };

        let task = self.tasks.delete(&title)?;
        report_task(self.console.ui, "Task deleted", &task, self.date_format)?;
        Ok(Step::Done)
    }

    fn search(&mut self) -> anyhow::Result<Step> {
        let Some(keyword) = self.console.ask("Keyword", None, parse_text)? else {
            return Ok(Step::InputEnded);
        };

        let ui = self.console.ui;
        let found = self.tasks.search(&keyword);
        if ui.mode.is_json() {
            print_json(&tasks_json(&found))?;
        } else {
            let body = tasks_table(ui, &found, self.date_format);
            listing(ui, &format!("Tasks mentioning \"{}\"", keyword), &body, found.len());
        }
        Ok(Step::Done)
    }

    fn stats(&mut self) -> anyhow::Result<Step> {
        let ui = self.console.ui;
        let stats = self.tasks.stats();
        if ui.mode.is_json() {
            print_json(&stats_json(&stats))?;
        } else {
            print(ui, &stats_lines(ui, &stats, self.date_format));
        }
        Ok(Step::Done)
    }
}

fn report_task(ui: &UiContext, message: &str, task: &Task, date_format: &str) -> anyhow::Result<()> {
    if ui.mode.is_json() {
        return print_json(&task_json(task));
    }
    confirm(
        ui,
        message,
        &[
            ("Title", task.title.clone()),
            ("Due", format_date(&task.due, date_format)),
            ("Completed", task.completed.to_string()),
        ],
    );
    Ok(())
}
