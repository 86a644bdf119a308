//! Shared plumbing for the interactive menus.

use tally_core::TallyError;

use crate::errors::domain_hint;
use crate::helpers::{ask, Prompter};
use crate::ui::{blank_line, header, print, print_error, title, UiContext};

/// How a menu action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Done,
    /// Input ran out mid-action; the menu exits.
    InputEnded,
}

/// A menu whose entries map one-to-one onto an action enum.
pub trait MenuAction: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    fn is_exit(&self) -> bool;
}

/// Ask for the next action. `None` means exit, either chosen or on end of input.
pub fn choose<A: MenuAction>(prompter: &mut dyn Prompter) -> anyhow::Result<Option<A>> {
    let labels: Vec<&str> = A::ALL.iter().map(MenuAction::label).collect();
    let choice = prompter.select("Choose an option", &labels)?;
    Ok(choice
        .and_then(|index| A::ALL.get(index).copied())
        .filter(|action| !action.is_exit()))
}

/// The prompter and UI context a menu session talks through.
pub struct Console<'a> {
    pub ui: &'a UiContext,
    prompter: Box<dyn Prompter>,
}

impl<'a> Console<'a> {
    pub fn new(ui: &'a UiContext, prompter: Box<dyn Prompter>) -> Self {
        Self { ui, prompter }
    }

    /// Ask until the answer parses. `None` means input ended.
    pub fn ask<T, F>(
        &mut self,
        prompt: &str,
        default: Option<&str>,
        parse: F,
    ) -> anyhow::Result<Option<T>>
    where
        F: Fn(&str) -> anyhow::Result<T>,
    {
        ask(self.prompter.as_mut(), self.ui, prompt, default, parse)
    }

    pub fn choose<A: MenuAction>(&mut self) -> anyhow::Result<Option<A>> {
        choose(self.prompter.as_mut())
    }
}

/// Report a domain error and keep the menu alive; anything else is fatal.
pub fn settle(ui: &UiContext, outcome: anyhow::Result<Step>) -> anyhow::Result<Step> {
    match outcome {
        Ok(step) => Ok(step),
        Err(err) => match err.downcast_ref::<TallyError>() {
            Some(domain) => {
                tracing::debug!(error = %domain, "menu action rejected");
                print_error(ui, &domain.to_string(), domain_hint(domain));
                Ok(Step::Done)
            }
            None => Err(err),
        },
    }
}

/// Print the menu banner.
pub fn banner(ui: &UiContext, section: &str, context: Option<&str>) {
    if ui.chatty() {
        print(ui, &header(ui, section, context));
        blank_line(ui);
    }
}

/// Print a listing under a title, or `count=0` when a plain listing is empty.
pub fn listing(ui: &UiContext, heading: &str, body: &str, count: usize) {
    if ui.chatty() {
        print(ui, &title(ui, heading));
    }
    if count == 0 && !ui.mode.is_pretty() {
        print(ui, "count=0");
    } else {
        print(ui, body);
    }
}

/// Print a receipt unless quiet.
pub fn confirm(ui: &UiContext, message: &str, items: &[(&str, String)]) {
    if ui.chatty() {
        print(ui, &crate::ui::receipt(ui, message, items));
    }
}
