//! Application context for the Tally CLI.
//!
//! Provides a unified context that combines CLI arguments with the UI
//! context and lazily-loaded configuration.

use std::io::{self, IsTerminal};

use chrono::NaiveDate;
use once_cell::unsync::OnceCell;

use crate::cli::Cli;
use crate::config::{load_config, TallyConfig};
use crate::errors::CliError;
use crate::helpers::{parse_date, parse_output_format, LinePrompter, Prompter, TermPrompter};
use crate::ui::UiContext;

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through the menu handlers.
pub struct AppContext<'a> {
    cli: &'a Cli,
    ui: UiContext,
    config: OnceCell<TallyConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> anyhow::Result<Self> {
        let format = parse_output_format(cli.format.as_deref())
            .map_err(|e| CliError::invalid_input(e.to_string()))?;
        let ui = UiContext::from_env(cli.json, format, cli.no_color, cli.ascii, cli.quiet);
        Ok(Self {
            cli,
            ui,
            config: OnceCell::new(),
        })
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn ui(&self) -> &UiContext {
        &self.ui
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&TallyConfig> {
        self.config
            .get_or_try_init(|| load_config(self.cli.config.as_deref()))
    }

    /// Whether the menus start with the sample records.
    pub fn seed(&self) -> bool {
        !self.cli.no_seed
    }

    /// Reference date for age queries: `--today` if given, else the local date.
    pub fn today(&self) -> anyhow::Result<NaiveDate> {
        match self.cli.today.as_deref() {
            Some(value) => parse_date(value)
                .map_err(|e| CliError::invalid_input(format!("--today: {}", e)).into()),
            None => Ok(chrono::Local::now().date_naive()),
        }
    }

    /// Terminal widgets on an interactive stdin, a line reader otherwise.
    pub fn prompter(&self) -> Box<dyn Prompter> {
        if io::stdin().is_terminal() && !self.cli.no_input {
            Box::new(TermPrompter::new())
        } else {
            Box::new(LinePrompter::new(io::stdin().lock(), io::stdout()))
        }
    }
}
