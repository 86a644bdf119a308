//! Output mode routing logic.

use crate::helpers::OutputFormat;

/// How listings, receipts and errors are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Listings as JSON documents; menus and prompts stay plain
    Json,
    /// Stable `key=value` and tab-separated lines for scripts
    #[default]
    Plain,
    /// Tables, badges and colors
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// `--json` wins, then an explicit `--format`, then `TERM=dumb`
    /// (plain). Otherwise pretty on a TTY and plain when piped.
    pub fn resolve(
        json_flag: bool,
        format: Option<OutputFormat>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }
        match format {
            Some(OutputFormat::Table) => Self::Pretty,
            Some(OutputFormat::Plain) => Self::Plain,
            None if term_is_dumb || !is_tty => Self::Plain,
            None => Self::Pretty,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
