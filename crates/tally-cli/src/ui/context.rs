//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use super::mode::OutputMode;
use crate::helpers::OutputFormat;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
    /// Suppress receipts, headers and hints
    pub quiet: bool,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    pub fn from_env(
        json_flag: bool,
        format: Option<OutputFormat>,
        no_color_flag: bool,
        ascii_flag: bool,
        quiet: bool,
    ) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var_os("NO_COLOR").is_some();

        Self {
            color: is_tty && !no_color_flag && !no_color_env && !term_is_dumb,
            unicode: !ascii_flag,
            width: terminal_width().unwrap_or(80),
            mode: OutputMode::resolve(json_flag, format, is_tty, term_is_dumb),
            quiet,
        }
    }

    /// Whether informational chatter (headers, receipts, hints) is shown.
    pub fn chatty(&self) -> bool {
        !self.quiet && !self.mode.is_json()
    }
}

/// Get terminal width from `COLUMNS` or the tty, if either is available.
fn terminal_width() -> Option<usize> {
    if let Some(width) = std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.parse::<usize>().ok())
        .filter(|width| *width > 0)
    {
        return Some(width);
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ only writes into the provided winsize buffer.
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            // SAFETY: ioctl returned success, so the struct was filled in.
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_from_flag() {
        let ctx = UiContext::from_env(true, None, false, false, false);
        assert_eq!(ctx.mode, OutputMode::Json);
        assert!(!ctx.chatty());
    }

    #[test]
    fn test_ascii_and_no_color() {
        let ctx = UiContext::from_env(false, None, true, true, false);
        assert!(!ctx.unicode);
        assert!(!ctx.color);
    }

    #[test]
    fn test_quiet_is_not_chatty() {
        let ctx = UiContext::from_env(false, Some(OutputFormat::Table), false, false, true);
        assert_eq!(ctx.mode, OutputMode::Pretty);
        assert!(!ctx.chatty());
    }

    #[test]
    fn test_width_has_default() {
        let ctx = UiContext::from_env(false, None, false, false, false);
        assert!(ctx.width > 0);
    }
}
