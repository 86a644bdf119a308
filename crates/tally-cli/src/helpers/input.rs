//! Menu prompting.
//!
//! Menus talk to a [`Prompter`]: rich dialoguer widgets on a terminal, a
//! plain line reader otherwise so sessions can be piped and scripted.
//! Every method returns `Ok(None)` once input has ended.

use std::io::{BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::ui::{render, UiContext};

pub trait Prompter {
    /// Ask for one line of text. An empty answer yields `default` when given.
    fn text(&mut self, prompt: &str, default: Option<&str>) -> anyhow::Result<Option<String>>;

    /// Pick one of `options`, returning its index.
    fn select(&mut self, prompt: &str, options: &[&str]) -> anyhow::Result<Option<usize>>;
}

/// Terminal prompts backed by dialoguer.
pub struct TermPrompter {
    theme: ColorfulTheme,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TermPrompter {
    fn text(&mut self, prompt: &str, default: Option<&str>) -> anyhow::Result<Option<String>> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(value) = default {
            input = input.default(value.to_string());
        }
        Ok(Some(input.interact_text()?))
    }

    fn select(&mut self, prompt: &str, options: &[&str]) -> anyhow::Result<Option<usize>> {
        let choice = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact_opt()?;
        Ok(choice)
    }
}

/// Line-oriented prompts for piped input.
///
/// Prompts and numbered options are written to `output`; answers are read
/// one line at a time from `input`.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn text(&mut self, prompt: &str, default: Option<&str>) -> anyhow::Result<Option<String>> {
        match default {
            Some(value) => write!(self.output, "{} [{}]: ", prompt, value)?,
            None => write!(self.output, "{}: ", prompt)?,
        }
        self.output.flush()?;

        let Some(answer) = self.read_line()? else {
            return Ok(None);
        };
        match default {
            Some(value) if answer.trim().is_empty() => Ok(Some(value.to_string())),
            _ => Ok(Some(answer)),
        }
    }

    fn select(&mut self, prompt: &str, options: &[&str]) -> anyhow::Result<Option<usize>> {
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, option)?;
        }
        loop {
            write!(self.output, "{}: ", prompt)?;
            self.output.flush()?;

            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            match answer.trim().parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => writeln!(
                    self.output,
                    "Invalid option: {} (choose 1-{})",
                    answer.trim(),
                    options.len()
                )?,
            }
        }
    }
}

/// Ask until `parse` accepts the answer, printing each rejection.
pub fn ask<T, F>(
    prompter: &mut dyn Prompter,
    ctx: &UiContext,
    prompt: &str,
    default: Option<&str>,
    parse: F,
) -> anyhow::Result<Option<T>>
where
    F: Fn(&str) -> anyhow::Result<T>,
{
    loop {
        let Some(answer) = prompter.text(prompt, default)? else {
            return Ok(None);
        };
        match parse(&answer) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => render::print_error(ctx, &err.to_string(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::helpers::parsing::parse_int;
    use crate::ui::OutputMode;

    fn prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
            quiet: false,
        }
    }

    #[test]
    fn test_text_reads_lines_until_eof() {
        let mut p = prompter("Soap\r\n\n");
        assert_eq!(p.text("Name", None).unwrap().as_deref(), Some("Soap"));
        assert_eq!(p.text("Name", None).unwrap().as_deref(), Some(""));
        assert_eq!(p.text("Name", None).unwrap(), None);
        let shown = String::from_utf8(p.output).unwrap();
        assert_eq!(shown, "Name: Name: Name: ");
    }

    #[test]
    fn test_text_empty_answer_takes_default() {
        let mut p = prompter("\n7\n");
        assert_eq!(p.text("Threshold", Some("10")).unwrap().as_deref(), Some("10"));
        assert_eq!(p.text("Threshold", Some("10")).unwrap().as_deref(), Some("7"));
        assert!(String::from_utf8(p.output).unwrap().contains("Threshold [10]: "));
    }

    #[test]
    fn test_select_reprompts_on_invalid_choice() {
        let mut p = prompter("0\nabc\n2\n");
        let choice = p.select("Choose", &["List", "Exit"]).unwrap();
        assert_eq!(choice, Some(1));
        let shown = String::from_utf8(p.output).unwrap();
        assert!(shown.starts_with("1. List\n2. Exit\n"));
        assert!(shown.contains("Invalid option: 0 (choose 1-2)"));
        assert!(shown.contains("Invalid option: abc"));
    }

    #[test]
    fn test_select_eof_is_none() {
        let mut p = prompter("");
        assert_eq!(p.select("Choose", &["Exit"]).unwrap(), None);
    }

    #[test]
    fn test_ask_retries_until_valid() {
        let mut p = prompter("three\n3\n");
        let value = ask(&mut p, &ctx(), "Quantity", None, parse_int).unwrap();
        assert_eq!(value, Some(3));
    }

    #[test]
    fn test_ask_eof_is_none() {
        let mut p = prompter("x\n");
        let value = ask(&mut p, &ctx(), "Quantity", None, parse_int).unwrap();
        assert_eq!(value, None);
    }
}
