//! # buildgen Interactive Prompts
//!
//! File: cli/src/common/ui/prompts.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The question/answer primitives behind the interactive menu: free-text
//! questions with a default, optional answers and numbered choices.
//!
//! ## Architecture
//!
//! The menu talks to the `Prompt` trait. Two front ends implement it:
//!
//! - **`TermPrompter`**: used when stdin and stderr are a terminal. Questions
//!   are `dialoguer` widgets (`Input` with a default, `Select` over numbered
//!   labels) drawn with the `ColorfulTheme`; reports go to stdout.
//! - **`LinePrompter`**: reads one answer per line from any `BufRead` and
//!   writes to any `Write`. Used when input is piped (`buildgen < answers.txt`)
//!   and by the tests. Choices are typed as numbers and re-asked until valid.
//!
//! End of input surfaces as `BuildgenError::InputClosed`, which the menu loop
//! treats as a request to exit.
//!
//! ## Usage
//!
//! ```rust
//! let mut prompter = TermPrompter::new();
//! let name = prompter.ask_with_default("Enter target name", "demo")?;
//! let arch = prompter.choose("Select target architecture:", &options, Some(0))?;
//! ```
//!
use crate::core::error::{BuildgenError, Result};
use anyhow::{anyhow, Context};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::io::{BufRead, Write};
use tracing::debug;

/// Width of the `=` rule printed around screen titles.
pub const HEADER_WIDTH: usize = 60;

/// A source of answers plus the place reports are written to.
pub trait Prompt {
    /// Where menu text and command reports go.
    fn output(&mut self) -> &mut dyn Write;

    /// Asks a free-text question. An empty answer yields `default`, or an
    /// empty string when there is none.
    fn input(&mut self, label: &str, default: Option<&str>) -> Result<String>;

    /// Asks for one of `items` and returns its index.
    fn select(&mut self, title: &str, items: &[String], default: Option<usize>) -> Result<usize>;

    /// Writes one line of text.
    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output(), "{}", text).context("Failed to write to output")
    }

    /// Prints a title framed by `=` rules.
    fn header(&mut self, title: &str) -> Result<()> {
        let rule = "=".repeat(HEADER_WIDTH);
        let out = self.output();
        writeln!(out, "{}", rule).context("Failed to write to output")?;
        writeln!(out, "{:^width$}", title, width = HEADER_WIDTH)
            .context("Failed to write to output")?;
        writeln!(out, "{}\n", rule).context("Failed to write to output")
    }

    fn ask_with_default(&mut self, label: &str, default: &str) -> Result<String> {
        self.input(label, Some(default))
    }

    /// Asks for a value where an empty answer means "none".
    fn ask_optional(&mut self, label: &str) -> Result<Option<String>> {
        let answer = self.input(&format!("{} (leave empty for none)", label), None)?;
        Ok(if answer.is_empty() { None } else { Some(answer) })
    }

    /// Numbered choice between labelled values.
    fn choose<T: Copy>(
        &mut self,
        title: &str,
        options: &[(&str, T)],
        default: Option<usize>,
    ) -> Result<T> {
        let labels: Vec<String> = options.iter().map(|(label, _)| label.to_string()).collect();
        let index = self.select(title, &labels, default)?;
        options.get(index).map(|(_, value)| *value).ok_or_else(|| {
            anyhow!(BuildgenError::InvalidValue {
                kind: "choice",
                value: (index + 1).to_string(),
                expected: "one of the listed numbers",
            })
        })
    }
}

/// Prompts drawn with `dialoguer` on the controlling terminal.
pub struct TermPrompter {
    theme: ColorfulTheme,
    stdout: std::io::Stdout,
}

impl TermPrompter {
    pub fn new() -> Self {
        TermPrompter {
            theme: ColorfulTheme::default(),
            stdout: std::io::stdout(),
        }
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TermPrompter {
    fn output(&mut self) -> &mut dyn Write {
        &mut self.stdout
    }

    fn input(&mut self, label: &str, default: Option<&str>) -> Result<String> {
        // dialoguer draws on stderr; earlier stdout text must land first
        self.stdout.flush().context("Failed to flush output")?;
        let prompt = label.trim();
        let answer = match default {
            Some(value) => Input::<String>::with_theme(&self.theme)
                .with_prompt(prompt)
                .default(value.to_string())
                .interact_text(),
            None => Input::<String>::with_theme(&self.theme)
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text(),
        }
        .with_context(|| format!("Failed to read answer to '{}'", prompt))?;
        Ok(answer.trim().to_string())
    }

    fn select(&mut self, title: &str, items: &[String], default: Option<usize>) -> Result<usize> {
        self.stdout.flush().context("Failed to flush output")?;
        let numbered: Vec<String> = items
            .iter()
            .enumerate()
            .map(|(idx, label)| format!("{}. {}", idx + 1, label))
            .collect();
        let prompt = title.trim().trim_end_matches(':');
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&numbered)
            .default(default.unwrap_or(0))
            .interact()
            .with_context(|| format!("Failed to read selection for '{}'", prompt))?;
        debug!("Selected {:?}", numbered.get(index));
        Ok(index)
    }
}

/// Line-at-a-time prompts over any reader/writer pair.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LinePrompter { input, output }
    }

    /// Everything written so far.
    #[cfg(test)]
    pub fn written(&self) -> &W {
        &self.output
    }

    /// Shows `prompt` and returns the trimmed answer.
    fn read_answer(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        // Zero bytes means EOF, as opposed to an empty line
        if read == 0 {
            debug!("Input closed while waiting for: {}", prompt.trim());
            return Err(anyhow!(BuildgenError::InputClosed));
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompter<R, W> {
    fn output(&mut self) -> &mut dyn Write {
        &mut self.output
    }

    fn input(&mut self, label: &str, default: Option<&str>) -> Result<String> {
        let prompt = match default {
            Some(value) => format!("{} [{}]: ", label, value),
            None => format!("{}: ", label),
        };
        let answer = self.read_answer(&prompt)?;
        match default {
            Some(value) if answer.is_empty() => Ok(value.to_string()),
            _ => Ok(answer),
        }
    }

    fn select(&mut self, title: &str, items: &[String], default: Option<usize>) -> Result<usize> {
        self.say(&format!("\n{}", title))?;
        for (idx, label) in items.iter().enumerate() {
            let marker = if default == Some(idx) { " (default)" } else { "" };
            self.say(&format!("{}. {}{}", idx + 1, label, marker))?;
        }
        let prompt = match default {
            Some(idx) => format!("\nChoice [{}]: ", idx + 1),
            None => "\nChoice: ".to_string(),
        };
        loop {
            let answer = self.read_answer(&prompt)?;
            if answer.is_empty() {
                if let Some(idx) = default {
                    return Ok(idx);
                }
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=items.len()).contains(&n) => return Ok(n - 1),
                _ => self.say(&format!(
                    "Invalid choice! Please enter a number from 1 to {}.",
                    items.len()
                ))?,
            }
        }
    }
}
