//! Line-oriented interactive console.
//!
//! [`Console`] owns the single interactive text stream of a session. Prompts are
//! issued strictly one after another: a prompt is written, then the console
//! waits for exactly one line before anything else happens.
//!
//! Status lines use the same markers as the crate-level [`crate::info!`] and
//! [`crate::warning!`] macros but are written to the console's own writer, so a
//! session can be driven and observed in tests.

use std::{collections::HashMap, fmt, io::Write};

use colored::Colorize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::text::Messages;

/// Field name whose answers are validated as menu choices.
pub const CHOICE_FIELD: &str = "choice";

/// Inclusive range every `choice` answer must fall into.
pub const CHOICE_RANGE: std::ops::RangeInclusive<u8> = 1..=7;

#[derive(Debug)]
pub enum ConsoleError {
    IoError(std::io::Error),
    /// The input stream ended while a prompt was pending.
    Closed,
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        ConsoleError::IoError(err)
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::IoError(e) => write!(f, "console i/o failed: {}", e),
            ConsoleError::Closed => f.write_str("input stream closed"),
        }
    }
}

impl std::error::Error for ConsoleError {}

/// Parses a menu choice. Anything that is not an integer in [`CHOICE_RANGE`]
/// is rejected.
pub fn parse_choice(value: &str) -> Option<u8> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|choice| CHOICE_RANGE.contains(choice))
}

pub struct Console<R, W> {
    input: R,
    output: W,
    messages: &'static Messages,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(input: R, output: W, messages: &'static Messages) -> Self {
        Self {
            input,
            output,
            messages,
        }
    }

    pub fn messages(&self) -> &'static Messages {
        self.messages
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompts once per field, in order, and returns one answer per field.
    ///
    /// Answers are trimmed and otherwise kept verbatim. A `choice` field is
    /// re-prompted until its answer is a valid choice; fields collected before
    /// it are not asked again.
    pub async fn collect(
        &mut self,
        fields: &[&str],
    ) -> Result<HashMap<String, String>, ConsoleError> {
        let mut answers = HashMap::with_capacity(fields.len());
        for field in fields {
            let value = if *field == CHOICE_FIELD {
                self.read_choice().await?.1
            } else {
                self.ask(field).await?
            };
            answers.insert(field.to_string(), value);
        }
        Ok(answers)
    }

    /// Collects a single free-text field.
    pub async fn field(&mut self, field: &str) -> Result<String, ConsoleError> {
        let mut answers = self.collect(&[field]).await?;
        Ok(answers.remove(field).unwrap_or_default())
    }

    /// Collects a `choice` field and returns it as a number.
    pub async fn choice(&mut self) -> Result<u8, ConsoleError> {
        Ok(self.read_choice().await?.0)
    }

    async fn read_choice(&mut self) -> Result<(u8, String), ConsoleError> {
        loop {
            let value = self.ask(CHOICE_FIELD).await?;
            match parse_choice(&value) {
                Some(choice) => return Ok((choice, value)),
                None => {
                    let reprompt = self.messages.invalid_choice_prompt;
                    self.warning(reprompt)?;
                }
            }
        }
    }

    async fn ask(&mut self, field: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", self.messages.prompt(field))?;
        self.output.flush()?;
        self.read_line().await
    }

    /// Reads one line. Bytes that are not valid UTF-8 are replaced rather than
    /// failing the session.
    async fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line).await? == 0 {
            return Err(ConsoleError::Closed);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    pub fn line(&mut self, text: impl fmt::Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn heading(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", text.bold())?;
        Ok(())
    }

    pub fn info(&mut self, text: impl fmt::Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "[{}] {}", "o".blue().bold(), text)?;
        Ok(())
    }

    pub fn success(&mut self, text: impl fmt::Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "[{}] {}", "✓".green().bold(), text)?;
        Ok(())
    }

    pub fn warning(&mut self, text: impl fmt::Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "[{}] {}", "!".yellow().bold(), text)?;
        Ok(())
    }
}
