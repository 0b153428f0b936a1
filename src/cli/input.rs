//! User input utilities for interactive CLI prompts
//!
//! The prompter is generic over its reader and writer so the prompt loop can
//! be driven from tests as well as from the terminal.

use crate::app::models::{Selection, TripFilter};
use crate::constants::{CITY_NAMES, MONTH_NAMES, WEEKDAY_NAMES};
use crate::{Error, Result};
use colored::*;
use std::io::{self, BufRead, Stdin, Stdout, Write};
use std::str::FromStr;
use tracing::debug;

/// Line-based prompt over an input and output stream
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl Prompter<io::BufReader<Stdin>, Stdout> {
    /// Prompter over the process's standard input and output
    pub fn stdio() -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Output stream, for printing between prompts
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Print a question and read one trimmed line
    ///
    /// Returns `None` once the input is exhausted.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        writeln!(self.writer, "{}", question)
            .map_err(|e| Error::io("Failed to write prompt", e))?;
        self.writer
            .flush()
            .map_err(|e| Error::io("Failed to flush stdout", e))?;

        let mut input = String::new();
        let bytes = self
            .reader
            .read_line(&mut input)
            .map_err(|e| Error::io("Failed to read user input", e))?;

        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    /// Ask until the answer parses, re-prompting on unrecognized values
    ///
    /// Errors other than an invalid selector are returned unchanged, and a
    /// closed input is reported as an I/O error.
    pub fn ask_until<T>(&mut self, question: &str) -> Result<T>
    where
        T: FromStr<Err = Error>,
    {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Err(Error::io(
                    "Input closed before a valid answer was given",
                    io::Error::from(io::ErrorKind::UnexpectedEof),
                ));
            };

            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(e) if e.is_recoverable() => {
                    debug!("Rejected input: {}", e);
                    writeln!(
                        self.writer,
                        "\n{}\n",
                        "That input is not valid. Please try again.".bright_red()
                    )
                    .map_err(|e| Error::io("Failed to write prompt", e))?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Ask a yes/no question; only "yes" counts as agreement
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(question)?;
        Ok(answer.is_some_and(|a| a.eq_ignore_ascii_case("yes")))
    }

    /// Prompt for city, month and day in turn
    pub fn prompt_selection(&mut self) -> Result<Selection> {
        writeln!(
            self.writer,
            "{}",
            "Hello! Let's explore some US bikeshare data!"
                .bright_green()
                .bold()
        )
        .map_err(|e| Error::io("Failed to write prompt", e))?;

        let city = self.ask_until(&format!(
            "\nWhich city would you like to see data for? ({})",
            CITY_NAMES.join(", ")
        ))?;
        let month = self.ask_until(&format!(
            "Which month? ({}, or all)",
            MONTH_NAMES.join(", ")
        ))?;
        let day = self.ask_until(&format!(
            "Which day of the week? ({}, or all)",
            WEEKDAY_NAMES.join(", ")
        ))?;

        Ok(Selection::new(city, TripFilter::new(month, day)))
    }
}
