use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::models::{Category, DATE_FORMAT, MAX_AMOUNT};

pub(crate) const AMOUNT_PROMPT: &str = "Enter the amount: ";
pub(crate) const CATEGORY_PROMPT: &str = "Enter the category ('I' for Income|'E' for Expenses): ";
pub(crate) const DESCRIPTION_PROMPT: &str = "Enter a description (optional): ";

/// Rejected user input. The message is shown to the user before re-prompting.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub(crate) enum InputError {
    #[error("Invalid date. Please enter the date in dd-mm-yyyy.")]
    Date,

    #[error("Invalid amount '{0}'. Please enter a number.")]
    NotANumber(String),

    #[error("Amount should be greater than zero.")]
    NotPositive,

    #[error("Amount should not exceed {}.", MAX_AMOUNT)]
    TooLarge,

    #[error("Invalid category. Please enter 'I' for Income or 'E' for Expenses")]
    Category,
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| InputError::Date)
}

pub(crate) fn parse_amount(input: &str) -> Result<Decimal, InputError> {
    let trimmed = input.trim();
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(InputError::NotPositive);
    }
    if amount > MAX_AMOUNT {
        return Err(InputError::TooLarge);
    }
    Ok(amount)
}

pub(crate) fn parse_category(input: &str) -> Result<Category, InputError> {
    Category::from_code(input).ok_or(InputError::Category)
}

pub(crate) fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Line-oriented prompter. Every getter loops until it has a valid value;
/// the only errors it returns are I/O failures and end of input.
pub(crate) struct Prompter<R, W> {
    reader: R,
    writer: W,
    today: fn() -> NaiveDate,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(reader: R, writer: W) -> Self {
        Self::with_clock(reader, writer, local_today)
    }

    pub(crate) fn with_clock(reader: R, writer: W, today: fn() -> NaiveDate) -> Self {
        Self {
            reader,
            writer,
            today,
        }
    }

    #[cfg(test)]
    pub(crate) fn into_writer(self) -> W {
        self.writer
    }

    /// Print `prompt` and read one line without its terminator.
    pub(crate) fn get_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            anyhow::bail!("Input closed");
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    pub(crate) fn say(&mut self, message: impl std::fmt::Display) -> Result<()> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }

    pub(crate) fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Prompt until `parse` accepts the line, printing each rejection.
    fn get_valid<T>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T, InputError>,
    ) -> Result<T> {
        loop {
            let line = self.get_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(input = %line, error = %e, "rejected input");
                    self.say(&e)?;
                }
            }
        }
    }

    /// With `allow_default`, an empty first answer means today. Once an
    /// answer has been rejected the default no longer applies.
    pub(crate) fn get_date(&mut self, prompt: &str, allow_default: bool) -> Result<NaiveDate> {
        let today = self.today;
        let mut default_allowed = allow_default;
        self.get_valid(prompt, |line| {
            if default_allowed && line.trim().is_empty() {
                return Ok(today());
            }
            default_allowed = false;
            parse_date(line)
        })
    }

    pub(crate) fn get_amount(&mut self) -> Result<Decimal> {
        self.get_valid(AMOUNT_PROMPT, parse_amount)
    }

    pub(crate) fn get_category(&mut self) -> Result<Category> {
        self.get_valid(CATEGORY_PROMPT, parse_category)
    }

    pub(crate) fn get_description(&mut self) -> Result<String> {
        self.get_line(DESCRIPTION_PROMPT)
    }

    /// True only for `y`/`Y`.
    pub(crate) fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.get_line(prompt)?.trim().eq_ignore_ascii_case("y"))
    }
}
