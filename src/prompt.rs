//! Line-based prompting over any reader/writer pair.
//!
//! Typed prompts re-ask until the answer parses, so malformed input never
//! reaches the recipe model.

use colored::*;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    /// The input stream ended before an answer was given
    #[error("input closed")]
    Closed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for non-prompt output
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn output_ref(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Show `prompt` and read one line, without its line ending
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until `parse` accepts the answer, reporting each rejection
    pub fn ask_with<T, E, F>(&mut self, prompt: &str, parse: F) -> Result<T, PromptError>
    where
        E: Display,
        F: Fn(&str) -> Result<T, E>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    writeln!(self.output, "{}", format!("{}. Please try again.", e).yellow())?;
                }
            }
        }
    }

    /// Ask for any `FromStr` value; `what` names it in the retry message
    pub fn ask_parsed<T: FromStr>(&mut self, prompt: &str, what: &str) -> Result<T, PromptError> {
        self.ask_with(prompt, |answer| {
            let trimmed = answer.trim();
            trimmed
                .parse::<T>()
                .map_err(|_| format!("Invalid {} '{}'", what, trimmed))
        })
    }
}
