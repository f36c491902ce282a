use std::fmt::Display;
use std::io::{BufRead, ErrorKind, Write};
use std::str::FromStr;

use error_stack::{Report, ResultExt};

use crate::error::PromptError;

pub const INVALID_NUMBER: &str = "Please enter a valid number.";
const UNREADABLE_TEXT: &str = "Please enter the answer again using plain text.";

/// Line-based conversation with the operator.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: impl Display) -> error_stack::Result<(), PromptError> {
        writeln!(self.output, "{text}").change_context(PromptError::Io)
    }

    pub fn say_all(
        &mut self,
        lines: impl IntoIterator<Item = String>,
    ) -> error_stack::Result<(), PromptError> {
        lines.into_iter().try_for_each(|line| self.say(line))
    }

    /// Prints `question` and returns the answer without its line ending.
    /// Lines that are not valid UTF-8 are discarded and asked again.
    pub fn ask_text(&mut self, question: &str) -> error_stack::Result<String, PromptError> {
        loop {
            write!(self.output, "{question}").change_context(PromptError::Io)?;
            self.output.flush().change_context(PromptError::Io)?;

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return Err(Report::new(PromptError::Closed)),
                Ok(_) => return Ok(line.trim_end_matches(['\r', '\n']).to_string()),
                Err(error) if error.kind() == ErrorKind::InvalidData => {
                    self.say(UNREADABLE_TEXT)?;
                }
                Err(error) => return Err(Report::new(error).change_context(PromptError::Io)),
            }
        }
    }

    /// Asks until the answer parses as `N`.
    pub fn ask_number<N: FromStr>(
        &mut self,
        question: &str,
    ) -> error_stack::Result<N, PromptError> {
        loop {
            match self.ask_text(question)?.trim().parse::<N>() {
                Ok(number) => return Ok(number),
                Err(_) => self.say(INVALID_NUMBER)?,
            }
        }
    }
}
