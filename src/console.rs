//! Interactive prompting for the student's details.
//!
//! The console is generic over its input and prompt streams so the same code
//! drives a real terminal and in-memory buffers in tests.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

use crate::student::{Marks, Student};

pub const NAME_PROMPT: &str = "Enter name: ";
pub const MARKS_PROMPT: &str = "Enter marks: ";

pub struct Console<R, W> {
    input: R,
    prompts: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, prompts: W) -> Self {
        Self { input, prompts }
    }

    /// Write `message` without a newline and read one line of input.
    ///
    /// Only the line terminator is removed; other whitespace is preserved.
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.prompts, "{}", message).context("Failed to write prompt")?;
        self.prompts.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            bail!(
                "Unexpected end of input while waiting for '{}'",
                message.trim()
            );
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Prompt for a name then marks, and build the student.
    pub fn read_student(&mut self) -> Result<Student> {
        let name = self.prompt(NAME_PROMPT)?;
        let raw_marks = self.prompt(MARKS_PROMPT)?;
        let marks = parse_marks(&raw_marks)?;
        Ok(Student::new(name, marks))
    }
}

/// Parse an integer number of marks of any size, ignoring surrounding whitespace.
pub fn parse_marks(input: &str) -> Result<Marks> {
    input
        .parse::<Marks>()
        .with_context(|| format!("Invalid marks '{}'", input.trim()))
}
