//! Structured output for student reports.
//!
//! Provides a unified interface for emitting report lines in different modes:
//! - Text: the plain `Label: value` lines, with a colored verdict on a TTY
//! - Json: one JSON object per line for programmatic consumption
//!
//! The Output struct auto-detects TTY for color support and can be injected
//! with a custom writer for test capture.

use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use crate::config::OutputConfig;
use crate::student::{Marks, Verdict};

/// Output mode selection
///
/// Parsed the same way from flags, the environment and the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum OutputMode {
    /// Plain report lines
    #[default]
    Text,
    /// JSON-formatted events, one per line
    Json,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputMode::Text),
            "json" => Ok(OutputMode::Json),
            other => Err(format!(
                "unknown output format '{}' (expected 'text' or 'json')",
                other
            )),
        }
    }
}

impl TryFrom<String> for OutputMode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Text => write!(f, "text"),
            OutputMode::Json => write!(f, "json"),
        }
    }
}

/// A single line of a student report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event<'a> {
    Student { name: &'a str },
    Marks { marks: &'a Marks },
    Verdict { verdict: Verdict, name: &'a str },
}

impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Student { name } => write!(f, "Student: {}", name),
            Event::Marks { marks } => write!(f, "Marks: {}", marks),
            Event::Verdict { verdict, name } => write!(f, "{}: {}", verdict, name),
        }
    }
}

/// Output abstraction with mode-aware formatting
#[derive(Clone)]
pub struct Output {
    mode: OutputMode,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    color: bool,
}

impl Output {
    /// Create a new Output writing to stdout
    pub fn new(mode: OutputMode) -> Self {
        let is_tty = atty::is(atty::Stream::Stdout);
        Self {
            mode,
            writer: Arc::new(Mutex::new(Box::new(io::stdout()))),
            color: is_tty,
        }
    }

    /// Create an Output with a custom writer (for testing)
    pub fn with_writer(mode: OutputMode, writer: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            writer: Arc::new(Mutex::new(writer)),
            color: false, // Assume non-TTY for custom writers
        }
    }

    /// Turn off verdict coloring regardless of TTY detection
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    /// Force verdict coloring on or off
    #[cfg(test)]
    pub(crate) fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Apply the configured color setting and the `--no-color` flag
    pub fn apply_config(self, config: &OutputConfig, no_color: bool) -> Self {
        if no_color || !config.color {
            self.without_color()
        } else {
            self
        }
    }

    /// Emit one report line
    pub fn emit(&self, event: &Event<'_>) -> io::Result<()> {
        match self.mode {
            OutputMode::Text => {
                let line = match event {
                    Event::Verdict { verdict, name } if self.color => {
                        let label = verdict.to_string();
                        let label = if verdict.is_pass() {
                            label.green()
                        } else {
                            label.red()
                        };
                        format!("{}: {}", label.bold(), name)
                    }
                    _ => event.to_string(),
                };
                self.write_line(&line)
            }
            OutputMode::Json => {
                let line = serde_json::to_string(event)?;
                self.write_line(&line)
            }
        }
    }

    /// Write a line to the output
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "output writer poisoned"))?;
        writeln!(writer, "{}", line)?;
        writer.flush()
    }

    /// Get the current output mode
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Check whether verdicts are colored
    pub fn is_colored(&self) -> bool {
        self.color
    }
}

// Test-specific writer that wraps Arc<Mutex<Vec<u8>>>
#[cfg(test)]
pub(crate) struct TestWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

#[cfg(test)]
impl TestWriter {
    pub(crate) fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                buffer: buffer.clone(),
            },
            buffer,
        )
    }
}

#[cfg(test)]
impl Write for TestWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.buffer.lock().unwrap().flush()
    }
}
