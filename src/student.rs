//! The student record and its pass/fail classification.

use serde::{Serialize, Serializer};
use std::fmt;
use std::io;
use std::str::FromStr;

use crate::output::{Event, Output};

/// Marks must be strictly greater than this to pass.
pub const PASS_THRESHOLD: i64 = 50;

/// Outcome of classifying a student's marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// Classify marks against [`PASS_THRESHOLD`]. The threshold itself fails.
    pub fn for_marks(marks: &Marks) -> Self {
        if marks.exceeds(PASS_THRESHOLD) {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }

    pub fn is_pass(self) -> bool {
        self == Verdict::Pass
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "Pass"),
            Verdict::Fail => write!(f, "Fail"),
        }
    }
}

/// A whole number of marks of any size.
///
/// Stored as a sign and base-10 digits without leading zeros, so zero is
/// never negative and equal values compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marks {
    negative: bool,
    digits: String,
}

impl Marks {
    /// The value as an `i64`, if it fits.
    pub fn as_i64(&self) -> Option<i64> {
        self.to_string().parse().ok()
    }

    /// Whether these marks are strictly greater than `threshold`.
    pub fn exceeds(&self, threshold: i64) -> bool {
        match self.as_i64() {
            Some(value) => value > threshold,
            // Beyond i64 in either direction
            None => !self.negative,
        }
    }
}

impl From<i64> for Marks {
    fn from(value: i64) -> Self {
        Self {
            negative: value < 0,
            digits: value.unsigned_abs().to_string(),
        }
    }
}

/// Rejected marks input, carrying the offending text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMarksError(String);

impl fmt::Display for ParseMarksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not an integer", self.0)
    }
}

impl std::error::Error for ParseMarksError {}

impl FromStr for Marks {
    type Err = ParseMarksError;

    /// Accepts an optional sign followed by ASCII digits, with single
    /// underscores allowed between digits. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ParseMarksError(trimmed.to_string());

        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        if unsigned.is_empty()
            || unsigned.starts_with('_')
            || unsigned.ends_with('_')
            || unsigned.contains("__")
            || !unsigned.chars().all(|c| c.is_ascii_digit() || c == '_')
        {
            return Err(invalid());
        }

        let digits: String = unsigned.chars().filter(|c| *c != '_').collect();
        let digits = match digits.trim_start_matches('0') {
            "" => "0".to_string(),
            rest => rest.to_string(),
        };
        let negative = negative && digits != "0";

        Ok(Self { negative, digits })
    }
}

impl fmt::Display for Marks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.digits)
    }
}

/// Serialized as a JSON number when it fits in an `i64`, otherwise as a
/// string of digits so no precision is lost.
impl Serialize for Marks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_i64() {
            Some(value) => serializer.serialize_i64(value),
            None => serializer.collect_str(self),
        }
    }
}

/// A single student's name and marks, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: String,
    marks: Marks,
}

impl Student {
    pub fn new(name: impl Into<String>, marks: Marks) -> Self {
        Self {
            name: name.into(),
            marks,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::for_marks(&self.marks)
    }

    /// Report the student: `Student: {name}` followed by `Marks: {marks}`.
    pub fn display(&self, out: &Output) -> io::Result<()> {
        out.emit(&Event::Student { name: &self.name })?;
        out.emit(&Event::Marks { marks: &self.marks })
    }

    /// Report the verdict: `Pass: {name}` or `Fail: {name}`.
    pub fn check_result(&self, out: &Output) -> io::Result<()> {
        out.emit(&Event::Verdict {
            verdict: self.verdict(),
            name: &self.name,
        })
    }
}
