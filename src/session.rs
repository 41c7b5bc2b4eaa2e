//! The read, report, classify flow behind the `marks` binary.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::console::Console;
use crate::output::Output;
use crate::student::Student;

/// Read a student from the console, then report it and its verdict.
///
/// Nothing is written to `out` unless both values were read and parsed.
/// A failed write of any report line is an error.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, out: &Output) -> Result<Student> {
    let student = console.read_student()?;
    student.display(out).context("Failed to write student report")?;
    student
        .check_result(out)
        .context("Failed to write verdict")?;
    Ok(student)
}
