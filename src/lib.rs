//! # Marks - student result checker
//!
//! Records a single student's name and marks, reports them, and classifies
//! the student as passing or failing against a fixed threshold.
//!
//! ## Modules
//!
//! - [`student`] - The student record, marks, verdicts and the pass threshold
//! - [`console`] - Prompting for and reading the student from an input stream
//! - [`output`] - Text and JSON rendering of report lines
//! - [`session`] - The end-to-end read, report, classify flow
//! - [`config`] - Optional user configuration
//!
//! ## Example
//!
//! ```
//! use marks::output::{Output, OutputMode};
//! use marks::student::{Marks, Student, Verdict};
//!
//! let marks: Marks = "75".parse().unwrap();
//! let student = Student::new("Alice", marks);
//! assert_eq!(student.verdict(), Verdict::Pass);
//!
//! let out = Output::new(OutputMode::Text);
//! student.display(&out).unwrap();
//! student.check_result(&out).unwrap();
//! ```

pub mod config;
pub mod console;
pub mod output;
pub mod session;
pub mod student;
