//! Tests for the read, report, classify flow using in-memory streams

use marks::console::Console;
use marks::output::{Output, OutputMode};
use marks::session;
use marks::student::Verdict;
use std::io::{self, Cursor, Write};

mod support;
use support::CaptureWriter;

/// Run a session over `input`, returning (prompts, report, result).
fn run_session(
    input: &str,
    mode: OutputMode,
) -> (String, String, anyhow::Result<marks::student::Student>) {
    let prompts = CaptureWriter::default();
    let report = CaptureWriter::default();
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), prompts.clone());
    let result = session::run(&mut console, &report.output(mode));
    (prompts.contents(), report.contents(), result)
}

#[test]
fn test_passing_student() {
    let (prompts, report, result) = run_session("Alice\n75\n", OutputMode::Text);

    assert_eq!(prompts, "Enter name: Enter marks: ");
    assert_eq!(report, "Student: Alice\nMarks: 75\nPass: Alice\n");
    assert_eq!(result.unwrap().verdict(), Verdict::Pass);
}

#[test]
fn test_failing_student() {
    let (_, report, result) = run_session("Bob\n40\n", OutputMode::Text);

    assert_eq!(report, "Student: Bob\nMarks: 40\nFail: Bob\n");
    assert_eq!(result.unwrap().verdict(), Verdict::Fail);
}

#[test]
fn test_threshold_is_exclusive() {
    let (_, report, _) = run_session("Dana\n50\n", OutputMode::Text);
    assert!(report.ends_with("Fail: Dana\n"));

    let (_, report, _) = run_session("Dana\n51\n", OutputMode::Text);
    assert!(report.ends_with("Pass: Dana\n"));
}

#[test]
fn test_windows_line_endings_and_padded_marks() {
    let (_, report, _) = run_session("Eve\r\n  90  \r\n", OutputMode::Text);
    assert_eq!(report, "Student: Eve\nMarks: 90\nPass: Eve\n");
}

#[test]
fn test_marks_beyond_i64() {
    let (_, report, result) = run_session("Zed\n 99999999999999999999 \n", OutputMode::Text);
    assert_eq!(report, "Student: Zed\nMarks: 99999999999999999999\nPass: Zed\n");
    assert_eq!(result.unwrap().verdict(), Verdict::Pass);

    let (_, report, _) = run_session("Yan\n-123456789012345678901234\n", OutputMode::Text);
    assert_eq!(
        report,
        "Student: Yan\nMarks: -123456789012345678901234\nFail: Yan\n"
    );
}

#[test]
fn test_marks_are_normalized_like_integers() {
    let (_, report, _) = run_session("Gus\n+007\n", OutputMode::Text);
    assert_eq!(report, "Student: Gus\nMarks: 7\nFail: Gus\n");
}

/// Accepts `remaining` complete lines, then fails as if the reader went away.
struct ClosingWriter {
    remaining: usize,
}

impl Write for ClosingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader closed"));
        }
        let newlines = buf.iter().filter(|b| **b == b'\n').count();
        self.remaining = self.remaining.saturating_sub(newlines);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_closed_output_is_an_error() {
    let mut console = Console::new(Cursor::new(b"Alice\n75\n".to_vec()), io::sink());
    let out = Output::with_writer(OutputMode::Text, Box::new(ClosingWriter { remaining: 0 }));

    let err = session::run(&mut console, &out).unwrap_err();
    assert!(err.to_string().contains("Failed to write student report"));
}

#[test]
fn test_lost_verdict_line_is_an_error() {
    let mut console = Console::new(Cursor::new(b"Alice\n75\n".to_vec()), io::sink());
    // Two report lines fit; the verdict does not
    let out = Output::with_writer(OutputMode::Text, Box::new(ClosingWriter { remaining: 2 }));

    let err = session::run(&mut console, &out).unwrap_err();
    assert!(err.to_string().contains("Failed to write verdict"));
}

#[test]
fn test_invalid_marks_produces_no_report() {
    let (prompts, report, result) = run_session("Alice\nabc\n", OutputMode::Text);

    assert_eq!(prompts, "Enter name: Enter marks: ");
    assert!(report.is_empty());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Invalid marks 'abc'"));
}

#[test]
fn test_missing_marks_line() {
    let (_, report, result) = run_session("Alice\n", OutputMode::Text);

    assert!(report.is_empty());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Unexpected end of input"));
}

#[test]
fn test_report_order_is_fixed() {
    let (_, report, _) = run_session("Frank\n12\n", OutputMode::Text);
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Student: "));
    assert!(lines[1].starts_with("Marks: "));
    assert!(lines[2].starts_with("Fail: "));
}

#[test]
fn test_json_report() {
    let (_, report, _) = run_session("Alice\n75\n", OutputMode::Json);
    let events: Vec<serde_json::Value> = report
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(
        events,
        vec![
            serde_json::json!({"type": "student", "name": "Alice"}),
            serde_json::json!({"type": "marks", "marks": 75}),
            serde_json::json!({"type": "verdict", "verdict": "pass", "name": "Alice"}),
        ]
    );
}
