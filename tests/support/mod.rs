//! Shared helpers for integration tests

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Output as ProcessOutput, Stdio};
use std::sync::{Arc, Mutex};

use marks::output::{Output, OutputMode};

/// Writer that shares its buffer so tests can read back what was emitted.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    #[allow(dead_code)]
    pub fn output(&self, mode: OutputMode) -> Output {
        Output::with_writer(mode, Box::new(self.clone()))
    }

    #[allow(dead_code)]
    pub fn contents(&self) -> String {
        String::from_utf8(self.buffer.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[allow(dead_code)]
pub fn marks_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_marks"))
}

/// Run the binary with `stdin` piped in and HOME pointed at `home`.
#[allow(dead_code)]
pub fn run_marks(home: &Path, args: &[&str], envs: &[(&str, &str)], stdin: &str) -> ProcessOutput {
    let mut command = Command::new(marks_binary());
    command
        .args(args)
        .env("HOME", home)
        .env_remove("MARKS_FORMAT")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in envs {
        command.env(key, value);
    }

    let mut child = command.spawn().expect("Failed to spawn marks");
    {
        let mut child_stdin = child.stdin.take().expect("Failed to open stdin");
        // The child may exit before reading, e.g. on a bad config
        let _ = child_stdin.write_all(stdin.as_bytes());
    }
    child.wait_with_output().expect("Failed to wait for marks")
}
