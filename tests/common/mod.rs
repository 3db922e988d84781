// Shared test helpers for integration tests
#![allow(dead_code)]

use editor_test_runner::RunnerError;
use editor_test_runner::infra::command::ProcessRunner;
use editor_test_runner::models::{ProcessInvocation, ProcessResult};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

type FailRule = Box<dyn Fn(&ProcessInvocation) -> Option<i32>>;

/// A runner that records every invocation instead of spawning it.
/// Invocations matching the fail rule "exit" with the returned code.
pub struct RecordingRunner {
    calls: RefCell<Vec<ProcessInvocation>>,
    fail_rule: Option<FailRule>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_rule: None,
        }
    }

    /// Fails every invocation that has an argument containing `needle`.
    pub fn failing_when(needle: &str, exit_code: i32) -> Self {
        let needle = needle.to_string();
        Self {
            calls: RefCell::new(Vec::new()),
            fail_rule: Some(Box::new(move |invocation| {
                invocation
                    .argv()
                    .iter()
                    .any(|arg| arg.contains(&needle))
                    .then_some(exit_code)
            })),
        }
    }

    pub fn calls(&self) -> Vec<ProcessInvocation> {
        self.calls.borrow().clone()
    }
}

impl ProcessRunner for RecordingRunner {
    async fn run(&self, invocation: &ProcessInvocation) -> Result<ProcessResult, RunnerError> {
        self.calls.borrow_mut().push(invocation.clone());
        if let Some(exit_code) = self.fail_rule.as_ref().and_then(|rule| rule(invocation)) {
            return Err(RunnerError::ExternalProcess {
                exit_code,
                args: invocation.argv(),
            });
        }
        Ok(ProcessResult::default())
    }
}

/// Creates an empty project directory and returns it with its canonical path.
pub fn setup_project_dir() -> (TempDir, PathBuf) {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let root = fs::canonicalize(temp_dir.path()).expect("Failed to canonicalize temp dir");
    (temp_dir, root)
}

/// Writes `EditorTests.toml` into `root`.
pub fn write_settings(root: &Path, content: &str) -> PathBuf {
    let path = root.join("EditorTests.toml");
    fs::write(&path, content).expect("Failed to write settings file");
    path
}

/// Writes an executable `sh` script.
#[cfg(unix)]
pub fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create script directory");
    }
    fs::write(path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
    let mut permissions = fs::metadata(path).unwrap().permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(path, permissions).expect("Failed to make script executable");
}
