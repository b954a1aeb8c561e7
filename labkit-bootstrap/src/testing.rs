//! Test doubles for the command runner seam.

use std::sync::Mutex;

use crate::command::{CommandLine, CommandRunner};
use crate::error::BootstrapError;

/// Records every issued command instead of spawning it.
///
/// Optionally fails the nth call, which lets tests verify that a failing
/// step halts the sequence exactly where it happened.
pub(crate) struct RecordingRunner {
    calls: Mutex<Vec<CommandLine>>,
    fail_on: Option<usize>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        RecordingRunner {
            calls: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }

    /// Fail the `index`-th issued command (0-based) with exit code 1.
    pub fn failing_at(index: usize) -> Self {
        RecordingRunner {
            calls: Mutex::new(Vec::new()),
            fail_on: Some(index),
        }
    }

    /// Every recorded command, rendered shell-style.
    pub fn commands(&self) -> Vec<String> {
        self.calls
            .lock()
            .expect("runner lock")
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    /// Every recorded command with its working directory.
    pub fn calls(&self) -> Vec<CommandLine> {
        self.calls.lock().expect("runner lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("runner lock").len()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandLine) -> Result<(), BootstrapError> {
        let mut calls = self.calls.lock().expect("runner lock");
        let index = calls.len();
        calls.push(command.clone());
        if self.fail_on == Some(index) {
            return Err(BootstrapError::CommandFailed {
                command: command.to_string(),
                code: Some(1),
            });
        }
        Ok(())
    }
}
