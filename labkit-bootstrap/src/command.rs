//! Command execution primitive.
//!
//! Child output is forwarded line by line as it is produced, not buffered
//! until exit, so long-running installs stay visible. Failure is signalled
//! only after the process exits, which means a failing command's own error
//! text always reaches the console before the surrounding run aborts.

use std::fmt;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::BootstrapError;

// ---------------------------------------------------------------------------
// CommandLine
// ---------------------------------------------------------------------------

/// A single external command: program, arguments, working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl CommandLine {
    pub fn new(program: impl Into<String>, args: &[&str], cwd: impl Into<PathBuf>) -> Self {
        CommandLine {
            program: program.into(),
            args: args.iter().map(|s| s.to_string()).collect(),
            cwd: cwd.into(),
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// CommandRunner
// ---------------------------------------------------------------------------

/// Executes commands on behalf of the bootstrap pipeline.
///
/// The pipeline only ever talks to this trait, so tests can substitute a
/// recorder that captures the exact command sequence without spawning
/// anything.
pub trait CommandRunner {
    fn run(&self, command: &CommandLine) -> Result<(), BootstrapError>;
}

/// [`CommandRunner`] that spawns real processes and streams their output.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &CommandLine) -> Result<(), BootstrapError> {
        tracing::debug!("running `{command}` in {}", command.cwd.display());
        println!("$ {command}");

        let mut child = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| BootstrapError::Launch {
                command: command.to_string(),
                source: e,
            })?;

        // Both pipes must drain concurrently or a chatty child fills one
        // and deadlocks. stderr gets its own thread; stdout drains here.
        // Lines from both streams land on the caller's stdout, matching a
        // stderr-merged-into-stdout subprocess.
        let stderr_thread = child.stderr.take().map(|stream| {
            std::thread::spawn(move || {
                for line in BufReader::new(stream).lines().map_while(Result::ok) {
                    println!("{line}");
                }
            })
        });

        if let Some(stream) = child.stdout.take() {
            for line in BufReader::new(stream).lines().map_while(Result::ok) {
                println!("{line}");
            }
        }

        if let Some(handle) = stderr_thread {
            let _ = handle.join();
        }

        let status = child.wait().map_err(|e| BootstrapError::Launch {
            command: command.to_string(),
            source: e,
        })?;
        if !status.success() {
            return Err(BootstrapError::CommandFailed {
                command: command.to_string(),
                code: status.code(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_shell_style() {
        let cmd = CommandLine::new("git", &["fetch", "origin", "main", "--depth=1"], "/tmp");
        assert_eq!(cmd.to_string(), "git fetch origin main --depth=1");
    }

    #[test]
    fn display_without_args_is_just_the_program() {
        let cmd = CommandLine::new("uv", &[], "/tmp");
        assert_eq!(cmd.to_string(), "uv");
    }

    #[test]
    fn missing_executable_is_a_launch_error() {
        let cmd = CommandLine::new("labkit-no-such-binary", &[], std::env::temp_dir());
        let err = ProcessRunner.run(&cmd).unwrap_err();
        assert!(matches!(err, BootstrapError::Launch { .. }), "got {err}");
    }

    #[test]
    #[cfg(unix)]
    fn successful_command_returns_ok() {
        let cmd = CommandLine::new("sh", &["-c", "echo streaming"], std::env::temp_dir());
        ProcessRunner.run(&cmd).expect("sh exits zero");
    }

    #[test]
    #[cfg(unix)]
    fn nonzero_exit_maps_to_command_failed_with_code() {
        let cmd = CommandLine::new("sh", &["-c", "echo doomed; exit 7"], std::env::temp_dir());
        let err = ProcessRunner.run(&cmd).unwrap_err();
        match err {
            BootstrapError::CommandFailed { command, code } => {
                assert!(command.starts_with("sh -c"));
                assert_eq!(code, Some(7));
            }
            other => panic!("expected CommandFailed, got {other}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn failure_is_reported_only_after_exit() {
        // The child writes to both streams before failing; run() must not
        // bail out until wait() observes the status.
        let cmd = CommandLine::new(
            "sh",
            &["-c", "echo out; echo err 1>&2; exit 3"],
            std::env::temp_dir(),
        );
        let err = ProcessRunner.run(&cmd).unwrap_err();
        assert!(matches!(
            err,
            BootstrapError::CommandFailed { code: Some(3), .. }
        ));
    }

    #[test]
    #[cfg(unix)]
    fn commands_run_in_the_given_directory() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let cmd = CommandLine::new("sh", &["-c", "touch marker"], dir.path());
        ProcessRunner.run(&cmd).expect("touch");
        assert!(dir.path().join("marker").exists());
    }
}
