//! Error types for labkit-bootstrap.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from environment bootstrapping.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The explicit destination directory exists and is not empty.
    #[error("destination {path} already exists and is not empty; pick an empty or non-existent directory")]
    DestinationOccupied { path: PathBuf },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A command ran and exited with a non-zero status.
    #[error("command `{command}` failed{}", exit_suffix(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
    },

    /// A command could not be started at all (missing executable, permissions).
    #[error("failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => String::from(" (terminated by signal)"),
    }
}

/// Convenience constructor for [`BootstrapError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> BootstrapError {
    BootstrapError::Io {
        path: path.into(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_message_includes_exit_code() {
        let err = BootstrapError::CommandFailed {
            command: "git fetch origin main --depth=1".to_string(),
            code: Some(128),
        };
        let msg = err.to_string();
        assert!(msg.contains("git fetch origin main --depth=1"));
        assert!(msg.contains("exit code 128"));
    }

    #[test]
    fn signal_termination_has_no_exit_code() {
        let err = BootstrapError::CommandFailed {
            command: "git init".to_string(),
            code: None,
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn occupied_message_names_the_directory() {
        let err = BootstrapError::DestinationOccupied {
            path: PathBuf::from("/tmp/labs"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/labs"));
        assert!(msg.contains("not empty"));
    }
}
