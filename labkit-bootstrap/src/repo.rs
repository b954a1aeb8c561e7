//! Repository acquisition: shallow fetch of a single reference.

use std::path::Path;

use crate::command::{CommandLine, CommandRunner};
use crate::error::BootstrapError;
use crate::request::REPO_URL;

/// Materialise the course repository at `reference` inside `dest`.
///
/// Equivalent to a shallow clone that never names a local branch: init the
/// directory, add the origin remote, fetch exactly one reference at depth 1,
/// check out FETCH_HEAD. Works for branches, tags, and commit hashes alike.
pub fn sync(
    runner: &dyn CommandRunner,
    dest: &Path,
    reference: &str,
) -> Result<(), BootstrapError> {
    println!("Initializing repository in {}...", dest.display());
    runner.run(&CommandLine::new("git", &["init"], dest))?;
    runner.run(&CommandLine::new(
        "git",
        &["remote", "add", "origin", REPO_URL],
        dest,
    ))?;

    println!("Fetching {reference}...");
    runner.run(&CommandLine::new(
        "git",
        &["fetch", "origin", reference, "--depth=1"],
        dest,
    ))?;

    println!("Checking out {reference}...");
    runner.run(&CommandLine::new("git", &["checkout", "FETCH_HEAD"], dest))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRunner;
    use std::path::PathBuf;

    #[test]
    fn issues_the_four_git_steps_in_order() {
        let runner = RecordingRunner::new();
        sync(&runner, Path::new("/work/env"), "v2.2").expect("sync");
        assert_eq!(
            runner.commands(),
            vec![
                "git init".to_string(),
                format!("git remote add origin {REPO_URL}"),
                "git fetch origin v2.2 --depth=1".to_string(),
                "git checkout FETCH_HEAD".to_string(),
            ]
        );
    }

    #[test]
    fn every_step_runs_in_the_destination() {
        let runner = RecordingRunner::new();
        sync(&runner, Path::new("/work/env"), "main").expect("sync");
        for call in runner.calls() {
            assert_eq!(call.cwd, PathBuf::from("/work/env"));
        }
    }

    #[test]
    fn a_failing_step_stops_the_sequence() {
        let runner = RecordingRunner::failing_at(2);
        let err = sync(&runner, Path::new("/work/env"), "main").unwrap_err();
        assert!(matches!(err, BootstrapError::CommandFailed { .. }));
        assert_eq!(runner.call_count(), 3, "no step after the failing fetch");
    }
}
