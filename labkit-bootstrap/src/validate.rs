//! Post-install notebook validation.

use std::path::{Path, PathBuf};

use crate::command::{CommandLine, CommandRunner};
use crate::error::BootstrapError;
use crate::python::venv_tool;
use crate::request::{ValidationMode, ValidationOptions};

/// Validate `notebooks` inside the checkout at `dest`.
///
/// Notebooks missing from the checkout are reported on stderr and skipped;
/// a validation tool failure aborts the run. Test mode installs its harness
/// before looking at the notebook list, so the install happens even when
/// every requested notebook turns out to be missing.
///
/// Returns the number of notebooks actually validated.
pub fn run(
    runner: &dyn CommandRunner,
    dest: &Path,
    notebooks: &[PathBuf],
    options: &ValidationOptions,
) -> Result<usize, BootstrapError> {
    if notebooks.is_empty() {
        return Ok(0);
    }

    if matches!(options.mode, ValidationMode::Test { .. }) {
        println!("Installing notebook test harness...");
        runner.run(&CommandLine::new(
            venv_tool("pip"),
            &["install", "pytest", "nbmake"],
            dest,
        ))?;
    }

    let mut validated = 0;
    for notebook in notebooks {
        if !dest.join(notebook).exists() {
            tracing::debug!("requested notebook missing: {}", notebook.display());
            eprintln!(
                "Notebook '{}' not found in the checkout, skipping.",
                notebook.display()
            );
            continue;
        }
        match options.mode {
            ValidationMode::Execute { .. } => {
                println!("Running notebook {} with nbconvert...", notebook.display());
            }
            ValidationMode::Test { .. } => {
                println!("Running notebook {} with nbmake...", notebook.display());
            }
        }
        runner.run(&validation_command(dest, notebook, options))?;
        validated += 1;
    }
    Ok(validated)
}

/// Build the validation argv for one notebook.
///
/// Optional flags keep the positions the tools expect: nbconvert takes the
/// file before `--kernel`/`--allow-errors`, nbmake takes its long flags
/// after the file.
fn validation_command(dest: &Path, notebook: &Path, options: &ValidationOptions) -> CommandLine {
    let file = notebook.display().to_string();
    match &options.mode {
        ValidationMode::Execute { allow_errors } => {
            let mut args = vec![
                "nbconvert".to_string(),
                "--to".to_string(),
                "notebook".to_string(),
                "--execute".to_string(),
                "--inplace".to_string(),
                format!("--ExecutePreprocessor.timeout={}", options.timeout_secs),
                file,
            ];
            if let Some(kernel) = &options.kernel {
                args.push("--kernel".to_string());
                args.push(kernel.clone());
            }
            if *allow_errors {
                args.push("--allow-errors".to_string());
            }
            CommandLine {
                program: venv_tool("jupyter"),
                args,
                cwd: dest.to_path_buf(),
            }
        }
        ValidationMode::Test {
            allow_errors,
            rerun,
        } => {
            let mut args = vec![
                "--nbmake".to_string(),
                format!("--nbmake-timeout={}", options.timeout_secs),
                "-vv".to_string(),
                file,
            ];
            if let Some(kernel) = &options.kernel {
                args.push(format!("--nbmake-kernel={kernel}"));
            }
            if *allow_errors {
                args.push("--nbmake-allow-errors".to_string());
            }
            if *rerun > 0 {
                args.push(format!("--nbmake-rerun={rerun}"));
            }
            CommandLine {
                program: venv_tool("pytest"),
                args,
                cwd: dest.to_path_buf(),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
