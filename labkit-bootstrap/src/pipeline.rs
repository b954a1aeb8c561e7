//! Bootstrap pipeline entrypoint.

use std::path::{Path, PathBuf};

use crate::command::CommandRunner;
use crate::error::BootstrapError;
use crate::request::BootstrapRequest;
use crate::workspace::Workspace;
use crate::{python, repo, validate};

/// Outcome of a completed bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Where the environment was built.
    pub destination: PathBuf,
    /// Whether the destination survives the run.
    pub kept: bool,
    /// Notebooks validated successfully.
    pub validated: usize,
    /// Requested notebooks missing from the checkout.
    pub skipped: usize,
}

/// Run the full bootstrap sequence for `request`.
///
/// The destination is resolved before any command is issued, so an occupied
/// directory fails the run with zero side effects. A temporary destination
/// is removed by the time this function returns, on success and failure
/// alike. The first failing command aborts the sequence.
pub fn run(
    request: &BootstrapRequest,
    runner: &dyn CommandRunner,
) -> Result<BootstrapReport, BootstrapError> {
    init_tracing();

    let workspace = Workspace::resolve(request.outdir.as_deref(), request.allow_existing)?;
    let dest = workspace.path();
    tracing::debug!("bootstrapping into {}", dest.display());

    repo::sync(runner, dest, &request.reference)?;
    python::provision(
        runner,
        dest,
        &request.uv_executable,
        &request.python_version,
    )?;
    python::install_requirements(runner, dest)?;

    let validated = validate::run(runner, dest, &request.notebooks, &request.validation)?;
    let skipped = request.notebooks.len() - validated;

    println!("Setup completed successfully.");
    println!("Environment is in: {}", dest.display());
    print_activation_hint(dest);

    Ok(BootstrapReport {
        destination: dest.to_path_buf(),
        kept: workspace.is_kept(),
        validated,
        skipped,
    })
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

fn print_activation_hint(dest: &Path) {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dest.display().to_string());
    #[cfg(windows)]
    println!("Activate it with: .\\{name}\\.venv\\Scripts\\activate");
    #[cfg(not(windows))]
    println!("Activate it with: source {name}/.venv/bin/activate");
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
