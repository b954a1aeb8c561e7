//! Python toolchain provisioning with uv.

use std::path::{Path, PathBuf};

use crate::command::{CommandLine, CommandRunner};
use crate::error::BootstrapError;

/// Script directory of the checkout's virtual environment, relative to it.
pub fn venv_bin_dir() -> PathBuf {
    #[cfg(windows)]
    {
        PathBuf::from(".venv").join("Scripts")
    }
    #[cfg(not(windows))]
    {
        PathBuf::from(".venv").join("bin")
    }
}

/// Invocation path of a tool inside the virtual environment.
pub fn venv_tool(name: &str) -> String {
    venv_bin_dir().join(name).display().to_string()
}

/// Install the interpreter and create the seeded virtual environment.
pub fn provision(
    runner: &dyn CommandRunner,
    dest: &Path,
    uv: &str,
    version: &str,
) -> Result<(), BootstrapError> {
    println!("Setting up Python {version} with {uv}...");
    runner.run(&CommandLine::new(uv, &["python", "install", version], dest))?;

    println!("Creating virtual environment...");
    runner.run(&CommandLine::new(
        uv,
        &["venv", "--python", version, "--seed"],
        dest,
    ))?;
    Ok(())
}

/// Install the course requirements plus JupyterLab into the environment.
pub fn install_requirements(runner: &dyn CommandRunner, dest: &Path) -> Result<(), BootstrapError> {
    println!("Installing requirements...");
    runner.run(&CommandLine::new(
        venv_tool("pip"),
        &["install", "-r", "requirements.txt", "jupyterlab"],
        dest,
    ))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
