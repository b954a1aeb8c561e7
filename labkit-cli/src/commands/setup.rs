//! `labkit setup`: build a lab environment and optionally validate notebooks.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use labkit_bootstrap::{
    pipeline, BootstrapRequest, ProcessRunner, ValidationMode, ValidationOptions,
};

/// Arguments for `labkit setup`.
#[derive(Args, Debug)]
pub struct SetupArgs {
    /// Notebooks to validate after setup, as paths relative to the checkout.
    pub notebooks: Vec<PathBuf>,

    /// Directory to build the environment in. Defaults to a temporary
    /// directory removed when the command finishes.
    #[arg(long)]
    pub outdir: Option<PathBuf>,

    /// Accept a non-empty --outdir instead of refusing it.
    #[arg(long, requires = "outdir")]
    pub allow_existing: bool,

    /// Git reference to fetch: branch, tag, or commit.
    #[arg(long, default_value = "main", value_name = "REF")]
    pub commit: String,

    /// Python version to install into the environment.
    #[arg(long, default_value = "3.11")]
    pub python_version: String,

    /// uv executable to provision with.
    #[arg(long, default_value = "uv")]
    pub uv_executable: String,

    /// Validation mode: execute (nbconvert in place) or test (nbmake).
    #[arg(long, default_value_t = ModeArg::Test, value_name = "MODE")]
    pub mode: ModeArg,

    /// Per-notebook timeout in seconds.
    #[arg(long, default_value_t = 3600)]
    pub timeout: u64,

    /// Jupyter kernel to validate with.
    #[arg(long)]
    pub kernel: Option<String>,

    /// Keep executing past cell errors (execute mode).
    #[arg(long)]
    pub allow_errors: bool,

    /// Treat cell errors as expected (test mode).
    #[arg(long)]
    pub nbmake_allow_errors: bool,

    /// Re-run a failing notebook up to this many times (test mode).
    #[arg(long, default_value_t = 0, value_name = "N")]
    pub rerun: u32,
}

impl SetupArgs {
    pub fn run(self) -> Result<()> {
        let mode = match self.mode {
            ModeArg::Execute => ValidationMode::Execute {
                allow_errors: self.allow_errors,
            },
            ModeArg::Test => ValidationMode::Test {
                allow_errors: self.nbmake_allow_errors,
                rerun: self.rerun,
            },
        };
        let request = BootstrapRequest {
            outdir: self.outdir,
            allow_existing: self.allow_existing,
            reference: self.commit,
            python_version: self.python_version,
            uv_executable: self.uv_executable,
            notebooks: self.notebooks,
            validation: ValidationOptions {
                timeout_secs: self.timeout,
                kernel: self.kernel,
                mode,
            },
        };

        let report = pipeline::run(&request, &ProcessRunner).context("setup failed")?;
        if report.skipped > 0 {
            println!(
                "{} {} requested notebook(s) missing from the checkout",
                "⚠".yellow().bold(),
                report.skipped
            );
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Mode argument
// ---------------------------------------------------------------------------

/// Thin wrapper so clap can parse the validation mode from CLI args.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Execute,
    Test,
}

impl FromStr for ModeArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "execute" => Ok(Self::Execute),
            "test" => Ok(Self::Test),
            other => Err(format!("unknown mode '{other}'; expected: execute, test")),
        }
    }
}

impl fmt::Display for ModeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeArg::Execute => f.write_str("execute"),
            ModeArg::Test => f.write_str("test"),
        }
    }
}
