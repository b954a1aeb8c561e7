//! labkit: statistical learning lab notebook tooling.
//!
//! # Usage
//!
//! ```text
//! labkit render <config> [--root <dir>] [--output <dir>]
//! labkit setup [<notebook>...] [--outdir <dir>] [--allow-existing]
//!              [--commit <ref>] [--python-version <v>] [--uv-executable <path>]
//!              [--mode execute|test] [--timeout <secs>] [--kernel <name>]
//!              [--allow-errors] [--nbmake-allow-errors] [--rerun <n>]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{render::RenderArgs, setup::SetupArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "labkit",
    version,
    about = "Render and bootstrap statistical learning lab notebooks",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render notebook templates against a JSON configuration.
    Render(RenderArgs),

    /// Build a ready-to-use lab environment from the upstream repository.
    Setup(SetupArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => args.run(),
        Commands::Setup(args) => args.run(),
    }
}
