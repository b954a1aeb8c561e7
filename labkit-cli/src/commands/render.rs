//! `labkit render`: render notebook templates against a JSON configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use labkit_core::RenderConfig;
use labkit_renderer::{render_batch, RenderOutcome};

/// Arguments for `labkit render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// JSON configuration file, resolved relative to `--root`.
    pub config: PathBuf,

    /// Directory holding the notebook templates.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Directory to write rendered notebooks into, resolved relative to `--root`.
    #[arg(long, default_value = "rendered")]
    pub output: PathBuf,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let config_path = self.root.join(&self.config);
        let config = RenderConfig::load(&config_path)
            .with_context(|| format!("cannot load configuration '{}'", config_path.display()))?;

        let output_dir = self.root.join(&self.output);
        let summary = render_batch(&self.root, &config, &output_dir)
            .with_context(|| format!("render failed under '{}'", self.root.display()))?;

        for outcome in &summary.outcomes {
            match outcome {
                RenderOutcome::Rendered { output, .. } => {
                    println!("  {}  {}", "✓".green().bold(), output.display());
                }
                RenderOutcome::Skipped { source, reason } => {
                    println!(
                        "  {}  {} ({reason})",
                        "⚠".yellow().bold(),
                        source.display()
                    );
                }
            }
        }

        println!(
            "Rendered {}/{} notebook(s) into {}",
            summary.succeeded(),
            summary.total(),
            output_dir.display()
        );
        Ok(())
    }
}
