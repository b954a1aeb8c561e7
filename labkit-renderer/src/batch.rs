//! Batch rendering over a lab directory.

use std::path::{Path, PathBuf};

use labkit_core::RenderConfig;

use crate::discover::discover_notebooks;
use crate::engine::NotebookRenderer;
use crate::error::{io_err, RenderError};

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

/// Outcome of an individual notebook in a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Notebook was rendered and written into the output directory.
    Rendered { source: PathBuf, output: PathBuf },
    /// Notebook failed on its own and was skipped; the batch continued.
    Skipped { source: PathBuf, reason: String },
}

/// Summary of a batch render run.
#[derive(Debug)]
pub struct RenderSummary {
    /// One entry per discovered notebook, in discovery order.
    pub outcomes: Vec<RenderOutcome>,
}

impl RenderSummary {
    /// Count of notebooks rendered successfully.
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RenderOutcome::Rendered { .. }))
            .count()
    }

    /// Total notebooks discovered.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}

// ---------------------------------------------------------------------------
// render_batch
// ---------------------------------------------------------------------------

/// Render every notebook directly under `root` into `output_dir`.
///
/// Individual notebook failures (unreadable file, template syntax, write
/// error) are recorded as [`RenderOutcome::Skipped`] and the batch moves on;
/// a failed notebook leaves no output file behind. Only environment-level
/// failures abort the run: an unlistable root, an output directory that
/// cannot be created, or a configuration that cannot serve as a template
/// context.
///
/// `output_dir` is created with parents if absent. Existing content in it is
/// never cleared; same-named files are overwritten.
pub fn render_batch(
    root: &Path,
    config: &RenderConfig,
    output_dir: &Path,
) -> Result<RenderSummary, RenderError> {
    let notebooks = discover_notebooks(root)?;
    let renderer = NotebookRenderer::new(config)?;

    std::fs::create_dir_all(output_dir).map_err(|e| io_err(output_dir, e))?;

    let mut outcomes = Vec::with_capacity(notebooks.len());
    for source in notebooks {
        match render_one(&renderer, &source, output_dir) {
            Ok(output) => {
                tracing::debug!("rendered {} into {}", source.display(), output.display());
                outcomes.push(RenderOutcome::Rendered { source, output });
            }
            Err(e) => {
                tracing::warn!("skipping {}: {e}", source.display());
                outcomes.push(RenderOutcome::Skipped {
                    source,
                    reason: e.to_string(),
                });
            }
        }
    }
    Ok(RenderSummary { outcomes })
}

fn render_one(
    renderer: &NotebookRenderer,
    source: &Path,
    output_dir: &Path,
) -> Result<PathBuf, RenderError> {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.display().to_string());
    let content = std::fs::read_to_string(source).map_err(|e| io_err(source, e))?;
    let rendered = renderer.render(&name, &content)?;
    let output = output_dir.join(&name);
    std::fs::write(&output, rendered).map_err(|e| io_err(&output, e))?;
    Ok(output)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
