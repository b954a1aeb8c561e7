//! # labkit-renderer
//!
//! Notebook discovery and Tera-based batch rendering.
//!
//! Call [`render_batch`] to render every notebook in a lab directory against
//! a [`RenderConfig`](labkit_core::RenderConfig):
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use labkit_core::RenderConfig;
//! use labkit_renderer::render_batch;
//!
//! fn render(root: &Path) {
//!     if let Ok(config) = RenderConfig::load(&root.join("config.json")) {
//!         if let Ok(summary) = render_batch(root, &config, &root.join("rendered")) {
//!             println!("{}/{} rendered", summary.succeeded(), summary.total());
//!         }
//!     }
//! }
//! ```

pub mod batch;
pub mod discover;
pub mod engine;
pub mod error;

pub use batch::{render_batch, RenderOutcome, RenderSummary};
pub use discover::discover_notebooks;
pub use engine::NotebookRenderer;
pub use error::RenderError;
