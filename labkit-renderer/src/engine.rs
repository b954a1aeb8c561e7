//! Tera rendering engine for notebook templates.

use tera::Tera;

use labkit_core::RenderConfig;

use crate::error::RenderError;

/// Renders notebook bodies against a fixed configuration.
///
/// The template context is converted once at construction time. Each
/// [`render`](NotebookRenderer::render) call registers the notebook body as
/// a one-off raw template in a fresh `Tera` instance, so a syntax error in
/// one notebook cannot affect any other.
pub struct NotebookRenderer {
    context: tera::Context,
}

impl NotebookRenderer {
    /// Build a renderer from a loaded configuration.
    pub fn new(config: &RenderConfig) -> Result<Self, RenderError> {
        let context = tera::Context::from_serialize(config.values())?;
        Ok(NotebookRenderer { context })
    }

    /// Render one notebook body.
    ///
    /// `name` identifies the template in error messages. Autoescape is off:
    /// notebook JSON is an opaque payload, not HTML.
    pub fn render(&self, name: &str, content: &str) -> Result<String, RenderError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(name, content)?;
        Ok(tera.render(name, &self.context)?)
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
