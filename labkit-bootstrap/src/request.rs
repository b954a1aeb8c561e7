//! Bootstrap run parameters.

use std::path::PathBuf;

/// Upstream repository every lab environment is built from.
pub const REPO_URL: &str = "https://github.com/intro-stat-learning/ISLP_labs.git";

/// Git reference fetched when none is given.
pub const DEFAULT_REFERENCE: &str = "main";

/// Python version installed when none is given.
pub const DEFAULT_PYTHON_VERSION: &str = "3.11";

/// uv executable invoked when none is given.
pub const DEFAULT_UV_EXECUTABLE: &str = "uv";

/// Per-notebook execution timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 3600;

// ---------------------------------------------------------------------------
// Validation settings
// ---------------------------------------------------------------------------

/// How requested notebooks are validated after provisioning.
///
/// The two modes keep separate error-tolerance flags because the underlying
/// tools disagree on what tolerance means: nbconvert keeps executing and
/// saves outputs, nbmake marks failing cells as expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationMode {
    /// Execute in place with `jupyter nbconvert`.
    Execute {
        /// Keep executing past cell errors (`--allow-errors`).
        allow_errors: bool,
    },
    /// Run each notebook as a pytest suite with nbmake.
    Test {
        /// Treat cell errors as expected (`--nbmake-allow-errors`).
        allow_errors: bool,
        /// Re-run a failing notebook up to this many times (`--nbmake-rerun`).
        rerun: u32,
    },
}

impl Default for ValidationMode {
    fn default() -> Self {
        ValidationMode::Test {
            allow_errors: false,
            rerun: 0,
        }
    }
}

/// Validation knobs shared by both modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Per-notebook timeout in seconds, enforced by the validation tool.
    pub timeout_secs: u64,
    /// Jupyter kernel to validate with; the tool picks one when unset.
    pub kernel: Option<String>,
    pub mode: ValidationMode,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        ValidationOptions {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            kernel: None,
            mode: ValidationMode::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// BootstrapRequest
// ---------------------------------------------------------------------------

/// Immutable parameters for one bootstrap run.
#[derive(Debug, Clone)]
pub struct BootstrapRequest {
    /// Destination directory; `None` allocates a temporary one that is
    /// removed when the run finishes.
    pub outdir: Option<PathBuf>,
    /// Permit a pre-existing non-empty destination.
    pub allow_existing: bool,
    /// Git reference to fetch: branch, tag, or commit.
    pub reference: String,
    /// Python version passed to uv.
    pub python_version: String,
    /// uv executable to invoke.
    pub uv_executable: String,
    /// Notebooks to validate after provisioning, relative to the checkout.
    pub notebooks: Vec<PathBuf>,
    /// Validation settings; consulted only when `notebooks` is non-empty.
    pub validation: ValidationOptions,
}

impl Default for BootstrapRequest {
    fn default() -> Self {
        BootstrapRequest {
            outdir: None,
            allow_existing: false,
            reference: DEFAULT_REFERENCE.to_string(),
            python_version: DEFAULT_PYTHON_VERSION.to_string(),
            uv_executable: DEFAULT_UV_EXECUTABLE.to_string(),
            notebooks: Vec::new(),
            validation: ValidationOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let request = BootstrapRequest::default();
        assert!(request.outdir.is_none());
        assert!(!request.allow_existing);
        assert_eq!(request.reference, "main");
        assert_eq!(request.python_version, "3.11");
        assert_eq!(request.uv_executable, "uv");
        assert!(request.notebooks.is_empty());
        assert_eq!(request.validation.timeout_secs, 3600);
        assert!(request.validation.kernel.is_none());
        assert_eq!(
            request.validation.mode,
            ValidationMode::Test {
                allow_errors: false,
                rerun: 0
            }
        );
    }

    #[test]
    fn repo_url_points_at_the_course_repository() {
        assert!(REPO_URL.starts_with("https://github.com/"));
        assert!(REPO_URL.ends_with(".git"));
    }
}
