//! Notebook discovery.

use std::path::{Path, PathBuf};

use crate::error::{io_err, RenderError};

/// List every notebook (`*.ipynb`) directly under `root`, sorted by path.
///
/// Non-recursive: subdirectories are never entered, so already-rendered
/// output directories inside the root cannot feed back into a run.
/// Entries that are not regular files are skipped.
pub fn discover_notebooks(root: &Path) -> Result<Vec<PathBuf>, RenderError> {
    let entries = std::fs::read_dir(root).map_err(|e| io_err(root, e))?;
    let mut notebooks: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("ipynb"))
        .collect();
    notebooks.sort();
    tracing::debug!(
        "discovered {} notebook(s) under {}",
        notebooks.len(),
        root.display()
    );
    Ok(notebooks)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        std::fs::write(dir.path().join(name), "{}").expect("write fixture");
    }

    #[test]
    fn finds_only_ipynb_files() {
        let dir = TempDir::new().expect("tempdir");
        touch(&dir, "Ch02-statlearn-lab.ipynb");
        touch(&dir, "requirements.txt");
        touch(&dir, "README.md");
        let found = discover_notebooks(dir.path()).expect("discover");
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("Ch02-statlearn-lab.ipynb"));
    }

    #[test]
    fn results_are_sorted_by_name() {
        let dir = TempDir::new().expect("tempdir");
        touch(&dir, "Ch06-varselect-lab.ipynb");
        touch(&dir, "Ch02-statlearn-lab.ipynb");
        touch(&dir, "Ch04-classification-lab.ipynb");
        let found = discover_notebooks(dir.path()).expect("discover");
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "Ch02-statlearn-lab.ipynb",
                "Ch04-classification-lab.ipynb",
                "Ch06-varselect-lab.ipynb",
            ]
        );
    }

    #[test]
    fn subdirectories_are_not_entered() {
        let dir = TempDir::new().expect("tempdir");
        touch(&dir, "top.ipynb");
        let nested = dir.path().join("rendered");
        std::fs::create_dir(&nested).expect("mkdir");
        std::fs::write(nested.join("nested.ipynb"), "{}").expect("write nested");
        let found = discover_notebooks(dir.path()).expect("discover");
        assert_eq!(found.len(), 1, "nested notebooks must be ignored");
    }

    #[test]
    fn directory_named_like_a_notebook_is_skipped() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::create_dir(dir.path().join("fake.ipynb")).expect("mkdir");
        touch(&dir, "real.ipynb");
        let found = discover_notebooks(dir.path()).expect("discover");
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("real.ipynb"));
    }

    #[test]
    fn empty_root_yields_empty_list() {
        let dir = TempDir::new().expect("tempdir");
        let found = discover_notebooks(dir.path()).expect("discover");
        assert!(found.is_empty());
    }

    #[test]
    fn unlistable_root_is_an_error() {
        let dir = TempDir::new().expect("tempdir");
        let missing = dir.path().join("gone");
        let err = discover_notebooks(&missing).unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
    }
}
