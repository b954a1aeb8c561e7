//! JSON render configuration.
//!
//! A configuration file is a single JSON object whose top-level keys become
//! the variables available to notebook templates. Keys pass through
//! verbatim; there is no schema beyond "the document must be an object".

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{io_err, ConfigError};

/// Immutable template context loaded from a JSON file.
///
/// Loaded once per run and handed to the renderer by reference. A load
/// either yields the complete mapping or an error, never a partial one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderConfig {
    values: Map<String, Value>,
}

impl RenderConfig {
    /// Load a configuration from `path`.
    ///
    /// Returns [`ConfigError::NotFound`] if the file is absent,
    /// [`ConfigError::Parse`] (with path and line context) if the JSON is
    /// malformed, and [`ConfigError::NotAnObject`] if the document is valid
    /// JSON whose top level is not an object.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
        let document: Value = serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        match document {
            Value::Object(values) => Ok(RenderConfig { values }),
            _ => Err(ConfigError::NotAnObject {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Build a configuration directly from a key/value mapping.
    pub fn from_map(values: Map<String, Value>) -> Self {
        RenderConfig { values }
    }

    /// Look up a single top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The full key/value mapping.
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the configuration carries no keys at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
