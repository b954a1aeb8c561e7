//! Labkit core library: render configuration loading and errors.
//!
//! Public API surface:
//! - [`config`]: [`RenderConfig`], the JSON template context
//! - [`error`]: [`ConfigError`]

pub mod config;
pub mod error;

pub use config::RenderConfig;
pub use error::ConfigError;
