//! # labkit-bootstrap
//!
//! Environment bootstrapping: shallow-fetch the course repository, provision
//! a Python virtual environment with uv, install requirements, and validate
//! requested notebooks.
//!
//! Call [`pipeline::run`] with a [`BootstrapRequest`] and a
//! [`CommandRunner`]. The production runner ([`ProcessRunner`]) spawns real
//! processes and streams their output; tests substitute a recorder to verify
//! the exact command sequence.

pub mod command;
pub mod error;
pub mod pipeline;
pub mod python;
pub mod repo;
pub mod request;
pub mod validate;
pub mod workspace;

#[cfg(test)]
pub(crate) mod testing;

pub use command::{CommandLine, CommandRunner, ProcessRunner};
pub use error::BootstrapError;
pub use pipeline::BootstrapReport;
pub use request::{BootstrapRequest, ValidationMode, ValidationOptions, REPO_URL};
pub use workspace::Workspace;
