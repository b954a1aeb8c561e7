//! Subcommand implementations.

pub mod render;
pub mod setup;
