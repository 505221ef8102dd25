//! Studyforge CLI library
//!
//! Command-line front end for the study-aid generator: collects context,
//! drives the generation pipeline, and renders the resulting artifacts for
//! the terminal or as JSON for downstream consumers.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
