//! Ownerscope CLI library - command-line surface for the ownership pipeline.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod run;

pub use cli::{Cli, CliFormat};
pub use config::{Config, OutputFormat};
pub use error::{CliError, Result};
pub use output::Formatter;
