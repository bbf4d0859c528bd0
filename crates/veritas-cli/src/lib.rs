//! Veritas CLI library.
//!
//! This library provides the terminal front end for the Veritas evaluation
//! service: configuration profiles, the interactive chat loop, one-shot
//! commands, and output rendering.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
