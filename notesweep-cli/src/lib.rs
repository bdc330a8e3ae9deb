//! Notesweep CLI library
//!
//! This library provides the command-line interface for the notesweep
//! date de-identification scanner.

pub mod cli;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
