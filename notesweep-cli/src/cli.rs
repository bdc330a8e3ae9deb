//! Command-line interface definition and execution

use clap::Parser;
use std::path::PathBuf;

use notesweep_core::DateScanner;

use crate::error::{CliError, CliResult};
use crate::input::RecordInput;
use crate::output::PhiOutput;

/// Locate date spans in free-text medical records for de-identification
#[derive(Debug, Parser)]
#[command(name = "notesweep", version)]
pub struct Cli {
    /// Input record dump (concatenated notes with sentinel lines)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output sidecar file for detected date spans
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Execute the scan
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::info!("scanning {} for date spans", self.input.display());

        let reader = RecordInput::open(&self.input)?;
        let sink = PhiOutput::create(&self.output)?;

        let summary = DateScanner::new()
            .scan(reader, sink)
            .map_err(|e| CliError::Processing(e.to_string()))?;

        log::info!(
            "annotated {} notes, {} date spans -> {}",
            summary.notes,
            summary.spans,
            self.output.display()
        );

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}
