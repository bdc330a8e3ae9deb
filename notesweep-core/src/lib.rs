//! Date-PHI span detection for de-identification of free-text medical
//! records.
//!
//! A record dump holds many notes back to back, delimited by sentinel
//! lines. This crate segments the dump into per-note chunks, finds
//! date-like substrings with a compiled pattern, filters implausible
//! candidates with numeric range checks, and writes a sidecar file of
//! per-note character-offset spans for a downstream redaction step.
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::{BufReader, BufWriter};
//! use notesweep_core::DateScanner;
//!
//! # fn main() -> notesweep_core::Result<()> {
//! let input = BufReader::new(File::open("id.txt")?);
//! let output = BufWriter::new(File::create("date.phi")?);
//! let summary = DateScanner::new().scan(input, output)?;
//! println!("{} notes, {} spans", summary.notes, summary.spans);
//! # Ok(())
//! # }
//! ```

pub mod annotate;
pub mod error;
pub mod pattern;
pub mod record;
pub mod scan;
pub mod validate;

pub use annotate::{DateSpan, NoteAnnotator, POSITION_OFFSET};
pub use error::{Result, ScanError};
pub use pattern::{DateMatch, DatePattern};
pub use record::{NoteChunk, RecordSegmenter};
pub use scan::{DateScanner, ScanSummary};
pub use validate::CandidateFilter;
