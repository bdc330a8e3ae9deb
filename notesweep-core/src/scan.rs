//! End-to-end scanning pipeline
//!
//! Wires the segmenter into the annotator: raw stream in, annotation
//! blocks out, one deterministic forward pass.

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::annotate::NoteAnnotator;
use crate::error::Result;
use crate::pattern::DatePattern;
use crate::record::RecordSegmenter;

/// Counts reported after a completed scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Completed notes annotated (header lines written)
    pub notes: usize,
    /// Accepted date spans written across all notes
    pub spans: usize,
}

/// Single-pass scanner over a record dump.
///
/// Holds the compiled pattern so repeated scans share one automaton.
/// The caller owns both endpoints: the reader is consumed forward-only
/// and the sink is written once per note and flushed at the end, so it
/// can stay open across an entire run.
#[derive(Debug, Default)]
pub struct DateScanner {
    pattern: DatePattern,
}

impl DateScanner {
    /// Create a scanner with the standard date pattern
    pub fn new() -> Self {
        Self {
            pattern: DatePattern::new(),
        }
    }

    /// Scan `reader` and write one annotation block per completed note
    /// to `sink`, in input order.
    ///
    /// Any I/O error aborts the run and propagates. An unterminated
    /// trailing record produces no block at all.
    pub fn scan<R: BufRead, W: Write>(&self, reader: R, mut sink: W) -> Result<ScanSummary> {
        let annotator = NoteAnnotator::new(&self.pattern);
        let mut summary = ScanSummary::default();

        for chunk in RecordSegmenter::new(reader) {
            let chunk = chunk?;
            summary.spans += annotator.annotate(&chunk, &mut sink)?;
            summary.notes += 1;
        }

        sink.flush()?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scan_to_string(input: &str) -> (String, ScanSummary) {
        let scanner = DateScanner::new();
        let mut sink = Vec::new();
        let summary = scanner.scan(Cursor::new(input.to_string()), &mut sink).unwrap();
        (String::from_utf8(sink).unwrap(), summary)
    }

    #[test]
    fn test_single_note_with_date() {
        let input = "start_of_record=7||||3||||\n02/14/05 visit\n||||END_OF_RECORD\n";
        let (out, summary) = scan_to_string(input);
        assert_eq!(out, "Patient 7\tNote 3\n0 0 8\n");
        assert_eq!(summary, ScanSummary { notes: 1, spans: 1 });
    }

    #[test]
    fn test_header_per_completed_note_in_order() {
        let input = "START_OF_RECORD=1||||1||||\nno dates\n||||END_OF_RECORD\n\
                     START_OF_RECORD=1||||2||||\nstill none\n||||END_OF_RECORD\n\
                     START_OF_RECORD=2||||1||||\nnothing\n||||END_OF_RECORD\n";
        let (out, summary) = scan_to_string(input);
        assert_eq!(
            out,
            "Patient 1\tNote 1\nPatient 1\tNote 2\nPatient 2\tNote 1\n"
        );
        assert_eq!(summary.notes, 3);
        assert_eq!(summary.spans, 0);
    }

    #[test]
    fn test_unterminated_trailing_record_produces_no_block() {
        let input = "START_OF_RECORD=1||||1||||\n1/2, noted\n||||END_OF_RECORD\n\
                     START_OF_RECORD=1||||2||||\n3/4, never closed\n";
        let (out, summary) = scan_to_string(input);
        assert_eq!(summary.notes, 1);
        assert!(out.starts_with("Patient 1\tNote 1\n"));
        assert!(!out.contains("Note 2"));
    }

    #[test]
    fn test_scan_is_deterministic() {
        let input = "START_OF_RECORD=8||||1||||\nf/u 02/14/05 and 12-31-1999\n||||END_OF_RECORD\n";
        let (first, _) = scan_to_string(input);
        let (second, _) = scan_to_string(input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_summary_serializes() {
        let summary = ScanSummary { notes: 2, spans: 5 };
        assert_eq!(
            serde_json::to_string(&summary).unwrap(),
            r#"{"notes":2,"spans":5}"#
        );
    }
}
