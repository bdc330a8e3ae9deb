//! Per-note annotation output
//!
//! Writes one output block per note: a header line, then one span line
//! per accepted candidate. The block format is consumed by a companion
//! scoring tool and must stay byte-exact, including the duplicated
//! start position inherited from the sibling phone detector.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pattern::DatePattern;
use crate::record::NoteChunk;
use crate::validate::CandidateFilter;

/// Fixed correction subtracted from raw match positions before
/// reporting. Compensates for the fixed-width sentinel prefix the
/// companion tooling treats as stripped from each chunk. Must not
/// change, or the scoring coordinate system breaks.
pub const POSITION_OFFSET: i64 = 27;

/// An accepted date span with corrected positions.
///
/// Positions are signed: a match inside the sentinel prefix corrects
/// to a negative offset and is reported as such.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    /// Corrected start position (raw character offset minus 27)
    pub start: i64,
    /// Corrected end position, exclusive
    pub end: i64,
    /// The matched text
    pub text: String,
}

/// Writes the annotation block for one note.
pub struct NoteAnnotator<'a> {
    pattern: &'a DatePattern,
    filter: CandidateFilter,
}

impl<'a> NoteAnnotator<'a> {
    /// Create an annotator over a shared compiled pattern
    pub fn new(pattern: &'a DatePattern) -> Self {
        Self {
            pattern,
            filter: CandidateFilter::new(),
        }
    }

    /// Collect the accepted date spans of `chunk` in scan order.
    pub fn spans(&self, chunk: &NoteChunk) -> Vec<DateSpan> {
        self.pattern
            .find_iter(&chunk.text)
            .filter(|m| self.filter.is_plausible(m.text))
            .map(|m| DateSpan {
                start: m.start as i64 - POSITION_OFFSET,
                end: m.end as i64 - POSITION_OFFSET,
                text: m.text.to_string(),
            })
            .collect()
    }

    /// Write the output block for `chunk` to `sink`.
    ///
    /// The header is written unconditionally, even for a note with no
    /// accepted spans. Each accepted span becomes one line of
    /// `start start end` with corrected positions. Accepted spans are
    /// also traced on the debug log channel; nothing beyond the block
    /// is ever written to the sink. Returns the number of span lines
    /// written.
    pub fn annotate<W: Write>(&self, chunk: &NoteChunk, sink: &mut W) -> Result<usize> {
        writeln!(sink, "Patient {}\tNote {}", chunk.patient_id, chunk.note_id)?;

        let mut written = 0;
        for span in self.spans(chunk) {
            writeln!(sink, "{} {} {}", span.start, span.start, span.end)?;
            log::debug!(
                "patient {} note {}: {} {} {}",
                chunk.patient_id,
                chunk.note_id,
                span.start,
                span.end,
                span.text
            );
            written += 1;
        }
        Ok(written)
    }
}
