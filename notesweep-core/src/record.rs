//! Record segmentation for concatenated note dumps
//!
//! The input stream holds many patient notes back to back, delimited
//! by sentinel lines:
//!
//! ```text
//! START_OF_RECORD=PATIENT||||NOTE||||
//! ...free text...
//! ||||END_OF_RECORD
//! ```
//!
//! [`RecordSegmenter`] walks the stream line by line as an explicit
//! two-state machine (idle / accumulating, with an empty buffer
//! standing for idle) and emits one [`NoteChunk`] per completed
//! record.

use std::io::BufRead;

use regex::Regex;

use crate::error::Result;

/// One complete patient note, as delimited by the sentinel lines.
///
/// `text` is the verbatim record including both sentinel lines,
/// trimmed of leading and trailing whitespace. Line terminators are
/// normalized to `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteChunk {
    /// Patient identifier from the most recent start sentinel
    pub patient_id: String,
    /// Note identifier from the most recent start sentinel
    pub note_id: String,
    /// Trimmed record text
    pub text: String,
}

/// Streaming segmenter over a line-oriented reader.
///
/// Identifiers update only on a start-sentinel line and persist until
/// the next one: an end sentinel with no intervening start reuses the
/// previously seen identifiers. Before any start sentinel they are
/// empty strings. A trailing record with no end sentinel is dropped at
/// end of input without producing a chunk; a warning is logged since
/// this usually indicates a truncated dump.
pub struct RecordSegmenter<R: BufRead> {
    lines: std::io::Lines<R>,
    start_sentinel: Regex,
    end_sentinel: Regex,
    patient_id: String,
    note_id: String,
    buffer: String,
}

impl<R: BufRead> RecordSegmenter<R> {
    /// Create a segmenter over `reader`
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            start_sentinel: Regex::new(r"(?i)^start_of_record=(\d+)\|\|\|\|(\d+)\|\|\|\|$")
                .expect("start sentinel pattern is a valid regex"),
            end_sentinel: Regex::new(r"(?i)\|\|\|\|end_of_record$")
                .expect("end sentinel pattern is a valid regex"),
            patient_id: String::new(),
            note_id: String::new(),
            buffer: String::new(),
        }
    }

    fn finish_chunk(&mut self) -> NoteChunk {
        let text = self.buffer.trim().to_string();
        self.buffer.clear();
        NoteChunk {
            patient_id: self.patient_id.clone(),
            note_id: self.note_id.clone(),
            text,
        }
    }
}

impl<R: BufRead> Iterator for RecordSegmenter<R> {
    type Item = Result<NoteChunk>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => return Some(Err(e.into())),
                None => {
                    if !self.buffer.is_empty() {
                        log::warn!(
                            "discarding unterminated record for patient {:?} note {:?} at end of input",
                            self.patient_id,
                            self.note_id
                        );
                        self.buffer.clear();
                    }
                    return None;
                }
            };

            if let Some(caps) = self.start_sentinel.captures(&line) {
                self.patient_id = caps[1].to_string();
                self.note_id = caps[2].to_string();
            }

            // Sentinel lines are part of the record text as well
            self.buffer.push_str(&line);
            self.buffer.push('\n');

            if self.end_sentinel.is_match(&line) {
                return Some(Ok(self.finish_chunk()));
            }
        }
    }
}
