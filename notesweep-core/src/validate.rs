//! Plausibility filtering for matched candidates
//!
//! A cheap precision filter over the recall-oriented pattern: numeric
//! range checks only. It never resolves month vs. day, month lengths,
//! leap years, or real year ranges.

/// Accept/reject decision for matched candidate text.
#[derive(Debug, Default, Clone, Copy)]
pub struct CandidateFilter;

impl CandidateFilter {
    /// Create a new filter
    pub fn new() -> Self {
        Self
    }

    /// Decide whether `text` can plausibly be a calendar date.
    ///
    /// The decision is made from the ordered maximal digit runs:
    /// - one run: a bare day or 2-digit year, rejected above 31;
    /// - two runs: month-candidate then day-candidate, rejected when
    ///   the first is 0 or above 12, or the second is above 31;
    /// - zero or three-plus runs: accepted unconditionally. No rule is
    ///   defined for these shapes, so they pass through.
    pub fn is_plausible(&self, text: &str) -> bool {
        let runs = digit_runs(text);
        match runs.as_slice() {
            [day] => *day <= 31,
            [month, day] => (1..=12).contains(month) && *day <= 31,
            _ => true,
        }
    }
}

/// Extract every maximal run of ASCII digits as a base-10 integer, in
/// order of appearance. Leading zeros parse numerically ("07" is 7).
fn digit_runs(text: &str) -> Vec<u32> {
    let mut runs = Vec::new();
    let mut current: Option<u32> = None;
    for ch in text.chars() {
        if let Some(digit) = ch.to_digit(10) {
            let value = current.unwrap_or(0);
            current = Some(value.saturating_mul(10).saturating_add(digit));
        } else if let Some(value) = current.take() {
            runs.push(value);
        }
    }
    if let Some(value) = current {
        runs.push(value);
    }
    runs
}
