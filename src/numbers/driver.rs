use crate::models::NumberLabel;
use crate::numbers::classify;
use std::io::{self, Write};
use tracing::debug;

/// Inclusive range of numbers to classify
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRange {
    pub start: i64,
    pub end: i64,
}

impl NumberRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// An inverted range (`start > end`) is empty rather than an error
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// Labels for every number in the range, in ascending order
pub fn labels(range: NumberRange) -> impl Iterator<Item = NumberLabel> {
    (range.start..=range.end).map(classify)
}

/// Write one label per line and return how many lines were written
pub fn run<W: Write>(range: &NumberRange, out: &mut W) -> io::Result<usize> {
    if range.is_empty() {
        debug!(
            start = range.start,
            end = range.end,
            "Range is inverted, nothing to print"
        );
        return Ok(0);
    }

    let mut written = 0;
    for label in labels(*range) {
        writeln!(out, "{label}")?;
        written += 1;
    }

    debug!(written, "Finished printing numbers");
    Ok(written)
}
