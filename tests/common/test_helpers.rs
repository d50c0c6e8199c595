//! Helper functions for integration tests

use std::cell::Cell;
use std::fs;
use std::path::Path;

use matwrite_rs::cancel::CancelProbe;

/// Read an exported file and split it into lines (terminators stripped).
///
/// A trailing terminator does not produce a phantom empty line, but interior
/// empty lines (zero-column rows) are preserved.
pub fn read_lines(path: &Path) -> Vec<String> {
    let content = fs::read_to_string(path).expect("exported file should be readable");
    if content.is_empty() {
        return Vec::new();
    }
    let trimmed = content.strip_suffix('\n').unwrap_or(&content);
    trimmed.split('\n').map(str::to_string).collect()
}

/// Parse exported content back into a matrix by splitting on the line
/// terminator and the delimiter.
pub fn parse_matrix(content: &str, delimiter: &str) -> Vec<Vec<f64>> {
    content
        .lines()
        .map(|line| {
            line.split(delimiter)
                .map(|token| {
                    token
                        .trim()
                        .parse::<f64>()
                        .unwrap_or_else(|_| panic!("unparsable token '{}'", token))
                })
                .collect()
        })
        .collect()
}

/// Probe that reports cancellation from its `after`-th poll onward.
///
/// The exporter polls once per completed row, so `CancelAfter::rows(k)`
/// stops an export with exactly `k` complete rows in the file.
pub struct CancelAfter {
    polls: Cell<usize>,
    after: usize,
}

impl CancelAfter {
    pub fn rows(after: usize) -> Self {
        Self {
            polls: Cell::new(0),
            after,
        }
    }
}

impl CancelProbe for CancelAfter {
    fn is_cancelled(&self) -> bool {
        self.polls.set(self.polls.get() + 1);
        self.polls.get() >= self.after
    }
}
