//! Delimited text export
//!
//! Writes a matrix to a plain-text file, one matrix row per line, values
//! rendered through a printf-style template and separated by a caller-chosen
//! delimiter. The produced format is deliberately bare: no header, no
//! trailing delimiter, no quoting or escaping. Picking a delimiter that
//! cannot collide with the formatted values is the caller's responsibility.
//!
//! # Guarantees
//!
//! - the file handle is closed on every exit path (completion, cancellation,
//!   write failure)
//! - cancellation takes effect only between rows; the file always holds a
//!   prefix of *complete* lines
//! - on normal completion the file holds exactly `rows` lines of `cols`
//!   delimited values each
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use matwrite_rs::export::{export_matrix, WriteMode};
//! use nalgebra::DMatrix;
//!
//! let matrix = DMatrix::from_row_slice(2, 2, &[1.0, 2.5, 3.0, 4.25]);
//! export_matrix("out.csv", &matrix, "%.2f", ";", WriteMode::Truncate)?;
//! // out.csv now contains "1.00;2.50\n3.00;4.25\n"
//! # Ok::<(), matwrite_rs::export::ExportError>(())
//! ```

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::cancel::{CancelProbe, NeverCancel};
use crate::format::ValueFormat;
use crate::matrix::MatrixSource;

use super::Exporter;

// =================================================================================================
// Write mode
// =================================================================================================

/// File-open semantics for the target path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteMode {
    /// Create the file if missing, discard existing content.
    Truncate,

    /// Create the file if missing, keep existing content and write at the end.
    Append,
}

/// Unrecognized write-mode string.
#[derive(Debug, Error)]
#[error("unrecognized write mode '{0}' (expected 'truncate'/'w'/'w+' or 'append'/'a'/'a+')")]
pub struct ParseWriteModeError(pub String);

impl FromStr for WriteMode {
    type Err = ParseWriteModeError;

    /// Accepts the spelled-out names and the fopen-style shorthands
    /// numerical environments traditionally use (`"w+"` to rewrite,
    /// `"a+"` to append).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "truncate" | "w" | "w+" => Ok(WriteMode::Truncate),
            "append" | "a" | "a+" => Ok(WriteMode::Append),
            other => Err(ParseWriteModeError(other.to_string())),
        }
    }
}

// =================================================================================================
// Export specification
// =================================================================================================

/// Value bundle describing one export: target path, per-value format,
/// field delimiter and write mode. All four are mandatory; there are no
/// defaults.
#[derive(Clone, Debug)]
pub struct ExportSpec {
    /// Target file path.
    pub path: PathBuf,

    /// Per-value format template, parsed once at construction.
    pub format: ValueFormat,

    /// String inserted between consecutive values on a row (`cols - 1` times
    /// per row). Commonly one character, but any string is accepted.
    pub delimiter: String,

    /// Truncating vs appending open semantics.
    pub mode: WriteMode,
}

impl ExportSpec {
    /// Build a spec, parsing `template` into a [`ValueFormat`].
    pub fn new(
        path: impl Into<PathBuf>,
        template: &str,
        delimiter: impl Into<String>,
        mode: WriteMode,
    ) -> Self {
        Self {
            path: path.into(),
            format: ValueFormat::parse(template),
            delimiter: delimiter.into(),
            mode,
        }
    }
}

// =================================================================================================
// Outcome and errors
// =================================================================================================

/// How an export finished.
///
/// Cancellation is a normal outcome, not an error: the file holds a valid
/// prefix of complete rows and has been properly closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// All rows written.
    Completed {
        /// Equal to the matrix row count.
        rows_written: usize,
    },

    /// Cancellation observed between rows; iteration stopped early.
    Cancelled {
        /// Complete rows present in the file.
        rows_written: usize,
    },
}

impl ExportOutcome {
    /// Complete rows present in the file, whichever way the export ended.
    pub fn rows_written(&self) -> usize {
        match *self {
            ExportOutcome::Completed { rows_written } | ExportOutcome::Cancelled { rows_written } => {
                rows_written
            }
        }
    }

    /// Whether the export stopped on a cancellation request.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ExportOutcome::Cancelled { .. })
    }
}

/// Failures of a delimited-text export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Target path could not be opened under the requested mode. Fatal,
    /// nothing has been written.
    #[error("failed to open '{path}' for writing: {source}")]
    Open {
        /// The path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A write failed mid-export. The file has been closed and holds
    /// `rows_written` complete rows (later rows may be partially flushed by
    /// the operating system; the count is what this exporter completed).
    #[error("write failed after {rows_written} complete rows: {source}")]
    Write {
        /// Complete rows handed to the writer before the failure.
        rows_written: usize,
        /// Underlying I/O error.
        source: io::Error,
    },
}

// =================================================================================================
// Exporter
// =================================================================================================

/// Delimited-text matrix exporter.
///
/// Stateless between calls; each call exclusively owns its file handle for
/// the duration of the export. Concurrent exports to *different* paths are
/// independent; concurrent exports to the same path race at the filesystem
/// level and must be avoided by the caller.
#[derive(Clone, Debug)]
pub struct DelimitedTextExporter {
    /// Output buffer size in bytes.
    buffer_capacity: usize,
}

impl Default for DelimitedTextExporter {
    fn default() -> Self {
        Self {
            buffer_capacity: 64 * 1024,
        }
    }
}

impl DelimitedTextExporter {
    /// Exporter with the default output buffer (64 KiB).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set the output buffer capacity.
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }
}

impl Exporter for DelimitedTextExporter {
    type Error = ExportError;

    fn export(
        &self,
        matrix: &dyn MatrixSource,
        spec: &ExportSpec,
        cancel: &dyn CancelProbe,
    ) -> Result<ExportOutcome, ExportError> {
        let file = open_output(&spec.path, spec.mode).map_err(|source| ExportError::Open {
            path: spec.path.clone(),
            source,
        })?;
        let mut out = BufWriter::with_capacity(self.buffer_capacity, file);

        let rows = matrix.rows();
        let cols = matrix.cols();

        for row in 0..rows {
            write_row(&mut out, matrix, row, cols, spec).map_err(|source| ExportError::Write {
                rows_written: row,
                source,
            })?;

            if cancel.is_cancelled() {
                let rows_written = row + 1;
                out.flush().map_err(|source| ExportError::Write {
                    rows_written,
                    source,
                })?;
                log::warn!(
                    "export of '{}' cancelled after {} of {} rows",
                    spec.path.display(),
                    rows_written,
                    rows
                );
                return Ok(ExportOutcome::Cancelled { rows_written });
            }
        }

        out.flush().map_err(|source| ExportError::Write {
            rows_written: rows,
            source,
        })?;

        Ok(ExportOutcome::Completed { rows_written: rows })
    }
}

fn open_output(path: &Path, mode: WriteMode) -> io::Result<File> {
    let mut options = OpenOptions::new();
    match mode {
        WriteMode::Truncate => options.write(true).create(true).truncate(true),
        WriteMode::Append => options.append(true).create(true),
    };
    options.open(path)
}

fn write_row(
    out: &mut impl Write,
    matrix: &dyn MatrixSource,
    row: usize,
    cols: usize,
    spec: &ExportSpec,
) -> io::Result<()> {
    for col in 0..cols {
        out.write_all(spec.format.apply(matrix.value(row, col)).as_bytes())?;
        if col + 1 < cols {
            out.write_all(spec.delimiter.as_bytes())?;
        }
    }
    out.write_all(b"\n")
}

// =================================================================================================
// Convenience entry point
// =================================================================================================

/// One-call export with no cancellation channel.
///
/// Argument order matches the classic call
/// `(filename, matrix, format, delimiter, writemode)`, so existing call
/// sites translate one-to-one.
///
/// # Example
///
/// ```rust,no_run
/// use matwrite_rs::export::{export_matrix, WriteMode};
///
/// let matrix = vec![vec![1.0, 2.5], vec![3.0, 4.25]];
/// export_matrix("out.csv", &matrix, "%10.6f", ",", WriteMode::Truncate)?;
/// # Ok::<(), matwrite_rs::export::ExportError>(())
/// ```
pub fn export_matrix(
    path: impl Into<PathBuf>,
    matrix: &dyn MatrixSource,
    template: &str,
    delimiter: &str,
    mode: WriteMode,
) -> Result<ExportOutcome, ExportError> {
    let spec = ExportSpec::new(path, template, delimiter, mode);
    DelimitedTextExporter::default().export(matrix, &spec, &NeverCancel)
}

// =================================================================================================
// Tests
// =================================================================================================
