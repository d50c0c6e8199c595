//! Matrix export module.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export
//! format. Each format is an independent implementation in its own
//! sub-module. This design follows the **Open/Closed principle**: adding a
//! new format means adding a file, without ever modifying existing code.
//!
//! # Available formats
//!
//! | Format         | Module        | Version |
//! |----------------|---------------|---------|
//! | Delimited text | [`delimited`] | v0.1.0  |
//!
//! # Usage example
//!
//! ```rust,no_run
//! use matwrite_rs::cancel::CancelToken;
//! use matwrite_rs::export::{DelimitedTextExporter, Exporter, ExportSpec, WriteMode};
//! use nalgebra::DMatrix;
//!
//! let matrix = DMatrix::from_row_slice(2, 2, &[1.0, 2.5, 3.0, 4.25]);
//! let spec = ExportSpec::new("out.csv", "%10.6f", ",", WriteMode::Truncate);
//!
//! let exporter = DelimitedTextExporter::default();
//! let cancel = CancelToken::new();
//! let outcome = exporter.export(&matrix, &spec, &cancel)?;
//!
//! println!("wrote {} rows", outcome.rows_written());
//! # Ok::<(), matwrite_rs::export::ExportError>(())
//! ```

pub mod delimited;

// Re-export the most commonly used types at the module level so users can
// write `use matwrite_rs::export::{DelimitedTextExporter, ExportSpec}`
// instead of the full sub-module path.
pub use delimited::{
    export_matrix, DelimitedTextExporter, ExportError, ExportOutcome, ExportSpec,
    ParseWriteModeError, WriteMode,
};

use crate::cancel::CancelProbe;
use crate::matrix::MatrixSource;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type. This avoids
/// systematic boxing (`Box<dyn Error>`) and allows the caller to react
/// precisely based on the error type.
///
/// # Cancellation
///
/// Implementations poll `cancel` cooperatively, at a granularity of their
/// choosing (the delimited-text format polls once per output row). A
/// cancelled export is a normal outcome, not an error: the output holds a
/// valid prefix of the data and the file is properly closed.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Export a matrix to `spec.path` under `spec`'s format, delimiter and
    /// write mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be opened under the requested
    /// mode, or if a write fails mid-export.
    fn export(
        &self,
        matrix: &dyn MatrixSource,
        spec: &ExportSpec,
        cancel: &dyn CancelProbe,
    ) -> Result<ExportOutcome, Self::Error>;
}
