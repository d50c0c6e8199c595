//! matwrite-rs: Matrix-to-Delimited-Text Export Framework
//!
//! Writes numeric matrices to delimited text files, one matrix row per line,
//! each value rendered through a caller-supplied printf-style template.
//!
//! # Architecture
//!
//! matwrite-rs is built on two core principles:
//!
//! 1. **Separation of data and output**
//!    - Matrix sources define WHERE values come from (logical indexing)
//!    - Exporters define HOW values reach the filesystem
//!
//! 2. **Extensibility and type safety**
//!    - Trait-based seams (`MatrixSource`, `Exporter`, `CancelProbe`)
//!    - Typed errors per concern
//!    - Cooperative, between-rows-only cancellation
//!
//! ```text
//! src/
//! ├── matrix/     ← matrix data seam (nalgebra, ndarray, slices)
//! ├── format/     ← printf-style per-value templates
//! ├── export/     ← exporters (delimited text)
//! └── cancel.rs   ← cooperative cancellation probe
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use matwrite_rs::export::{export_matrix, WriteMode};
//! use nalgebra::DMatrix;
//!
//! // 1. Any matrix carrier with logical (row, col) indexing
//! let matrix = DMatrix::from_row_slice(2, 2, &[1.0, 2.5, 3.0, 4.25]);
//!
//! // 2. One call: path, matrix, value format, delimiter, write mode
//! export_matrix("out.csv", &matrix, "%10.6f", ",", WriteMode::Truncate)?;
//! # Ok::<(), matwrite_rs::export::ExportError>(())
//! ```
//!
//! With cancellation, through the full exporter interface:
//!
//! ```rust,no_run
//! use matwrite_rs::cancel::CancelToken;
//! use matwrite_rs::export::{DelimitedTextExporter, Exporter, ExportSpec, WriteMode};
//!
//! let matrix = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
//! let spec = ExportSpec::new("out.csv", "%.6e", ";", WriteMode::Append);
//!
//! let cancel = CancelToken::new();
//! // hand `cancel.clone()` to whoever may interrupt the export
//!
//! let outcome = DelimitedTextExporter::default().export(&matrix, &spec, &cancel)?;
//! if outcome.is_cancelled() {
//!     println!("stopped early after {} complete rows", outcome.rows_written());
//! }
//! # Ok::<(), matwrite_rs::export::ExportError>(())
//! ```
//!
//! # File format
//!
//! Plain text. One line per matrix row, values separated by the delimiter,
//! `"\n"` line terminator, no header, no trailing delimiter, no quoting.
//! The caller picks a delimiter that cannot appear in the formatted values.
//!
//! # Modules
//!
//! - [`matrix`]: Matrix sources (logical indexing over common carriers)
//! - [`format`]: printf-style value templates
//! - [`export`]: Exporter trait and the delimited-text implementation
//! - [`cancel`]: Cooperative cancellation

pub mod cancel;
pub mod export;
pub mod format;
pub mod matrix;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use matwrite_rs::prelude::*;
    //! ```
    pub use crate::cancel::{CancelProbe, CancelToken, NeverCancel};
    pub use crate::export::{
        export_matrix, DelimitedTextExporter, ExportError, ExportOutcome, ExportSpec, Exporter,
        WriteMode,
    };
    pub use crate::format::ValueFormat;
    pub use crate::matrix::{MatrixSource, MemoryOrder, SliceMatrix};
}
