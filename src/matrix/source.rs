//! The `MatrixSource` trait and implementations for common carriers

use nalgebra::DMatrix;
use ndarray::Array2;

// =================================================================================================
// Matrix source trait
// =================================================================================================

/// Read-only access to a rectangular `f64` matrix by logical indices.
///
/// # Contract
///
/// - `rows() >= 0`, `cols() >= 0` (either may be zero)
/// - `value(row, col)` is defined for all `row < rows()`, `col < cols()`
/// - values may be non-finite (NaN/Inf); formatting decides how they render
///
/// The exporter borrows a source for the duration of one call and never
/// retains it afterward.
///
/// # Example
///
/// ```rust
/// use matwrite_rs::matrix::MatrixSource;
/// use nalgebra::DMatrix;
///
/// let m = DMatrix::from_row_slice(2, 2, &[1.0, 2.5, 3.0, 4.25]);
/// assert_eq!(MatrixSource::rows(&m), 2);
/// assert_eq!(MatrixSource::value(&m, 0, 1), 2.5);
/// ```
pub trait MatrixSource {
    /// Number of logical rows.
    fn rows(&self) -> usize;

    /// Number of logical columns.
    fn cols(&self) -> usize;

    /// Value at logical position `(row, col)`.
    ///
    /// # Panics
    ///
    /// May panic if `row >= rows()` or `col >= cols()`.
    fn value(&self, row: usize, col: usize) -> f64;
}

// =================================================================================================
// Ecosystem carrier implementations
// =================================================================================================

impl MatrixSource for DMatrix<f64> {
    fn rows(&self) -> usize {
        self.nrows()
    }

    fn cols(&self) -> usize {
        self.ncols()
    }

    fn value(&self, row: usize, col: usize) -> f64 {
        self[(row, col)]
    }
}

impl MatrixSource for Array2<f64> {
    fn rows(&self) -> usize {
        self.nrows()
    }

    fn cols(&self) -> usize {
        self.ncols()
    }

    fn value(&self, row: usize, col: usize) -> f64 {
        self[[row, col]]
    }
}

/// Nested-vector matrices are assumed rectangular: every inner vector must
/// have the same length as the first. `cols()` reports the first row's length.
impl MatrixSource for Vec<Vec<f64>> {
    fn rows(&self) -> usize {
        self.len()
    }

    fn cols(&self) -> usize {
        self.first().map_or(0, Vec::len)
    }

    fn value(&self, row: usize, col: usize) -> f64 {
        self[row][col]
    }
}
