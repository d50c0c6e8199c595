//! Borrowed flat-slice matrix views
//!
//! A `SliceMatrix` wraps a caller-owned `&[f64]` buffer together with its
//! logical shape and memory layout. Both layouts expose identical logical
//! indexing, so an export produces the same file regardless of how the
//! caller's buffer is laid out.

use thiserror::Error;

use super::source::MatrixSource;

/// Memory layout of a flat matrix buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryOrder {
    /// `buffer[row * cols + col]` (C / ndarray convention).
    RowMajor,

    /// `buffer[row + col * rows]` (Fortran / MATLAB / nalgebra convention).
    ColumnMajor,
}

/// Shape mismatch between a flat buffer and its declared dimensions.
#[derive(Debug, Error)]
#[error("buffer of length {len} cannot hold a {rows}x{cols} matrix (expected {expected} values)")]
pub struct ShapeError {
    /// Actual buffer length.
    pub len: usize,
    /// Declared row count.
    pub rows: usize,
    /// Declared column count.
    pub cols: usize,
    /// `rows * cols`.
    pub expected: usize,
}

/// Borrowed view of a flat `f64` buffer as a `rows x cols` matrix.
///
/// # Example
///
/// ```rust
/// use matwrite_rs::matrix::{MatrixSource, SliceMatrix};
///
/// // Same logical matrix, two layouts:
/// let row_major = SliceMatrix::row_major(&[1.0, 2.0, 3.0, 4.0], 2, 2)?;
/// let col_major = SliceMatrix::column_major(&[1.0, 3.0, 2.0, 4.0], 2, 2)?;
///
/// assert_eq!(row_major.value(0, 1), col_major.value(0, 1));
/// # Ok::<(), matwrite_rs::matrix::ShapeError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SliceMatrix<'a> {
    data: &'a [f64],
    rows: usize,
    cols: usize,
    order: MemoryOrder,
}

impl<'a> SliceMatrix<'a> {
    /// View `data` as a `rows x cols` matrix with the given layout.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if `data.len() != rows * cols`.
    pub fn new(
        data: &'a [f64],
        rows: usize,
        cols: usize,
        order: MemoryOrder,
    ) -> Result<Self, ShapeError> {
        let expected = rows * cols;
        if data.len() != expected {
            return Err(ShapeError {
                len: data.len(),
                rows,
                cols,
                expected,
            });
        }

        Ok(Self {
            data,
            rows,
            cols,
            order,
        })
    }

    /// Row-major view (`data[row * cols + col]`).
    pub fn row_major(data: &'a [f64], rows: usize, cols: usize) -> Result<Self, ShapeError> {
        Self::new(data, rows, cols, MemoryOrder::RowMajor)
    }

    /// Column-major view (`data[row + col * rows]`).
    pub fn column_major(data: &'a [f64], rows: usize, cols: usize) -> Result<Self, ShapeError> {
        Self::new(data, rows, cols, MemoryOrder::ColumnMajor)
    }

    /// Layout of the underlying buffer.
    pub fn order(&self) -> MemoryOrder {
        self.order
    }
}

impl MatrixSource for SliceMatrix<'_> {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn value(&self, row: usize, col: usize) -> f64 {
        match self.order {
            MemoryOrder::RowMajor => self.data[row * self.cols + col],
            MemoryOrder::ColumnMajor => self.data[row + col * self.rows],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_expose_same_logical_matrix() {
        // logical [[1 2 3], [4 5 6]]
        let rm = SliceMatrix::row_major(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        let cm = SliceMatrix::column_major(&[1.0, 4.0, 2.0, 5.0, 3.0, 6.0], 2, 3).unwrap();

        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(rm.value(row, col), cm.value(row, col));
            }
        }
        assert_eq!(rm.value(1, 2), 6.0);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = SliceMatrix::row_major(&[1.0, 2.0, 3.0], 2, 2).unwrap_err();

        assert_eq!(err.len, 3);
        assert_eq!(err.expected, 4);
        assert!(err.to_string().contains("2x2"));
    }

    #[test]
    fn zero_sized_views_are_valid() {
        let empty: &[f64] = &[];

        let none = SliceMatrix::row_major(empty, 0, 0).unwrap();
        assert_eq!(none.rows(), 0);
        assert_eq!(none.cols(), 0);

        // 3x0 and 0x3 both hold zero values
        assert!(SliceMatrix::row_major(empty, 3, 0).is_ok());
        assert!(SliceMatrix::column_major(empty, 0, 3).is_ok());
    }
}
