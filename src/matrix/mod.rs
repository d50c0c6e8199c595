//! Matrix data seam
//!
//! This module defines the core API for matrix inputs:
//! - `MatrixSource`: trait for anything the exporter can read values from
//! - `SliceMatrix`: borrowed view over a flat `&[f64]` buffer
//! - `MemoryOrder`: row-major vs column-major layout of flat buffers
//!
//! # Design Philosophy
//!
//! The exporter only ever asks three questions of a matrix: how many rows,
//! how many columns, and what value sits at logical position `(row, col)`.
//! Memory layout is an implementation detail of the *source*, never of the
//! export contract, so the trait speaks logical indices exclusively.
//!
//! Implementations are provided for the carriers this crate's ecosystem
//! actually uses:
//!
//! | Carrier                  | Storage       | Module      |
//! |--------------------------|---------------|-------------|
//! | `nalgebra::DMatrix<f64>` | column-major  | [`source`]  |
//! | `ndarray::Array2<f64>`   | row-major     | [`source`]  |
//! | `Vec<Vec<f64>>`          | nested rows   | [`source`]  |
//! | `SliceMatrix<'_>`        | caller-chosen | [`views`]   |

pub mod source;
pub mod views;

pub use source::MatrixSource;
pub use views::{MemoryOrder, ShapeError, SliceMatrix};
