//! Error types for mask construction.

use thiserror::Error;

/// Result type alias using [`MaskError`].
pub type MaskResult<T> = Result<T, MaskError>;

/// Errors raised while validating mask parameters or applying a mask.
///
/// Corner coordinates falling outside the grid are not an error, the rasterizer
/// clips them silently.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaskError {
    #[error("invalid grid size {rows}x{cols}: both dimensions must be positive")]
    InvalidGridSize { rows: usize, cols: usize },

    #[error("invalid rectangle (width {width}, length {length}): both must be finite and positive")]
    InvalidRectangleDimension { width: f64, length: f64 },

    #[error("non-finite sideband position ({row}, {col})")]
    NonFiniteCoordinate { row: f64, col: f64 },

    #[error("invalid aperture (radius {radius}, smoothness {smoothness})")]
    InvalidAperture { radius: f64, smoothness: f64 },

    #[error("mask shape {expected:?} does not match spectrum shape {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}
