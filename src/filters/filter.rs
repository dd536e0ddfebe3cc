//! This module provides the `Filter` trait shared by all Fourier-space masks, the
//! `FilterStack` combining several of them, and `apply_mask` for multiplying a
//! mask onto a complex spectrum.

use crate::error::{MaskError, MaskResult};
use ndarray::{Array2, Zip};
use num_complex::Complex32;
use std::fmt::Debug;

/// The `Filter` trait defines a mask that can be evaluated on a Fourier grid of
/// any size.
///
/// Filters must implement:
/// - A `config` function to provide metadata about the filter.
/// - A `mask` function returning a mask of exactly the requested shape, with
///   values in `[0, 1]` (1 passes a frequency, 0 blocks it).
///
/// `apply` is provided and multiplies the mask onto a spectrum in place.
///
/// **Example**:
/// ```rust
/// use holo_masks::{Filter, LineFilter};
///
/// let filter = LineFilter::new([20.0, 24.0], 2.0, 30.0);
/// let mask = filter.mask((64, 64)).unwrap();
/// assert_eq!(mask.dim(), (64, 64));
/// ```
pub trait Filter: Send + Sync + Debug {
    /// Returns the filter configuration (name and description).
    fn config(&self) -> FilterConfig;

    /// Computes the mask for a grid of `size` (`(rows, cols)`).
    ///
    /// # Errors
    ///
    /// Returns an error if the filter parameters or the grid size are rejected by
    /// the filter's validation policy.
    fn mask(&self, size: (usize, usize)) -> MaskResult<Array2<f32>>;

    /// Multiplies the filter's mask onto `spectrum` in place.
    ///
    /// The spectrum is expected in the same layout the filter's coordinates refer
    /// to (typically shifted so the zero frequency sits near the center).
    fn apply(&self, spectrum: &mut Array2<Complex32>) -> MaskResult<()> {
        let mask = self.mask(spectrum.dim())?;
        apply_mask(&mask, spectrum)
    }
}

#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub name: String,
    pub description: String,
}

/// Multiplies `mask` onto `spectrum` element-wise.
///
/// # Errors
///
/// Returns [`MaskError::ShapeMismatch`] if the shapes differ.
pub fn apply_mask(mask: &Array2<f32>, spectrum: &mut Array2<Complex32>) -> MaskResult<()> {
    if mask.dim() != spectrum.dim() {
        return Err(MaskError::ShapeMismatch {
            expected: mask.dim(),
            found: spectrum.dim(),
        });
    }
    Zip::from(spectrum).and(mask).par_for_each(|s, &m| *s *= m);
    Ok(())
}

/// A product of several filters, e.g. a sideband aperture with the biprism line
/// removed from it.
///
/// An empty stack passes everything.
#[derive(Debug, Default)]
pub struct FilterStack {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn push(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Filter for FilterStack {
    fn config(&self) -> FilterConfig {
        let names: Vec<String> = self.filters.iter().map(|f| f.config().name).collect();
        FilterConfig {
            name: "Filter Stack".to_string(),
            description: format!("Product of: {}", names.join(", ")),
        }
    }

    fn mask(&self, size: (usize, usize)) -> MaskResult<Array2<f32>> {
        let mut combined = Array2::<f32>::ones(size);
        for filter in &self.filters {
            combined *= &filter.mask(size)?;
        }
        Ok(combined)
    }
}
