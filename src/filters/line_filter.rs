use crate::config::ValidationPolicy;
use crate::error::{MaskError, MaskResult};
use crate::filters::filter::{Filter, FilterConfig};
use crate::geometry::RotatedRectangle;
use crate::raster::fill_polygon;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Builds the line filter mask removing the Fresnel fringes of the biprism.
///
/// # Arguments
/// - `size`: shape `(rows, cols)` of the hologram's FFT.
/// - `sideband_pos`: position `[row, col]` of the sideband used for reconstruction.
/// - `width`: width of the line (rectangle).
/// - `length`: length of the line (rectangle).
///
/// # Returns
/// A mask of shape `size` which is 1 everywhere except for the rasterized
/// rectangle, which is 0. Parameters are validated strictly, use [`LineFilter`]
/// with [`ValidationPolicy::Permissive`] for the unguarded behavior.
///
/// # Errors
/// - [`MaskError::InvalidGridSize`] if a dimension of `size` is zero.
/// - [`MaskError::InvalidRectangleDimension`] if `width` or `length` is not positive.
/// - [`MaskError::NonFiniteCoordinate`] if `sideband_pos` is not finite.
pub fn line_filter(
    size: (usize, usize),
    sideband_pos: [f64; 2],
    width: f64,
    length: f64,
) -> MaskResult<Array2<f32>> {
    LineFilter::new(sideband_pos, width, length).mask(size)
}

/// A rectangle of `width` x `length` pixels, oriented along the line between the
/// reference center of the grid and the sideband and centered halfway between
/// them, that is blocked in the mask.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineFilter {
    pub sideband_pos: [f64; 2],
    pub width: f64,
    pub length: f64,
    pub policy: ValidationPolicy,
}

impl LineFilter {
    pub fn new(sideband_pos: [f64; 2], width: f64, length: f64) -> Self {
        LineFilter {
            sideband_pos,
            width,
            length,
            policy: ValidationPolicy::Strict,
        }
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The unrasterized rectangle for a grid of `size`.
    pub fn rectangle(&self, size: (usize, usize)) -> RotatedRectangle {
        RotatedRectangle::between(size, self.sideband_pos, self.width, self.length)
    }

    fn validate(&self, size: (usize, usize)) -> MaskResult<()> {
        let (rows, cols) = size;
        self.policy.check(rows > 0 && cols > 0, || {
            MaskError::InvalidGridSize { rows, cols }
        })?;
        let positive = |v: f64| v.is_finite() && v > 0.0;
        self.policy
            .check(positive(self.width) && positive(self.length), || {
                MaskError::InvalidRectangleDimension {
                    width: self.width,
                    length: self.length,
                }
            })?;
        let [row, col] = self.sideband_pos;
        self.policy
            .check(row.is_finite() && col.is_finite(), || {
                MaskError::NonFiniteCoordinate { row, col }
            })
    }
}

impl Filter for LineFilter {
    fn config(&self) -> FilterConfig {
        FilterConfig {
            name: "Line Filter".to_string(),
            description: "Blocks a rotated rectangle between the image center and the sideband \
                          to remove Fresnel fringes of the biprism."
                .to_string(),
        }
    }

    fn mask(&self, size: (usize, usize)) -> MaskResult<Array2<f32>> {
        self.validate(size)?;

        let rectangle = self.rectangle(size);
        let corners = rectangle.truncated_corners();
        log::debug!(
            "line filter: angle {:.4} rad, center {:?}, corners {:?}",
            rectangle.angle,
            rectangle.center,
            corners
        );

        let mut mask = Array2::<f32>::ones(size);
        fill_polygon(&mut mask, &corners, 0.0);
        Ok(mask)
    }
}
