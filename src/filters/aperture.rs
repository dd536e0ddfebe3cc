use crate::config::ValidationPolicy;
use crate::error::{MaskError, MaskResult};
use crate::filters::filter::{Filter, FilterConfig};
use crate::math_tools::aperture_value;
use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};

/// Circular aperture around the sideband, with an optional smooth edge.
///
/// Distances are measured in pixels from `sideband_pos` to each cell index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApertureFilter {
    pub sideband_pos: [f64; 2],
    pub radius: f64,
    pub smoothness: f64,
    pub policy: ValidationPolicy,
}

impl ApertureFilter {
    pub fn new(sideband_pos: [f64; 2], radius: f64, smoothness: f64) -> Self {
        ApertureFilter {
            sideband_pos,
            radius,
            smoothness,
            policy: ValidationPolicy::Strict,
        }
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn validate(&self, size: (usize, usize)) -> MaskResult<()> {
        let (rows, cols) = size;
        self.policy.check(rows > 0 && cols > 0, || {
            MaskError::InvalidGridSize { rows, cols }
        })?;
        let non_negative = |v: f64| v.is_finite() && v >= 0.0;
        self.policy
            .check(non_negative(self.radius) && non_negative(self.smoothness), || {
                MaskError::InvalidAperture {
                    radius: self.radius,
                    smoothness: self.smoothness,
                }
            })?;
        let [row, col] = self.sideband_pos;
        self.policy
            .check(row.is_finite() && col.is_finite(), || {
                MaskError::NonFiniteCoordinate { row, col }
            })
    }
}

impl Filter for ApertureFilter {
    fn config(&self) -> FilterConfig {
        FilterConfig {
            name: "Sideband Aperture".to_string(),
            description: "Passes a circular region around the sideband with a half-sine roll-off."
                .to_string(),
        }
    }

    fn mask(&self, size: (usize, usize)) -> MaskResult<Array2<f32>> {
        self.validate(size)?;

        let [sb_row, sb_col] = self.sideband_pos;
        let mut mask = Array2::<f32>::zeros(size);
        Zip::indexed(&mut mask).par_for_each(|(r, c), m| {
            let distance = (r as f64 - sb_row).hypot(c as f64 - sb_col);
            *m = aperture_value(distance, self.radius, self.smoothness) as f32;
        });
        Ok(mask)
    }
}
