use crate::error::{MaskError, MaskResult};
use crate::filters::aperture::ApertureFilter;
use crate::filters::line_filter::LineFilter;
use serde::{Deserialize, Serialize};

/// How mask builders react to parameters outside their valid range.
///
/// `Strict` rejects them before any computation. `Permissive` lets them through
/// unchanged and produces whatever the geometry yields (e.g. an all-ones mask for
/// a zero-width line), which keeps results comparable with unguarded reference
/// outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValidationPolicy {
    #[default]
    Strict,
    Permissive,
}

impl ValidationPolicy {
    /// Returns the error produced by `err` under `Strict` when `valid` is false.
    /// Under `Permissive` the error is only logged.
    pub(crate) fn check(self, valid: bool, err: impl FnOnce() -> MaskError) -> MaskResult<()> {
        if valid {
            return Ok(());
        }
        let err = err();
        match self {
            ValidationPolicy::Strict => Err(err),
            ValidationPolicy::Permissive => {
                log::warn!("accepting invalid parameters: {err}");
                Ok(())
            }
        }
    }
}

/// Persistent settings of the line filter, independent of the sideband it is
/// later aimed at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineFilterSettings {
    pub width: f64,
    pub length: f64,
    pub policy: ValidationPolicy,
}

impl Default for LineFilterSettings {
    fn default() -> Self {
        LineFilterSettings {
            width: 10.0,
            length: 100.0,
            policy: ValidationPolicy::default(),
        }
    }
}

impl LineFilterSettings {
    /// Aims the configured line at `sideband_pos` (`[row, col]`).
    pub fn line_filter(&self, sideband_pos: [f64; 2]) -> LineFilter {
        LineFilter::new(sideband_pos, self.width, self.length).with_policy(self.policy)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApertureSettings {
    pub radius: f64,
    pub smoothness: f64,
    pub policy: ValidationPolicy,
}

impl Default for ApertureSettings {
    fn default() -> Self {
        ApertureSettings {
            radius: 20.0,
            smoothness: 2.0,
            policy: ValidationPolicy::default(),
        }
    }
}

impl ApertureSettings {
    pub fn aperture_filter(&self, sideband_pos: [f64; 2]) -> ApertureFilter {
        ApertureFilter::new(sideband_pos, self.radius, self.smoothness).with_policy(self.policy)
    }
}
