//! holo-masks: Fourier-space masks for off-axis electron holography.
//!
//! The crate builds masks that are multiplied onto the Fourier transform of a
//! hologram before reconstruction:
//!
//! 1. **Line filter**: blocks a rotated rectangle between the image center and
//!    the sideband to suppress the Fresnel fringes of the biprism wire.
//! 2. **Aperture**: passes a circular region around the sideband, optionally
//!    with a smooth edge.
//!
//! Computing the transform, locating the sideband and the reconstruction itself
//! are left to the caller. All mask builders are pure functions of their inputs.
//!
//! ```rust
//! use holo_masks::line_filter;
//!
//! let mask = line_filter((8, 8), [2.0, 2.0], 1.0, 4.0).unwrap();
//! assert_eq!(mask.dim(), (8, 8));
//! assert_eq!(mask.iter().filter(|&&v| v == 0.0).count(), 11);
//! ```

pub mod config;
pub mod error;
pub mod filters;
pub mod geometry;
pub mod math_tools;
pub mod raster;

pub use config::{ApertureSettings, LineFilterSettings, ValidationPolicy};
pub use error::{MaskError, MaskResult};
pub use filters::aperture::ApertureFilter;
pub use filters::filter::{apply_mask, Filter, FilterConfig, FilterStack};
pub use filters::line_filter::{line_filter, LineFilter};
pub use math_tools::{aperture_function, fftfreq, freq_array};
