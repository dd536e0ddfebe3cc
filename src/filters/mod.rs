//! Masks applied to the Fourier transform of an off-axis hologram.
//!
//! # Filter Implementations
//!
//! Each filter implements the `Filter` trait defined in the `filter` module,
//! providing a consistent interface for configuration, mask construction and
//! application to a spectrum.

/// Circular sideband aperture with a smooth edge.
pub mod aperture;

/// Core filter interfaces and shared components.
/// Defines the `Filter` trait, the `FilterStack` and `apply_mask`.
pub mod filter;

/// Removes the Fresnel fringes of the biprism by blocking a rotated rectangle
/// between the image center and the sideband.
pub mod line_filter;
