//! This module provides frequency grids and the smooth aperture function used to
//! cut a sideband out of a hologram's Fourier transform.

use ndarray::{Array1, Array2};
use num_traits::{Float, FloatConst};

/// Sample frequencies of a discrete Fourier transform of length `n` with sample
/// spacing `d`.
///
/// The implementation follows the convention of numpy's `fft.fftfreq`: positive
/// frequencies first, then the negative ones, i.e. `[0, 1, ..., ceil(n/2) - 1,
/// -floor(n/2), ..., -1] / (n * d)`.
pub fn fftfreq(n: usize, d: f64) -> Array1<f64> {
    let positive = n.div_ceil(2);
    Array1::from_shape_fn(n, |k| {
        let k = if k < positive {
            k as f64
        } else {
            k as f64 - n as f64
        };
        k / (n as f64 * d)
    })
}

/// Radial spatial frequency of every cell of an unshifted FFT of `shape`.
///
/// # Arguments
/// - `shape`: shape `(rows, cols)` of the transform.
/// - `sampling`: sample spacing `[row, col]` of the real-space image.
///
/// # Returns
/// An array of `shape` holding `hypot(f_col, f_row)` for every cell.
pub fn freq_array(shape: (usize, usize), sampling: [f64; 2]) -> Array2<f64> {
    let f_row = fftfreq(shape.0, sampling[0]);
    let f_col = fftfreq(shape.1, sampling[1]);
    Array2::from_shape_fn(shape, |(r, c)| f_col[c].hypot(f_row[r]))
}

/// Smooth aperture transmission at distance `r` from its center.
///
/// Fully open up to `radius - smoothness`, closed from `radius + smoothness`, with
/// a half-sine roll-off in between. A non-positive `smoothness` gives a hard edge
/// that is open up to and including `radius`.
pub fn aperture_value<F: Float + FloatConst>(r: F, radius: F, smoothness: F) -> F {
    if smoothness <= F::zero() {
        return if r <= radius { F::one() } else { F::zero() };
    }
    let two = F::one() + F::one();
    if r <= radius - smoothness {
        F::one()
    } else if r >= radius + smoothness {
        F::zero()
    } else {
        (F::one() - (F::PI() * (r - radius) / (two * smoothness)).sin()) / two
    }
}

/// Applies [`aperture_value`] to every element of a radius grid.
pub fn aperture_function<F: Float + FloatConst>(
    r: &Array2<F>,
    radius: F,
    smoothness: F,
) -> Array2<F> {
    r.mapv(|r| aperture_value(r, radius, smoothness))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fftfreq_even_and_odd() {
        assert_eq!(fftfreq(4, 1.0).to_vec(), vec![0.0, 0.25, -0.5, -0.25]);
        let odd = fftfreq(5, 0.5);
        let expected = [0.0, 0.4, 0.8, -0.8, -0.4];
        for (a, b) in odd.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
        assert_eq!(fftfreq(0, 1.0).len(), 0);
        assert_eq!(fftfreq(1, 1.0).to_vec(), vec![0.0]);
    }

    #[test]
    fn test_freq_array_radius() {
        let f = freq_array((4, 8), [1.0, 2.0]);
        assert_eq!(f.dim(), (4, 8));
        assert_eq!(f[[0, 0]], 0.0);
        assert_abs_diff_eq!(f[[1, 0]], 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(f[[0, 1]], 1.0 / 16.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f[[2, 4]], (0.5f64).hypot(0.25), epsilon = 1e-12);
        // negative frequencies mirror the positive ones
        assert_abs_diff_eq!(f[[3, 7]], f[[1, 1]], epsilon = 1e-12);
    }

    #[test]
    fn test_aperture_value_roll_off() {
        assert_eq!(aperture_value(0.0, 10.0, 2.0), 1.0);
        assert_eq!(aperture_value(8.0, 10.0, 2.0), 1.0);
        assert_eq!(aperture_value(12.0, 10.0, 2.0), 0.0);
        assert_eq!(aperture_value(30.0, 10.0, 2.0), 0.0);
        assert_abs_diff_eq!(aperture_value(10.0, 10.0, 2.0), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(
            aperture_value(9.0, 10.0, 2.0),
            0.5 * (1.0 + std::f64::consts::FRAC_1_SQRT_2),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(aperture_value(11.0f32, 10.0, 2.0), 0.146_446_6, epsilon = 1e-6);
    }

    #[test]
    fn test_aperture_value_hard_edge() {
        assert_eq!(aperture_value(10.0, 10.0, 0.0), 1.0);
        assert_eq!(aperture_value(10.000_1, 10.0, 0.0), 0.0);
        assert_eq!(aperture_value(3.0, 10.0, -1.0), 1.0);
    }

    #[test]
    fn test_aperture_function_is_monotonic() {
        let r = Array2::from_shape_fn((1, 40), |(_, c)| c as f64 * 0.5);
        let ap = aperture_function(&r, 10.0, 3.0);
        for pair in ap.as_slice().unwrap().windows(2) {
            assert!(pair[1] <= pair[0]);
        }
        assert!(ap.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }
}
