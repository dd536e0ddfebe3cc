//! Construction of the rotated rectangle used by the line filter.
//!
//! All points are `[row, col]` pairs in pixel units of the Fourier grid.

/// A point on the grid, `[row, col]`.
pub type Point = [f64; 2];

/// The point the sideband direction is measured from: one past the half size
/// in both axes, using real division (`(7, 8)` gives `[4.5, 5.0]`).
pub fn reference_center(size: (usize, usize)) -> Point {
    [size.0 as f64 / 2.0 + 1.0, size.1 as f64 / 2.0 + 1.0]
}

/// A rectangle of a given width and length, rotated onto the line connecting the
/// reference center and a sideband and centered halfway between them.
///
/// Note that the angle is taken as `atan2(d_row, d_col)` while the length axis
/// runs along `(cos, sin)` in `[row, col]` order, so the rectangle is mirrored on
/// the diagonal with respect to that line unless the sideband sits on a diagonal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedRectangle {
    pub angle: f64,
    pub center: Point,
    pub left_bottom: Point,
    pub right_bottom: Point,
    pub right_top: Point,
    pub left_top: Point,
}

impl RotatedRectangle {
    /// Builds the rectangle for a grid of `size` and a sideband at `sideband_pos`.
    ///
    /// A sideband exactly on the reference center gives `atan2(0, 0) = 0`.
    pub fn between(size: (usize, usize), sideband_pos: Point, width: f64, length: f64) -> Self {
        let reference = reference_center(size);
        let angle = (reference[0] - sideband_pos[0]).atan2(reference[1] - sideband_pos[1]);
        let center = [
            (reference[0] + sideband_pos[0]) / 2.0,
            (reference[1] + sideband_pos[1]) / 2.0,
        ];
        let (sin, cos) = angle.sin_cos();

        let left_bottom = [
            center[0] - length / 2.0 * cos + width / 2.0 * sin,
            center[1] - length / 2.0 * sin - width / 2.0 * cos,
        ];
        let right_bottom = [left_bottom[0] + cos * length, left_bottom[1] + sin * length];
        let left_top = [left_bottom[0] - sin * width, left_bottom[1] + cos * width];
        // opposite sides share the same offset vector
        let right_top = [
            right_bottom[0] + left_top[0] - left_bottom[0],
            right_bottom[1] + left_top[1] - left_bottom[1],
        ];

        RotatedRectangle {
            angle,
            center,
            left_bottom,
            right_bottom,
            right_top,
            left_top,
        }
    }

    /// Corners in outline order: left-bottom, right-bottom, right-top, left-top.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.left_bottom,
            self.right_bottom,
            self.right_top,
            self.left_top,
        ]
    }

    /// Corners truncated toward zero onto the integer grid.
    ///
    /// Truncation, not rounding, decides the rasterized footprint. Non-finite
    /// coordinates saturate (NaN maps to 0).
    pub fn truncated_corners(&self) -> [[i64; 2]; 4] {
        self.corners().map(|[r, c]| [r as i64, c as i64])
    }
}
