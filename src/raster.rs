//! Polygon scan-fill on a discrete grid.
//!
//! A cell `(r, c)` belongs to the polygon when its index position lies on the
//! outline (a vertex or any point of an edge) or when a ray from it crosses the
//! outline an odd number of times. The boundary is inclusive on every side, so
//! the footprint does not depend on which axis is called the row, and a
//! polygon and its transpose rasterize to transposed footprints. This is the
//! rule of the `polygon` routine of scikit-image's `draw` module.
//!
//! Outlines enclosing no area (fewer than three distinct vertices, or all of
//! them on one line) fill nothing.

use ndarray::parallel::prelude::*;
use ndarray::{s, Array2, Axis};

/// Whether the integer point `(row, col)` lies on the segment `a -> b`.
///
/// Exact in `i128`; products that do not fit are treated as off the segment.
fn on_segment(a: [i64; 2], b: [i64; 2], row: i64, col: i64) -> bool {
    let within = |p: i64, q: i64, v: i64| p.min(q) <= v && v <= p.max(q);
    if !within(a[0], b[0], row) || !within(a[1], b[1], col) {
        return false;
    }
    let d_row = b[0] as i128 - a[0] as i128;
    let d_col = b[1] as i128 - a[1] as i128;
    let lhs = d_row.checked_mul(col as i128 - a[1] as i128);
    let rhs = d_col.checked_mul(row as i128 - a[0] as i128);
    matches!((lhs, rhs), (Some(l), Some(r)) if l == r)
}

/// Twice the signed area of the outline, `None` if it does not fit in `i128`.
fn doubled_area(vertices: &[[i64; 2]]) -> Option<i128> {
    let n = vertices.len();
    (0..n).try_fold(0i128, |acc, i| {
        let [r_i, c_i] = vertices[i];
        let [r_j, c_j] = vertices[(i + 1) % n];
        let term = (r_i as i128 * c_j as i128).checked_sub(r_j as i128 * c_i as i128)?;
        acc.checked_add(term)
    })
}

/// Tests the point `(row, col)` against a closed outline, boundary included.
///
/// Vertices are `[row, col]` pairs, the outline closes from the last vertex back
/// to the first. Points off the outline are classified by the crossing number,
/// counted with a half-open rule on the row axis so that horizontal edges and
/// vertices shared by two edges are never counted twice.
pub fn point_in_polygon(vertices: &[[i64; 2]], row: i64, col: i64) -> bool {
    let mut j = match vertices.len() {
        0 => return false,
        n => n - 1,
    };
    let mut inside = false;
    for (i, &v_i) in vertices.iter().enumerate() {
        let v_j = vertices[j];
        if on_segment(v_i, v_j, row, col) {
            return true;
        }
        let ([r_i, c_i], [r_j, c_j]) = (v_i.map(|x| x as f64), v_j.map(|x| x as f64));
        let (y, x) = (row as f64, col as f64);
        if ((r_i <= y && y < r_j) || (r_j <= y && y < r_i))
            && x < (c_j - c_i) * (y - r_i) / (r_j - r_i) + c_i
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Sets every cell of `grid` covered by the polygon to `value`.
///
/// Vertices may lie anywhere, including at negative indices or past the grid
/// edge; only the part of the polygon's bounding box inside the grid is visited.
pub fn fill_polygon(grid: &mut Array2<f32>, vertices: &[[i64; 2]], value: f32) {
    let (rows, cols) = grid.dim();
    if vertices.len() < 3 || rows == 0 || cols == 0 || doubled_area(vertices) == Some(0) {
        return;
    }

    let bounds = |axis: usize, extent: usize| {
        let lo = vertices.iter().map(|v| v[axis]).min().unwrap_or(0).max(0);
        let hi = vertices
            .iter()
            .map(|v| v[axis])
            .max()
            .unwrap_or(-1)
            .min(extent as i64 - 1);
        (lo, hi)
    };
    let (min_r, max_r) = bounds(0, rows);
    let (min_c, max_c) = bounds(1, cols);
    if min_r > max_r || min_c > max_c {
        return;
    }

    let mut window = grid.slice_mut(s![
        min_r as usize..=max_r as usize,
        min_c as usize..=max_c as usize
    ]);
    window
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, mut line)| {
            let row = min_r + i as i64;
            for (j, cell) in line.iter_mut().enumerate() {
                if point_in_polygon(vertices, row, min_c + j as i64) {
                    *cell = value;
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::RangeInclusive;

    fn zero_cells(grid: &Array2<f32>) -> Vec<(usize, usize)> {
        grid.indexed_iter()
            .filter(|(_, v)| **v == 0.0)
            .map(|(idx, _)| idx)
            .collect()
    }

    fn block(rows: RangeInclusive<usize>, cols: RangeInclusive<usize>) -> Vec<(usize, usize)> {
        rows.flat_map(|r| cols.clone().map(move |c| (r, c))).collect()
    }

    #[test]
    fn test_point_in_polygon_includes_boundary() {
        let square = [[1, 1], [1, 3], [3, 3], [3, 1]];
        assert!(point_in_polygon(&square, 2, 2));
        for &(r, c) in &[(1, 1), (1, 2), (2, 1), (3, 2), (2, 3), (3, 3), (3, 1), (1, 3)] {
            assert!(point_in_polygon(&square, r, c), "({r}, {c})");
        }
        assert!(!point_in_polygon(&square, 0, 0));
        assert!(!point_in_polygon(&square, 4, 2));
        assert!(!point_in_polygon(&square, 2, 4));
        assert!(!point_in_polygon(&[], 0, 0));
    }

    #[test]
    fn test_fill_square_covers_all_four_sides() {
        let mut grid = Array2::<f32>::ones((6, 6));
        fill_polygon(&mut grid, &[[1, 1], [4, 1], [4, 4], [1, 4]], 0.0);
        assert_eq!(zero_cells(&grid), block(1..=4, 1..=4));
    }

    #[test]
    fn test_fill_axis_aligned_rectangle() {
        let mut grid = Array2::<f32>::ones((6, 6));
        fill_polygon(&mut grid, &[[1, 2], [4, 2], [4, 5], [1, 5]], 0.0);
        assert_eq!(zero_cells(&grid), block(1..=4, 2..=5));
    }

    #[test]
    fn test_fill_rotated_square() {
        let mut grid = Array2::<f32>::ones((8, 8));
        fill_polygon(&mut grid, &[[2, 1], [5, 4], [4, 5], [1, 2]], 0.0);
        assert_eq!(
            zero_cells(&grid),
            vec![
                (1, 2),
                (2, 1),
                (2, 2),
                (2, 3),
                (3, 2),
                (3, 3),
                (3, 4),
                (4, 3),
                (4, 4),
                (4, 5),
                (5, 4)
            ]
        );
    }

    #[test]
    fn test_fill_transposed_outline_gives_transposed_footprint() {
        let outlines: [&[[i64; 2]]; 3] = [
            &[[8, 6], [4, 15], [2, 14], [6, 5]],
            &[[6, 9], [13, 1], [16, 4], [9, 11]],
            &[[0, 0], [9, 3], [5, 12]],
        ];
        for outline in outlines {
            let swapped: Vec<[i64; 2]> = outline.iter().map(|&[r, c]| [c, r]).collect();
            let mut a = Array2::<f32>::ones((16, 16));
            let mut b = Array2::<f32>::ones((16, 16));
            fill_polygon(&mut a, outline, 0.0);
            fill_polygon(&mut b, &swapped, 0.0);
            assert_eq!(a.t(), b);
        }
    }

    #[test]
    fn test_fill_clips_outside_vertices() {
        let mut grid = Array2::<f32>::ones((4, 5));
        fill_polygon(&mut grid, &[[-10, -10], [-10, 20], [20, 20], [20, -10]], 0.0);
        assert!(grid.iter().all(|&v| v == 0.0));

        let mut grid = Array2::<f32>::ones((4, 5));
        fill_polygon(&mut grid, &[[2, 3], [2, 40], [30, 40], [30, 3]], 0.0);
        assert_eq!(zero_cells(&grid), block(2..=3, 3..=4));

        // a sliver spanning the whole i64 range: its long edge is column 0
        let mut grid = Array2::<f32>::ones((4, 4));
        fill_polygon(&mut grid, &[[i64::MIN, 0], [i64::MAX, 0], [0, 1]], 0.0);
        assert_eq!(
            zero_cells(&grid),
            vec![(0, 0), (0, 1), (1, 0), (2, 0), (3, 0)]
        );
    }

    #[test]
    fn test_fill_polygon_entirely_outside() {
        let mut grid = Array2::<f32>::ones((4, 4));
        fill_polygon(&mut grid, &[[10, 10], [10, 12], [12, 12], [12, 10]], 0.0);
        fill_polygon(&mut grid, &[[-5, -5], [-5, -2], [-2, -2], [-2, -5]], 0.0);
        assert!(grid.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_degenerate_outlines_fill_nothing() {
        let mut grid = Array2::<f32>::ones((5, 5));
        fill_polygon(&mut grid, &[[1, 1], [3, 3]], 0.0);
        fill_polygon(&mut grid, &[[1, 1], [3, 3], [3, 3], [1, 1]], 0.0);
        fill_polygon(&mut grid, &[[0, 1], [2, 1], [4, 1]], 0.0);
        assert!(grid.iter().all(|&v| v == 1.0));

        let mut empty = Array2::<f32>::ones((0, 3));
        fill_polygon(&mut empty, &[[0, 0], [0, 2], [2, 2]], 0.0);
        assert_eq!(empty.dim(), (0, 3));
    }
}
