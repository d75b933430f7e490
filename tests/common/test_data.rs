//! Test data generation utilities.
//!
//! This module provides functions to generate grids with known data patterns
//! for testing the interpolation engine.

use regrid::Grid;

/// Create a checkerboard grid of alternating 0/1 cells.
pub fn checkerboard(height: usize, width: usize) -> Grid {
    Grid::from_shape_fn(height, width, |(y, x)| ((y + x) % 2) as f64)
        .expect("test grid dimensions are non-zero")
}

/// Create a grid where every cell holds the same value.
pub fn uniform(height: usize, width: usize, value: f64) -> Grid {
    Grid::from_shape_fn(height, width, |_| value).expect("test grid dimensions are non-zero")
}

/// Create a grid with a linear gradient along both axes.
///
/// Values increase by 1 per column and by `width` per row, so every row and
/// every column is an affine sequence that every interpolation method must
/// reproduce exactly.
pub fn gradient(height: usize, width: usize) -> Grid {
    Grid::from_shape_fn(height, width, |(y, x)| (y * width + x) as f64)
        .expect("test grid dimensions are non-zero")
}
