//! Assertion utilities for testing.
//!
//! This module provides helper functions for making assertions in tests,
//! particularly for floating-point and grid comparisons.

use regrid::Grid;

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Arguments
///
/// * `actual` - The actual value
/// * `expected` - The expected value
/// * `epsilon` - The maximum allowed difference (default: 1e-9)
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that two grids are element-wise approximately equal.
///
/// # Panics
///
/// Panics if the grids have different shapes or if any element-wise
/// comparison fails.
pub fn assert_grid_approx_eq(actual: &Grid, expected: &Grid, epsilon: Option<f64>) {
    assert_eq!(
        actual.shape(),
        expected.shape(),
        "Grids have different shapes: actual = {:?}, expected = {:?}",
        actual.shape(),
        expected.shape()
    );

    let eps = epsilon.unwrap_or(DEFAULT_EPSILON);
    for y in 0..actual.height() {
        for x in 0..actual.width() {
            let a = actual.get(y, x);
            let e = expected.get(y, x);
            let diff = (a - e).abs();

            assert!(
                diff <= eps,
                "Grids differ at ({}, {}): actual = {}, expected = {}, diff = {}, epsilon = {}",
                y,
                x,
                a,
                e,
                diff,
                eps
            );
        }
    }
}

/// Assert that every grid value lies within expected bounds.
///
/// # Panics
///
/// Panics if any value is less than `min` or greater than `max`.
pub fn assert_grid_within_bounds(grid: &Grid, min: f64, max: f64) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let value = grid.get(y, x);
            assert!(
                value >= min && value <= max,
                "Value out of bounds at ({}, {}): {} not in [{}, {}]",
                y,
                x,
                value,
                min,
                max
            );
        }
    }
}
