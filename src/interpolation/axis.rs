//! One-dimensional axis interpolation.
//!
//! Interpolates a value at a fractional position along one axis of a grid,
//! selecting a local 4-point window of integer-indexed samples. Window bounds
//! are computed with explicit clamped integer arithmetic; whenever fewer than
//! four samples are available the interpolation falls back to a linear blend
//! of the two nearest samples rather than evaluating an undersized basis.

use ndarray::ArrayView1;

use super::basis::{lagrange_interpolate, NaturalCubicSpline};
use super::Method;
use crate::error::{RegridError, Result};

/// Number of control points in a full interpolation window
const WINDOW: usize = 4;

/// Interpolate at fractional position `x` along an axis of samples.
///
/// Samples are indexed 0..N-1; `x` may be fractional and may lie outside the
/// sampled range. Full windows dispatch on `method`; degenerate axes and
/// edge-shrunken windows take the linear fallback.
pub fn interpolate_axis(values: ArrayView1<'_, f64>, x: f64, method: Method) -> Result<f64> {
    let n = values.len();
    if n == 0 {
        return Err(RegridError::DegenerateWindow {
            message: "cannot interpolate along an empty axis".to_string(),
        });
    }
    if n == 1 {
        return Ok(values[0]);
    }
    if n < WINDOW {
        return Ok(linear_fallback(values, x));
    }

    let (left, right) = window_bounds(x, n, method);
    if right - left + 1 < WINDOW {
        return Ok(linear_fallback(values, x));
    }

    let positions: Vec<f64> = (left..=right).map(|i| i as f64).collect();
    let window: Vec<f64> = (left..=right).map(|i| values[i]).collect();

    match method {
        Method::Lagrange => lagrange_interpolate(&positions, &window, x),
        Method::CubicSpline => {
            let spline = NaturalCubicSpline::fit(&positions, &window)?;
            Ok(spline.evaluate(x))
        }
    }
}

/// Select the clamped window `[left, right]` around `x` for an axis of
/// length `n`.
///
/// The anchor offset differs per method: the Lagrange window is centered one
/// sample left of `x`, the spline window two samples left, both clamped so
/// the window stays inside `[0, n-1]`.
fn window_bounds(x: f64, n: usize, method: Method) -> (usize, usize) {
    let anchor_offset: isize = match method {
        Method::Lagrange => 1,
        Method::CubicSpline => 2,
    };
    let left = (x.floor() as isize - anchor_offset).clamp(0, n as isize - 2) as usize;
    let right = (left + WINDOW - 1).min(n - 1);
    (left, right)
}

/// Linear blend between the two samples nearest to `x`.
///
/// Beyond either end of the axis the blend saturates to the nearest sample.
fn linear_fallback(values: ArrayView1<'_, f64>, x: f64) -> f64 {
    let n = values.len();
    let lower = (x.floor() as isize).clamp(0, n as isize - 2) as usize;
    let fraction = (x - lower as f64).clamp(0.0, 1.0);
    values[lower] + fraction * (values[lower + 1] - values[lower])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    fn axis(values: &[f64]) -> Array1<f64> {
        Array1::from_vec(values.to_vec())
    }

    #[test]
    fn test_window_bounds_interior() {
        assert_eq!(window_bounds(2.5, 8, Method::Lagrange), (1, 4));
        assert_eq!(window_bounds(2.5, 8, Method::CubicSpline), (0, 3));
        assert_eq!(window_bounds(4.1, 8, Method::CubicSpline), (2, 5));
    }

    #[test]
    fn test_window_bounds_clamped_at_edges() {
        assert_eq!(window_bounds(0.2, 8, Method::Lagrange), (0, 3));
        assert_eq!(window_bounds(0.2, 8, Method::CubicSpline), (0, 3));
        // Near the right edge the window shrinks below four points
        assert_eq!(window_bounds(7.5, 8, Method::Lagrange), (6, 7));
        assert_eq!(window_bounds(7.5, 8, Method::CubicSpline), (5, 7));
    }

    #[test]
    fn test_exact_at_integer_positions() {
        let values = axis(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0]);
        for method in [Method::Lagrange, Method::CubicSpline] {
            for i in 0..values.len() {
                let result = interpolate_axis(values.view(), i as f64, method).unwrap();
                assert!(
                    (result - values[i]).abs() < 1e-10,
                    "{:?} at index {}: got {}",
                    method,
                    i,
                    result
                );
            }
        }
    }

    #[test]
    fn test_lagrange_reproduces_cubic_samples() {
        // Samples of x^3 over 0..6; a 4-point Lagrange window is exact
        let values = axis(&[0.0, 1.0, 8.0, 27.0, 64.0, 125.0, 216.0]);
        let result = interpolate_axis(values.view(), 2.5, Method::Lagrange).unwrap();
        assert!((result - 15.625).abs() < 1e-9);
    }

    #[test]
    fn test_spline_matches_linear_data() {
        let values = axis(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        for &x in &[0.5, 1.7, 3.25, 4.9] {
            let result = interpolate_axis(values.view(), x, Method::CubicSpline).unwrap();
            assert!((result - x).abs() < 1e-10, "at x={}: got {}", x, result);
        }
    }

    #[test]
    fn test_single_sample_axis_is_constant() {
        let values = axis(&[7.0]);
        for method in [Method::Lagrange, Method::CubicSpline] {
            assert_eq!(interpolate_axis(values.view(), 0.0, method).unwrap(), 7.0);
            assert_eq!(interpolate_axis(values.view(), 0.9, method).unwrap(), 7.0);
        }
    }

    #[test]
    fn test_short_axis_takes_linear_fallback() {
        let values = axis(&[0.0, 1.0]);
        for method in [Method::Lagrange, Method::CubicSpline] {
            let mid = interpolate_axis(values.view(), 0.5, method).unwrap();
            assert!((mid - 0.5).abs() < 1e-12);
            // Beyond the end the blend saturates to the nearest sample
            let beyond = interpolate_axis(values.view(), 1.5, method).unwrap();
            assert!((beyond - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_three_sample_axis_takes_linear_fallback() {
        let values = axis(&[0.0, 2.0, 6.0]);
        let result = interpolate_axis(values.view(), 1.5, Method::CubicSpline).unwrap();
        assert!((result - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_right_edge_window_shrink_takes_linear_fallback() {
        // floor(x) = n-1 leaves a two-point window; linear between the last
        // two samples, saturating past the end
        let values = axis(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let at_last = interpolate_axis(values.view(), 4.0, Method::Lagrange).unwrap();
        assert!((at_last - 4.0).abs() < 1e-12);
        let beyond = interpolate_axis(values.view(), 4.5, Method::Lagrange).unwrap();
        assert!((beyond - 4.0).abs() < 1e-12);
    }
}
