//! Temporal frame interpolation.
//!
//! Produces one intermediate grid between two equally-shaped grids at a
//! fractional time position. Every pixel is computed independently from the
//! two source values at that pixel.

use ndarray::Array2;
use tracing::debug;

use super::basis::{lagrange_basis, NaturalCubicSpline};
use super::Method;
use crate::error::{RegridError, Result};
use crate::grid::Grid;

/// Relative time positions for the Lagrange window
const LAGRANGE_TIMES: [f64; 4] = [-1.0, 0.0, 1.0, 2.0];

/// Normalized control-point positions for the cubic-spline window
const SPLINE_TIMES: [f64; 4] = [0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0];

/// Interpolate an intermediate grid between `first` and `second` at time `t`.
///
/// `t` is the fractional position between the frames (0 reproduces `first`,
/// 1 reproduces `second`) and may lie outside [0, 1]. Fails with
/// [`RegridError::DimensionMismatch`] if the grids differ in shape and with
/// [`RegridError::InvalidTime`] if `t` is not finite.
pub fn interpolate_temporal(first: &Grid, second: &Grid, t: f64, method: Method) -> Result<Grid> {
    if first.shape() != second.shape() {
        return Err(RegridError::DimensionMismatch {
            message: format!(
                "temporal interpolation requires equal shapes, got {:?} and {:?}",
                first.shape(),
                second.shape()
            ),
        });
    }
    if !t.is_finite() {
        return Err(RegridError::InvalidTime {
            message: format!("time position must be finite, got {}", t),
        });
    }

    let (height, width) = first.shape();
    debug!(
        height,
        width,
        t,
        method = method.name(),
        "interpolating intermediate frame"
    );

    match method {
        Method::Lagrange => lagrange_frame(first, second, t),
        Method::CubicSpline => spline_frame(first, second, t),
    }
}

/// Lagrange mode: a fixed 4-point time window at {-1, 0, 1, 2} whose values
/// are drawn from {first, first, second, second} at each pixel.
///
/// The basis weights depend only on `t`, so they are evaluated once and
/// applied to every pixel's window.
fn lagrange_frame(first: &Grid, second: &Grid, t: f64) -> Result<Grid> {
    let mut weights = [0.0; 4];
    for (i, weight) in weights.iter_mut().enumerate() {
        *weight = lagrange_basis(t, i, &LAGRANGE_TIMES)?;
    }

    let (height, width) = first.shape();
    let mut result = Array2::zeros((height, width));
    for y in 0..height {
        for x in 0..width {
            let a = first.get(y, x);
            let b = second.get(y, x);
            let window = [a, a, b, b];
            result[[y, x]] = window
                .iter()
                .zip(weights.iter())
                .map(|(value, weight)| value * weight)
                .sum();
        }
    }
    Grid::from_array(result)
}

/// Cubic-spline mode: per-pixel control points at {0, 1/3, 2/3, 1} blending
/// the two source values, fitted with natural boundary conditions.
///
/// The evaluated value is clamped to [0, 1]; this clamp is specific to
/// temporal mode.
fn spline_frame(first: &Grid, second: &Grid, t: f64) -> Result<Grid> {
    let (height, width) = first.shape();
    let mut result = Array2::zeros((height, width));
    for y in 0..height {
        for x in 0..width {
            let a = first.get(y, x);
            let b = second.get(y, x);
            let control = [a, (2.0 * a + b) / 3.0, (a + 2.0 * b) / 3.0, b];
            let spline = NaturalCubicSpline::fit(&SPLINE_TIMES, &control)?;
            result[[y, x]] = spline.evaluate(t).clamp(0.0, 1.0);
        }
    }
    Grid::from_array(result)
}
