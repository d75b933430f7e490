//! Basis evaluation for the two interpolation algorithms.
//!
//! Computes Lagrange basis polynomial values and fits natural cubic splines
//! over a local window of control points. All arithmetic is in `f64`; no
//! extrapolation guard is applied, so queries outside the control-point range
//! follow the polynomial (Lagrange) or the nearest boundary segment (spline).

use crate::error::{RegridError, Result};

/// Evaluate the Lagrange basis polynomial `L_i(t)` over `points`.
///
/// `L_i(t) = prod_{j != i} (t - p_j) / (p_i - p_j)`. The control-point
/// positions must be pairwise distinct; a coincident pair makes the
/// denominator vanish and is reported as a degenerate window.
pub fn lagrange_basis(t: f64, i: usize, points: &[f64]) -> Result<f64> {
    let p_i = points[i];
    let mut basis = 1.0;
    for (j, &p_j) in points.iter().enumerate() {
        if j == i {
            continue;
        }
        let denominator = p_i - p_j;
        if denominator == 0.0 {
            return Err(RegridError::DegenerateWindow {
                message: format!("coincident control-point positions at {}", p_i),
            });
        }
        basis *= (t - p_j) / denominator;
    }
    Ok(basis)
}

/// Interpolate at `t` by summing `values` weighted by their Lagrange bases.
///
/// Requires at least two control points with distinct positions.
pub fn lagrange_interpolate(points: &[f64], values: &[f64], t: f64) -> Result<f64> {
    debug_assert_eq!(points.len(), values.len());
    if points.len() < 2 {
        return Err(RegridError::DegenerateWindow {
            message: format!(
                "Lagrange interpolation needs at least 2 control points, got {}",
                points.len()
            ),
        });
    }

    let mut accumulated = 0.0;
    for (i, &value) in values.iter().enumerate() {
        accumulated += value * lagrange_basis(t, i, points)?;
    }
    Ok(accumulated)
}

/// A natural cubic spline fitted to a set of control points.
///
/// Natural boundary conditions set the second derivative to zero at both
/// endpoints. Fitting solves the tridiagonal system for the second
/// derivatives at each knot (forward sweep, then back substitution).
#[derive(Debug, Clone)]
pub struct NaturalCubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    second_derivatives: Vec<f64>,
}

impl NaturalCubicSpline {
    /// Fit a natural cubic spline to `(xs, ys)` control points.
    ///
    /// Positions must be strictly increasing and at least two points are
    /// required; violations are reported as a degenerate window.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self> {
        debug_assert_eq!(xs.len(), ys.len());
        let n = xs.len();
        if n < 2 {
            return Err(RegridError::DegenerateWindow {
                message: format!("cubic spline needs at least 2 control points, got {}", n),
            });
        }
        for i in 1..n {
            if xs[i] <= xs[i - 1] {
                return Err(RegridError::DegenerateWindow {
                    message: format!(
                        "control-point positions must be strictly increasing: {} then {}",
                        xs[i - 1],
                        xs[i]
                    ),
                });
            }
        }

        let mut second_derivatives = vec![0.0; n];
        let mut scratch = vec![0.0; n.saturating_sub(1)];

        // Forward sweep of the natural-boundary tridiagonal system
        for i in 1..n - 1 {
            let sigma = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
            let pivot = sigma * second_derivatives[i - 1] + 2.0;
            second_derivatives[i] = (sigma - 1.0) / pivot;
            let divided_difference = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i])
                - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
            scratch[i] =
                (6.0 * divided_difference / (xs[i + 1] - xs[i - 1]) - sigma * scratch[i - 1])
                    / pivot;
        }

        // Back substitution; the natural boundary pins both ends to zero
        for k in (1..n - 1).rev() {
            second_derivatives[k] = second_derivatives[k] * second_derivatives[k + 1] + scratch[k];
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            second_derivatives,
        })
    }

    /// Evaluate the spline at `t`.
    ///
    /// Outside the knot range, the nearest boundary segment's cubic is
    /// evaluated, matching natural-spline extrapolation.
    pub fn evaluate(&self, t: f64) -> f64 {
        let n = self.xs.len();

        // Binary search for the enclosing segment, clamped to the boundary
        // segments for out-of-range queries.
        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.xs[mid] > t {
                hi = mid;
            } else {
                lo = mid;
            }
        }

        let h = self.xs[hi] - self.xs[lo];
        let a = (self.xs[hi] - t) / h;
        let b = (t - self.xs[lo]) / h;

        a * self.ys[lo]
            + b * self.ys[hi]
            + ((a * a * a - a) * self.second_derivatives[lo]
                + (b * b * b - b) * self.second_derivatives[hi])
                * h
                * h
                / 6.0
    }
}
