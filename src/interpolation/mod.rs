//! Interpolation algorithms for gridded scalar data.
//!
//! This module provides the two interchangeable reconstruction algorithms
//! (local Lagrange polynomial and local natural cubic-spline interpolation)
//! and the two orchestrators that apply them: temporal frame interpolation
//! between two grids and spatial upscaling of one grid.

pub mod axis;
pub mod basis;
pub mod spatial;
pub mod temporal;

use std::fmt;

use crate::error::{RegridError, Result};

pub use spatial::upscale_spatial;
pub use temporal::interpolate_temporal;

/// The interpolation method selector.
///
/// A closed set: each orchestration run uses exactly one method, dispatched
/// at a single point per orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Local Lagrange polynomial interpolation over a 4-point window
    Lagrange,
    /// Local natural cubic-spline interpolation over a 4-point window
    CubicSpline,
}

impl Method {
    /// Resolve a method by name.
    ///
    /// Accepts the configuration spellings `"lagrange"` and `"cubic_spline"`
    /// (case-insensitive); anything else is an unsupported method.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "lagrange" => Ok(Method::Lagrange),
            "cubic_spline" | "cubic-spline" => Ok(Method::CubicSpline),
            _ => Err(RegridError::UnsupportedMethod {
                name: name.to_string(),
            }),
        }
    }

    /// Get the canonical name of this interpolation method
    pub fn name(&self) -> &'static str {
        match self {
            Method::Lagrange => "lagrange",
            Method::CubicSpline => "cubic_spline",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Method::from_name("lagrange").unwrap(), Method::Lagrange);
        assert_eq!(
            Method::from_name("cubic_spline").unwrap(),
            Method::CubicSpline
        );
        assert_eq!(
            Method::from_name("Cubic-Spline").unwrap(),
            Method::CubicSpline
        );
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert!(matches!(
            Method::from_name("bilinear"),
            Err(RegridError::UnsupportedMethod { .. })
        ));
    }

    #[test]
    fn test_name_round_trips() {
        for method in [Method::Lagrange, Method::CubicSpline] {
            assert_eq!(Method::from_name(method.name()).unwrap(), method);
        }
    }
}
