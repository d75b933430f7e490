//! # regrid
//!
//! Lagrange and natural cubic-spline interpolation for rectangular scalar grids.
//!
//! This library reconstructs continuous-valued samples from discrete grids of
//! scalars, using two interchangeable local interpolation algorithms, in two
//! usage modes: producing an intermediate grid between two equally-shaped
//! grids at a fractional time position, and upscaling one grid to a larger
//! grid by evaluating fractional coordinates inside the original.
//!
//! ## Key Features
//!
//! - **Two interchangeable algorithms**: local Lagrange polynomial and local
//!   natural cubic-spline interpolation, selected per call
//! - **Temporal interpolation**: intermediate frames between two grids
//! - **Spatial upscaling**: integer-factor enlargement via per-axis
//!   interpolation
//! - **Deterministic numeric core**: pure functions over immutable grids,
//!   no I/O, no shared state
//!
//! ## Architecture
//!
//! - **Grid layer**: the rectangular `f64` sample array all operations share
//! - **Basis layer**: Lagrange basis evaluation and natural-spline fitting
//!   over local 4-point windows
//! - **Orchestrators**: the temporal frame interpolator and the spatial
//!   upscaler, each dispatching on a closed [`Method`] selector

pub mod config;
pub mod error;
pub mod grid;
pub mod interpolation;
pub mod logging;
pub mod render;
pub mod synthetic;

pub use config::Config;
pub use error::{RegridError, Result};
pub use grid::Grid;
pub use interpolation::{interpolate_temporal, upscale_spatial, Method};
pub use logging::{init_tracing, log_timed_operation};
