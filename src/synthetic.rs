//! Synthetic test-grid generation.
//!
//! The interpolation engine only requires "a source of rectangular scalar
//! grids"; this module is the demo harness's source. It produces seeded
//! random binary grids and temporally coherent binary sequences. Coherent
//! fields are built by blending two coarse random lattices with the temporal
//! engine, upscaling the blend with the spatial engine, and thresholding the
//! result, so consecutive grids in a sequence vary smoothly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::grid::Grid;
use crate::interpolation::{interpolate_temporal, upscale_spatial, Method};

/// Upscale step between the coarse lattice and the emitted grid
const LATTICE_STEP: usize = 4;

/// Occupancy threshold separating 0-cells from 1-cells
const THRESHOLD: f64 = 0.5;

/// Generate a random binary grid from a seed.
pub fn random_binary_grid(height: usize, width: usize, seed: u64) -> Result<Grid> {
    let mut rng = StdRng::seed_from_u64(seed);
    Grid::from_shape_fn(height, width, |_| {
        if rng.gen_bool(0.5) {
            1.0
        } else {
            0.0
        }
    })
}

/// Generate a sequence of temporally coherent binary grids.
///
/// All grids are `height` x `width`; the sequence morphs smoothly from a
/// start field to an end field as the frame index advances. Identical seeds
/// produce identical sequences.
pub fn coherent_sequence(count: usize, height: usize, width: usize, seed: u64) -> Result<Vec<Grid>> {
    let start_lattice = random_lattice(height, width, seed)?;
    let end_lattice = random_lattice(height, width, seed.wrapping_add(1))?;

    let mut frames = Vec::with_capacity(count);
    for index in 0..count {
        let t = if count > 1 {
            index as f64 / (count - 1) as f64
        } else {
            0.0
        };
        let blended = interpolate_temporal(&start_lattice, &end_lattice, t, Method::CubicSpline)?;
        let smooth = upscale_spatial(&blended, LATTICE_STEP, Method::CubicSpline)?;
        frames.push(threshold_crop(&smooth, height, width)?);
    }
    Ok(frames)
}

/// Coarse lattice of uniform random values covering the requested grid.
fn random_lattice(height: usize, width: usize, seed: u64) -> Result<Grid> {
    let mut rng = StdRng::seed_from_u64(seed);
    let lattice_height = (height + LATTICE_STEP - 1) / LATTICE_STEP + 1;
    let lattice_width = (width + LATTICE_STEP - 1) / LATTICE_STEP + 1;
    Grid::from_shape_fn(lattice_height.max(2), lattice_width.max(2), |_| {
        rng.gen_range(0.0..1.0)
    })
}

/// Crop the upscaled field to the requested shape and binarize it.
fn threshold_crop(field: &Grid, height: usize, width: usize) -> Result<Grid> {
    Grid::from_shape_fn(height, width, |(y, x)| {
        if field.get(y, x) > THRESHOLD {
            1.0
        } else {
            0.0
        }
    })
}
