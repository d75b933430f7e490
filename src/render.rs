//! ASCII rendering of grids.
//!
//! Binary grids render as `#` and space; continuous grids render through a
//! shade ramp so intermediate values stay visible. Rendering is a harness
//! concern only; nothing in the numeric core depends on it.

use crate::grid::Grid;

/// Shade ramp from empty to full, indexed by clamped value
const SHADES: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Render a binary grid: cells above `threshold` become `#`, others a space.
pub fn to_ascii_binary(grid: &Grid, threshold: f64) -> String {
    let mut out = String::with_capacity(grid.height() * (grid.width() + 1));
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            out.push(if grid.get(y, x) > threshold { '#' } else { ' ' });
        }
        out.push('\n');
    }
    out
}

/// Render a continuous grid through the shade ramp, clamping values to [0, 1].
pub fn to_ascii_shaded(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.height() * (grid.width() + 1));
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let value = grid.get(y, x).clamp(0.0, 1.0);
            let index = ((value * (SHADES.len() - 1) as f64).round()) as usize;
            out.push(SHADES[index]);
        }
        out.push('\n');
    }
    out
}
