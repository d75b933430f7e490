//! regrid - Lagrange and cubic-spline interpolation over scalar grids
//!
//! This is the main entry point for the regrid demo binary. It generates a
//! synthetic sequence of binary grids and runs one of the two interpolation
//! modes over it, printing ASCII renderings and per-batch timings.

use anyhow::Context;
use tracing::{error, info};

use regrid::logging::log_timed_operation;
use regrid::{interpolate_temporal, render, synthetic, upscale_spatial, Config, Grid, Method};

fn main() -> anyhow::Result<()> {
    // Initialize tracing with default level first
    tracing_subscriber::fmt().with_env_filter("info").init();

    info!("Starting regrid v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let (config, mode) = Config::load().map_err(|e| {
        error!("Configuration error: {}", e);
        e
    })?;

    // Validate configuration
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    // Re-initialize tracing with configured level
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", &config.log_level);
    }

    let method = config.method()?;
    let size = config.demo.grid_size;
    let frames = config.demo.frames;

    info!(
        mode = mode.as_str(),
        method = method.name(),
        grid_size = size,
        frames,
        "Generating synthetic grid sequence"
    );

    let sequence = synthetic::coherent_sequence(frames, size, size, config.demo.seed)
        .context("failed to generate synthetic grids")?;

    match mode.as_str() {
        "temporal" => run_temporal(&sequence, method)?,
        "spatial" => run_spatial(&sequence, config.demo.scale, method)?,
        other => anyhow::bail!("unknown mode '{}': expected 'temporal' or 'spatial'", other),
    }

    Ok(())
}

/// Interpolate an intermediate frame between each consecutive pair of grids.
fn run_temporal(sequence: &[Grid], method: Method) -> anyhow::Result<()> {
    let mut durations = Vec::with_capacity(sequence.len().saturating_sub(1));

    for (index, pair) in sequence.windows(2).enumerate() {
        let (frame, duration_ms) = log_timed_operation("interpolate_temporal", || {
            interpolate_temporal(&pair[0], &pair[1], 0.5, method)
        });
        let frame = frame.with_context(|| {
            format!("interpolating between frames {} and {}", index, index + 1)
        })?;

        println!("Intermediate frame between #{} and #{}:", index + 1, index + 2);
        print!("{}", render::to_ascii_shaded(&frame));
        durations.push(duration_ms);
    }

    report_timings(method, &durations);
    Ok(())
}

/// Upscale every grid in the sequence by the configured factor.
fn run_spatial(sequence: &[Grid], scale: usize, method: Method) -> anyhow::Result<()> {
    let mut durations = Vec::with_capacity(sequence.len());

    for (index, grid) in sequence.iter().enumerate() {
        let (upscaled, duration_ms) =
            log_timed_operation("upscale_spatial", || upscale_spatial(grid, scale, method));
        let upscaled = upscaled.with_context(|| format!("upscaling frame {}", index))?;

        println!(
            "Frame #{}: {}x{} -> {}x{}",
            index + 1,
            grid.height(),
            grid.width(),
            upscaled.height(),
            upscaled.width()
        );
        print!("{}", render::to_ascii_binary(&upscaled, 0.5));
        durations.push(duration_ms);
    }

    report_timings(method, &durations);
    Ok(())
}

/// Log the per-batch timing summary.
fn report_timings(method: Method, durations: &[f64]) {
    if durations.is_empty() {
        return;
    }
    let total_ms: f64 = durations.iter().sum();
    let mean_ms = total_ms / durations.len() as f64;
    info!(
        method = method.name(),
        batches = durations.len(),
        mean_ms,
        total_ms,
        "Interpolation timing summary"
    );
}
