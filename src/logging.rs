//! Logging utilities for the regrid demo harness.
//!
//! This module provides structured logging functionality to make logs more
//! searchable, analyzable, and useful when comparing interpolation runs.

use std::time::Instant;
use tracing::{debug, info};

/// Initialize the tracing subscriber with the given log level
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Log an operation with timing and result in a single statement
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> (R, f64)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();

    debug!(operation = operation, "Starting operation");

    let result = f();

    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    info!(
        operation = operation,
        duration_ms = duration_ms,
        "Operation completed"
    );

    (result, duration_ms)
}
