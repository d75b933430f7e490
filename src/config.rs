//! Configuration management for the regrid demo harness.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{RegridError, Result};
use crate::interpolation::Method;

/// Command-line arguments for the regrid demo
#[derive(Parser, Debug)]
#[command(name = "regrid")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Demo mode to run: "temporal" or "spatial"
    pub mode: String,

    /// Interpolation method (lagrange, cubic_spline)
    #[arg(short, long, env = "REGRID_METHOD", default_value = "cubic_spline")]
    pub method: String,

    /// Edge length of the generated square grids
    #[arg(short = 'g', long, env = "REGRID_GRID_SIZE", default_value = "16")]
    pub grid_size: usize,

    /// Number of grids in the generated sequence
    #[arg(short = 'n', long, env = "REGRID_FRAMES", default_value = "8")]
    pub frames: usize,

    /// Integer upscale factor for spatial mode
    #[arg(short, long, env = "REGRID_SCALE", default_value = "2")]
    pub scale: usize,

    /// Seed for the synthetic grid generator
    #[arg(long, env = "REGRID_SEED", default_value = "42")]
    pub seed: u64,

    /// Path to JSON configuration file
    #[arg(short, long, env = "REGRID_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "REGRID_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Synthetic-grid generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Edge length of the generated square grids
    #[serde(default = "default_grid_size")]
    pub grid_size: usize,

    /// Number of grids in the generated sequence
    #[serde(default = "default_frames")]
    pub frames: usize,

    /// Integer upscale factor for spatial mode
    #[serde(default = "default_scale")]
    pub scale: usize,

    /// Seed for the synthetic grid generator
    #[serde(default = "default_seed")]
    pub seed: u64,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Demo configuration
    #[serde(default)]
    pub demo: DemoConfig,

    /// Interpolation method
    #[serde(default = "default_method")]
    pub method: String,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, String)> {
        let args = Args::parse();
        Self::from_args(args)
    }

    /// Build a configuration from parsed arguments
    pub fn from_args(args: Args) -> Result<(Self, String)> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        config.method = args.method;
        config.demo.grid_size = args.grid_size;
        config.demo.frames = args.frames;
        config.demo.scale = args.scale;
        config.demo.seed = args.seed;
        config.log_level = args.log_level;

        Ok((config, args.mode))
    }

    /// Load configuration from a JSON file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.demo = other.demo;
        self.method = other.method;
        self.log_level = other.log_level;
    }

    /// Resolve the configured interpolation method selector
    pub fn method(&self) -> Result<Method> {
        Method::from_name(&self.method)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Validate the interpolation method by resolving it
        self.method()?;

        if self.demo.grid_size < 2 {
            return Err(RegridError::Config {
                message: format!(
                    "Grid size must be at least 2, got {}",
                    self.demo.grid_size
                ),
            });
        }

        if self.demo.frames < 2 {
            return Err(RegridError::Config {
                message: format!(
                    "Frame count must be at least 2, got {}",
                    self.demo.frames
                ),
            });
        }

        if self.demo.scale < 1 {
            return Err(RegridError::Config {
                message: "Scale factor must be at least 1".to_string(),
            });
        }

        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(RegridError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo: DemoConfig::default(),
            method: default_method(),
            log_level: default_log_level(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            frames: default_frames(),
            scale: default_scale(),
            seed: default_seed(),
        }
    }
}

// Default value functions for serde
fn default_grid_size() -> usize {
    16
}

fn default_frames() -> usize {
    8
}

fn default_scale() -> usize {
    2
}

fn default_seed() -> u64 {
    42
}

fn default_method() -> String {
    "cubic_spline".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
