//! Configuration errors
//!
//! The simulation itself never fails: collisions and falling off-screen are
//! modeled as phase transitions. The only hard failures are tuning values
//! that would make the simulation produce impossible geometry, checked once
//! before a session starts.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Playfield must have positive size, got {width}x{height}")]
    NonPositivePlayfield { width: f32, height: f32 },

    #[error("Entity sizes and speeds must be positive: {0}")]
    NonPositiveDimension(&'static str),

    #[error("Barrier spawn interval must be at least one tick")]
    ZeroSpawnInterval,

    #[error("Hole range [{min}, {max}] is empty or outside the playfield")]
    InvalidHoleRange { min: i32, max: i32 },

    #[error("Hole at {hole} yields non-positive barrier (top={top}, bottom={bottom})")]
    NonPositiveBarrier { hole: i32, top: f32, bottom: f32 },

    #[error("Top barrier offset must not be positive, got {0}")]
    PositiveTopOffset(f32),

    #[error("Boundary epsilon {epsilon} must be in [0, {height})")]
    InvalidBoundary { epsilon: f32, height: f32 },

    #[error("Player start ({x}, {y}) is outside the playfield")]
    StartOutsidePlayfield { x: f32, y: f32 },

    #[error("Hazard interval range [{min}, {max}] must be non-empty and at least one tick")]
    InvalidHazardInterval { min: i32, max: i32 },

    #[error("Hazard of height {hazard} does not fit in the hole band [{min}, {max}]")]
    HazardBandTooSmall { hazard: f32, min: i32, max: i32 },

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
