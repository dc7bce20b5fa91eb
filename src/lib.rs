//! Flappy Sim - a side-scrolling flap-and-dodge game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, obstacles, collisions, session state)
//! - `game`: Host-facing entry points (tick, jump, restart, quit)
//! - `config`: Data-driven game tuning with startup validation
//! - `error`: Configuration errors

pub mod config;
pub mod error;
pub mod game;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{GameConfig, Preset};
pub use error::ConfigError;
pub use game::{Frame, Game};

/// Game configuration constants
pub mod consts {
    /// Host timer period in milliseconds (nominal 50 Hz)
    pub const TICK_INTERVAL_MS: u32 = 20;

    /// Playfield dimensions (logical units, y grows downward)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 250.0;
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Added to velocity every tick (positive = falling)
    pub const GRAVITY: f32 = 1.0;
    /// Magnitude of the velocity set by a jump
    pub const JUMP_IMPULSE: f32 = 15.0;
    /// Player y beyond `PLAYFIELD_HEIGHT - BOUNDARY_EPSILON` ends the run
    pub const BOUNDARY_EPSILON: f32 = 30.0;

    /// Barrier (pipe) defaults
    pub const BARRIER_WIDTH: f32 = 100.0;
    pub const BARRIER_SPEED: f32 = 5.0;
    pub const BARRIER_SPAWN_INTERVAL: u32 = 70;
    pub const GAP_HEIGHT: f32 = 150.0;
    pub const HOLE_MIN: i32 = 150;
    pub const HOLE_MAX: i32 = 450;

    /// Hazard (spike) defaults
    pub const HAZARD_SIZE: f32 = 50.0;
    pub const HAZARD_SPEED: f32 = 8.0;
    pub const HAZARD_INTERVAL_MIN: i32 = 100;
    pub const HAZARD_INTERVAL_MAX: i32 = 250;

    /// Score awarded per barrier passed (a full pipe pair is worth 1)
    pub const SCORE_PER_BARRIER: f32 = 0.5;
}
