//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only (no wall-clock deltas)
//! - Randomness only through `RandomSource`
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod obstacle;
pub mod player;
pub mod rng;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, FatalCause, detect};
pub use entity::{Aabb, Entity};
pub use obstacle::{Obstacle, ObstacleKind};
pub use player::Player;
pub use rng::{RandomSource, SeededRng};
pub use spawner::{Spawner, barrier_heights};
pub use state::{GameEvent, GamePhase, ObstacleView, Session, Snapshot};
pub use tick::{jump, restart, tick};
