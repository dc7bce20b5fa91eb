//! Session state and core simulation types
//!
//! A `Session` owns every entity of one run. Nothing outside the simulation
//! mutates it; hosts read `Snapshot`s and `GameEvent`s instead.

use serde::{Deserialize, Serialize};

use super::collision::FatalCause;
use super::entity::{Aabb, IdAllocator};
use super::obstacle::{Obstacle, ObstacleKind};
use super::player::Player;
use super::rng::RandomSource;
use super::spawner::Spawner;
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; waiting for restart
    GameOver,
}

/// Something the host may want to react to (sound, UI, effects)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BarrierPairSpawned { gap_id: u32 },
    HazardSpawned { id: u32 },
    ObstaclePruned { id: u32, kind: ObstacleKind },
    BarrierPassed { id: u32, score: u32 },
    GravityInverted { hazard_id: u32, gravity: f32 },
    Collided(FatalCause),
    PhaseChanged(GamePhase),
}

/// Complete state of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub config: GameConfig,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Accumulated (fractional) score
    pub score: f32,
    pub spawner: Spawner,
    pub phase: GamePhase,
    /// Simulated ticks this run
    pub time_ticks: u64,
    /// Number of resets since the session was created
    pub run: u32,
    pub(crate) ids: IdAllocator,
}

impl Session {
    /// Fresh session in the `Playing` phase. Fails if `config` is invalid.
    pub fn new(config: GameConfig, rng: &mut impl RandomSource) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::fresh(config, rng))
    }

    fn fresh(config: GameConfig, rng: &mut impl RandomSource) -> Self {
        let mut ids = IdAllocator::default();
        let player = Player::new(ids.next_id(), &config);
        let spawner = Spawner::new(&config, rng);
        Self {
            config,
            player,
            obstacles: Vec::new(),
            score: 0.0,
            spawner,
            phase: GamePhase::Playing,
            time_ticks: 0,
            run: 0,
            ids,
        }
    }

    /// Back to initial conditions: new player, no obstacles, zero score,
    /// default gravity, zeroed counters.
    pub fn reset(&mut self, rng: &mut impl RandomSource) {
        let run = self.run + 1;
        let config = std::mem::take(&mut self.config);
        *self = Self::fresh(config, rng);
        self.run = run;
    }

    /// Score as displayed (floor of the accumulated total)
    pub fn display_score(&self) -> u32 {
        self.score.floor() as u32
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            score: self.display_score(),
            raw_score: self.score,
            phase: self.phase,
            gravity: self.player.gravity,
            time_ticks: self.time_ticks,
            run: self.run,
            player: self.player.bounds(),
            player_velocity: self.player.velocity,
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id(),
                    kind: o.kind,
                    bounds: o.bounds(),
                    passed: o.passed,
                })
                .collect(),
        }
    }
}

/// Render-facing view of one obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub kind: ObstacleKind,
    pub bounds: Aabb,
    pub passed: bool,
}

/// Everything a host needs to draw a frame and update its HUD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub score: u32,
    pub raw_score: f32,
    pub phase: GamePhase,
    pub gravity: f32,
    pub time_ticks: u64,
    pub run: u32,
    pub player: Aabb,
    pub player_velocity: f32,
    pub obstacles: Vec<ObstacleView>,
}
