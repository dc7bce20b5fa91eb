//! Game tuning and presets
//!
//! Every constant the simulation reads comes through `GameConfig`, so hosts
//! can ship alternative tunings as JSON without touching the core.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::spawner::barrier_heights;

/// Named tuning presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    /// Pipes only
    #[default]
    Classic,
    /// Pipes plus gravity-flipping spikes
    Spikes,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Classic => "Classic",
            Preset::Spikes => "Spikes",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Preset::Classic),
            "spikes" | "spike" => Some(Preset::Spikes),
            _ => None,
        }
    }

    /// Whether hazards spawn under this preset
    pub fn hazards_enabled(&self) -> bool {
        match self {
            Preset::Classic => false,
            Preset::Spikes => true,
        }
    }
}

/// Full game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,
    /// Host timer period (the core itself is not delta-time scaled)
    pub tick_interval_ms: u32,

    // === Player ===
    pub player_start_x: f32,
    pub player_start_y: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Default gravity (sign flips on hazard contact)
    pub gravity: f32,
    pub jump_impulse: f32,
    pub boundary_epsilon: f32,

    // === Barriers ===
    pub barrier_width: f32,
    pub barrier_speed: f32,
    /// Ticks between barrier pair spawns
    pub barrier_spawn_interval: u32,
    pub gap_height: f32,
    /// Inclusive range the hole position is drawn from
    pub hole_min: i32,
    pub hole_max: i32,
    /// y of the top barrier (zero or slightly negative to hide the seam)
    pub top_barrier_offset: f32,

    // === Hazards ===
    pub hazards_enabled: bool,
    pub hazard_width: f32,
    pub hazard_height: f32,
    pub hazard_speed: f32,
    /// Inclusive range of ticks between a hazard's removal and the next spawn
    pub hazard_interval_min: i32,
    pub hazard_interval_max: i32,

    // === Scoring ===
    pub score_per_barrier: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            tick_interval_ms: TICK_INTERVAL_MS,

            player_start_x: PLAYER_START_X,
            player_start_y: PLAYER_START_Y,
            player_width: PLAYER_SIZE,
            player_height: PLAYER_SIZE,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            boundary_epsilon: BOUNDARY_EPSILON,

            barrier_width: BARRIER_WIDTH,
            barrier_speed: BARRIER_SPEED,
            barrier_spawn_interval: BARRIER_SPAWN_INTERVAL,
            gap_height: GAP_HEIGHT,
            hole_min: HOLE_MIN,
            hole_max: HOLE_MAX,
            top_barrier_offset: 0.0,

            hazards_enabled: false,
            hazard_width: HAZARD_SIZE,
            hazard_height: HAZARD_SIZE,
            hazard_speed: HAZARD_SPEED,
            hazard_interval_min: HAZARD_INTERVAL_MIN,
            hazard_interval_max: HAZARD_INTERVAL_MAX,

            score_per_barrier: SCORE_PER_BARRIER,
        }
    }
}

impl GameConfig {
    /// Create a config from a preset (applies preset over defaults)
    pub fn from_preset(preset: Preset) -> Self {
        let mut config = Self::default();
        config.apply_preset(preset);
        config
    }

    pub fn apply_preset(&mut self, preset: Preset) {
        self.hazards_enabled = preset.hazards_enabled();
    }

    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check every invariant the simulation relies on.
    ///
    /// A config that passes can never produce a zero- or negative-height
    /// barrier, and a fresh run never starts out of bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.playfield_width <= 0.0 || self.playfield_height <= 0.0 {
            return Err(ConfigError::NonPositivePlayfield {
                width: self.playfield_width,
                height: self.playfield_height,
            });
        }

        let positive = [
            ("player size", self.player_width.min(self.player_height)),
            ("jump impulse", self.jump_impulse),
            ("barrier width", self.barrier_width),
            ("barrier speed", self.barrier_speed),
            ("gap height", self.gap_height),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveDimension(name));
            }
        }

        if self.barrier_spawn_interval == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }

        if self.hole_min > self.hole_max
            || self.hole_min < 0
            || self.hole_max as f32 > self.playfield_height
        {
            return Err(ConfigError::InvalidHoleRange {
                min: self.hole_min,
                max: self.hole_max,
            });
        }

        // Both heights are monotone on each side of H/2, so the extremes sit
        // at the range ends or right next to the midline.
        let mid = (self.playfield_height / 2.0).ceil() as i32;
        let candidates = [self.hole_min, self.hole_max, mid - 1, mid]
            .map(|hole| hole.clamp(self.hole_min, self.hole_max));
        for hole in candidates {
            let (top, bottom) = barrier_heights(hole, self.gap_height, self.playfield_height);
            if top <= 0.0 || bottom <= 0.0 {
                return Err(ConfigError::NonPositiveBarrier { hole, top, bottom });
            }
        }

        if self.top_barrier_offset > 0.0 {
            return Err(ConfigError::PositiveTopOffset(self.top_barrier_offset));
        }

        if self.boundary_epsilon < 0.0 || self.boundary_epsilon >= self.playfield_height {
            return Err(ConfigError::InvalidBoundary {
                epsilon: self.boundary_epsilon,
                height: self.playfield_height,
            });
        }

        let (x, y) = (self.player_start_x, self.player_start_y);
        let max_x = self.playfield_width - self.player_width;
        if !(0.0..=max_x).contains(&x) || !(0.0..=self.lower_bound()).contains(&y) {
            return Err(ConfigError::StartOutsidePlayfield { x, y });
        }

        if self.hazards_enabled {
            let hazard_positive = [
                ("hazard size", self.hazard_width.min(self.hazard_height)),
                ("hazard speed", self.hazard_speed),
            ];
            for (name, value) in hazard_positive {
                if value <= 0.0 {
                    return Err(ConfigError::NonPositiveDimension(name));
                }
            }
            if self.hazard_interval_min < 1 || self.hazard_interval_min > self.hazard_interval_max {
                return Err(ConfigError::InvalidHazardInterval {
                    min: self.hazard_interval_min,
                    max: self.hazard_interval_max,
                });
            }
            if ((self.hole_max - self.hole_min) as f32) < self.hazard_height {
                return Err(ConfigError::HazardBandTooSmall {
                    hazard: self.hazard_height,
                    min: self.hole_min,
                    max: self.hole_max,
                });
            }
        }

        Ok(())
    }

    /// Highest player y that is still inside the playfield
    pub fn lower_bound(&self) -> f32 {
        self.playfield_height - self.boundary_epsilon
    }
}
