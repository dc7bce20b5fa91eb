//! Host-facing game driver
//!
//! Hosts own a `Game` and feed it four signals: a periodic tick, jump,
//! restart and quit. Everything else (window, widgets, audio) stays on the
//! host side and reacts to the returned `Frame`s.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::sim::{self, GameEvent, GamePhase, RandomSource, SeededRng, Session, Snapshot};

/// Output of one entry-point call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub snapshot: Snapshot,
    pub events: Vec<GameEvent>,
}

/// Owns the session and the random source
pub struct Game<R: RandomSource = SeededRng> {
    session: Option<Session>,
    rng: R,
}

impl Game<SeededRng> {
    /// Game with a seeded PCG source
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        log::info!("Game initialized with seed: {}", seed);
        Self::new(config, SeededRng::new(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Validate the config and start the first run
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        let session = Session::new(config, &mut rng)?;
        let config = &session.config;
        log::info!(
            "Starting {}x{} playfield (hazards {})",
            config.playfield_width,
            config.playfield_height,
            if config.hazards_enabled { "on" } else { "off" }
        );
        Ok(Self {
            session: Some(session),
            rng,
        })
    }

    /// Advance one tick. `None` once the game has been quit.
    pub fn on_tick(&mut self) -> Option<Frame> {
        let session = self.session.as_mut()?;
        let events = sim::tick(session, &mut self.rng);
        Some(Frame {
            snapshot: session.snapshot(),
            events,
        })
    }

    /// Jump while playing; ignored otherwise
    pub fn on_jump(&mut self) -> bool {
        self.session.as_mut().is_some_and(sim::jump)
    }

    /// Restart after game over; ignored otherwise
    pub fn on_restart(&mut self) -> Option<Frame> {
        let session = self.session.as_mut()?;
        if !sim::restart(session, &mut self.rng) {
            return None;
        }
        Some(Frame {
            snapshot: session.snapshot(),
            events: vec![GameEvent::PhaseChanged(GamePhase::Playing)],
        })
    }

    /// Drop the session; every later call is a no-op
    pub fn on_quit(&mut self) {
        if let Some(session) = self.session.take() {
            log::info!(
                "Quit after {} runs, final score {}",
                session.run + 1,
                session.display_score()
            );
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        self.session.as_ref().map(Session::snapshot)
    }

    pub fn phase(&self) -> Option<GamePhase> {
        self.session.as_ref().map(|s| s.phase)
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// Demo-mode decision for the current state
    pub fn autopilot_wants_jump(&self) -> bool {
        self.session.as_ref().is_some_and(sim::autopilot::wants_jump)
    }
}
