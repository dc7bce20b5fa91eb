//! Fixed timestep simulation tick
//!
//! Core game loop that advances a session deterministically. The step is a
//! constant tick, not a measured wall-clock delta.

use super::collision::detect;
use super::obstacle::{Obstacle, ObstacleKind};
use super::rng::RandomSource;
use super::state::{GameEvent, GamePhase, Session};

/// Advance the session by one tick and report what happened.
///
/// Order within a tick: player, spawner, obstacle movement, pruning,
/// collision, scoring, hazard gravity flips, then the game-over transition.
/// A hazard touched on the same tick as a fatal hit still flips gravity
/// before the run ends. Outside `Playing` this is a no-op.
pub fn tick(session: &mut Session, rng: &mut impl RandomSource) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if session.phase != GamePhase::Playing {
        return events;
    }

    session.time_ticks += 1;

    session.player.tick();

    let config = &session.config;
    let spawned = session.spawner.tick(config, rng, &mut session.ids);
    for obstacle in &spawned {
        match obstacle.kind {
            ObstacleKind::TopBarrier => events.push(GameEvent::BarrierPairSpawned {
                gap_id: obstacle.gap_id.unwrap_or(obstacle.id()),
            }),
            ObstacleKind::BottomBarrier => {}
            ObstacleKind::Hazard => events.push(GameEvent::HazardSpawned { id: obstacle.id() }),
        }
    }
    session.obstacles.extend(spawned);

    for obstacle in &mut session.obstacles {
        obstacle.advance();
    }

    // Rebuild the live set instead of removing while iterating
    let (live, pruned): (Vec<Obstacle>, Vec<Obstacle>) = std::mem::take(&mut session.obstacles)
        .into_iter()
        .partition(|o| !o.is_offscreen());
    session.obstacles = live;
    for obstacle in pruned {
        log::debug!("Pruned {:?} {}", obstacle.kind, obstacle.id());
        if obstacle.kind == ObstacleKind::Hazard {
            session.spawner.hazard_removed(&session.config, rng);
        }
        events.push(GameEvent::ObstaclePruned {
            id: obstacle.id(),
            kind: obstacle.kind,
        });
    }

    let report = detect(
        &session.player,
        &session.obstacles,
        session.config.lower_bound(),
    );

    // Scoring is keyed on the player's left edge
    let player_x = session.player.x();
    for obstacle in &mut session.obstacles {
        if obstacle.should_score(player_x) {
            obstacle.passed = true;
            session.score += session.config.score_per_barrier;
            let score = session.score.floor() as u32;
            log::debug!("Passed barrier {} (score {})", obstacle.id(), session.score);
            events.push(GameEvent::BarrierPassed {
                id: obstacle.id(),
                score,
            });
        }
    }

    for hazard_id in &report.hazard_hits {
        let Some(hazard) = session
            .obstacles
            .iter_mut()
            .find(|o| o.id() == *hazard_id && !o.toggled)
        else {
            continue;
        };
        hazard.toggled = true;
        session.player.invert_gravity();
        log::debug!(
            "Hazard {} inverted gravity to {}",
            hazard_id,
            session.player.gravity
        );
        events.push(GameEvent::GravityInverted {
            hazard_id: *hazard_id,
            gravity: session.player.gravity,
        });
    }

    if let Some(cause) = report.fatal {
        session.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} ticks: {:?}, score {}",
            session.time_ticks,
            cause,
            session.display_score()
        );
        events.push(GameEvent::Collided(cause));
        events.push(GameEvent::PhaseChanged(GamePhase::GameOver));
    }

    events
}

/// Apply a jump impulse. Returns `false` (and does nothing) unless playing.
pub fn jump(session: &mut Session) -> bool {
    if session.phase != GamePhase::Playing {
        log::debug!("Ignoring jump in {:?}", session.phase);
        return false;
    }
    session.player.jump(session.config.jump_impulse);
    true
}

/// Start a new run. Returns `false` (and does nothing) unless the run is over.
pub fn restart(session: &mut Session, rng: &mut impl RandomSource) -> bool {
    if session.phase != GamePhase::GameOver {
        log::debug!("Ignoring restart in {:?}", session.phase);
        return false;
    }
    session.reset(rng);
    log::info!("Run {} started", session.run + 1);
    true
}
