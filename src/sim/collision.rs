//! Collision detection between the player and the playfield contents
//!
//! Plain AABB overlap against every live obstacle. With at most a handful of
//! obstacles on screen a linear scan is all that is needed.

use serde::{Deserialize, Serialize};

use super::obstacle::{Obstacle, ObstacleKind};
use super::player::Player;

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FatalCause {
    /// Overlapped a top or bottom barrier
    Barrier { id: u32 },
    /// Flew above the top edge
    AboveTop,
    /// Fell below the lower bound
    BelowBottom,
}

/// Result of a collision pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// First fatal outcome found (barrier hits are checked before bounds)
    pub fatal: Option<FatalCause>,
    /// IDs of overlapping hazards, in obstacle order
    pub hazard_hits: Vec<u32>,
}

impl CollisionReport {
    pub fn is_fatal(&self) -> bool {
        self.fatal.is_some()
    }
}

/// Test the player against all obstacles and the vertical bounds.
///
/// `lower_bound` is the largest y the player may reach; anything below zero
/// or beyond it is fatal, same as hitting a barrier.
pub fn detect(player: &Player, obstacles: &[Obstacle], lower_bound: f32) -> CollisionReport {
    let bounds = player.bounds();
    let mut report = CollisionReport::default();

    for obstacle in obstacles {
        if !bounds.overlaps(&obstacle.bounds()) {
            continue;
        }
        match obstacle.kind {
            ObstacleKind::Hazard => report.hazard_hits.push(obstacle.id()),
            ObstacleKind::TopBarrier | ObstacleKind::BottomBarrier => {
                if report.fatal.is_none() {
                    report.fatal = Some(FatalCause::Barrier { id: obstacle.id() });
                }
            }
        }
    }

    if report.fatal.is_none() {
        let y = player.y();
        if y < 0.0 {
            report.fatal = Some(FatalCause::AboveTop);
        } else if y > lower_bound {
            report.fatal = Some(FatalCause::BelowBottom);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::config::GameConfig;

    fn player_at(y: f32) -> Player {
        let mut p = Player::new(1, &GameConfig::default());
        p.entity.pos.y = y;
        p
    }

    fn top_pipe(id: u32, x: f32, height: f32) -> Obstacle {
        Obstacle::barrier(
            id,
            ObstacleKind::TopBarrier,
            id,
            Vec2::new(x, 0.0),
            Vec2::new(100.0, height),
            5.0,
        )
    }

    fn spike(id: u32, x: f32, y: f32) -> Obstacle {
        Obstacle::hazard(id, Vec2::new(x, y), Vec2::splat(50.0), 8.0)
    }

    #[test]
    fn test_clear_playfield_is_safe() {
        let report = detect(&player_at(250.0), &[], 570.0);
        assert_eq!(report, CollisionReport::default());
        assert!(!report.is_fatal());
    }

    #[test]
    fn test_barrier_overlap_is_fatal() {
        let obstacles = [top_pipe(7, 120.0, 260.0)];
        let report = detect(&player_at(250.0), &obstacles, 570.0);
        assert_eq!(report.fatal, Some(FatalCause::Barrier { id: 7 }));
    }

    #[test]
    fn test_barrier_out_of_reach_is_safe() {
        // Pipe bottom at y=200, player top at y=250
        let obstacles = [top_pipe(7, 100.0, 200.0)];
        assert!(!detect(&player_at(250.0), &obstacles, 570.0).is_fatal());
    }

    #[test]
    fn test_bounds() {
        assert_eq!(detect(&player_at(-0.5), &[], 570.0).fatal, Some(FatalCause::AboveTop));
        assert_eq!(detect(&player_at(570.5), &[], 570.0).fatal, Some(FatalCause::BelowBottom));
        assert!(!detect(&player_at(0.0), &[], 570.0).is_fatal());
        assert!(!detect(&player_at(570.0), &[], 570.0).is_fatal());
    }

    #[test]
    fn test_hazard_hit_is_not_fatal() {
        let obstacles = [spike(3, 110.0, 260.0)];
        let report = detect(&player_at(250.0), &obstacles, 570.0);
        assert!(!report.is_fatal());
        assert_eq!(report.hazard_hits, vec![3]);
    }

    #[test]
    fn test_barrier_and_hazard_in_same_pass() {
        let obstacles = [spike(3, 110.0, 260.0), top_pipe(4, 90.0, 300.0)];
        let report = detect(&player_at(250.0), &obstacles, 570.0);
        assert_eq!(report.fatal, Some(FatalCause::Barrier { id: 4 }));
        assert_eq!(report.hazard_hits, vec![3]);
    }
}
