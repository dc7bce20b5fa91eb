//! Scrolling obstacles: barrier pairs (pipes) and hazards (spikes)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Aabb, Entity};

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Upper half of a pipe pair, anchored to the top edge
    TopBarrier,
    /// Lower half of a pipe pair, anchored to the bottom edge
    BottomBarrier,
    /// Non-fatal spike that flips gravity on contact
    Hazard,
}

impl ObstacleKind {
    pub fn is_barrier(&self) -> bool {
        matches!(self, ObstacleKind::TopBarrier | ObstacleKind::BottomBarrier)
    }
}

/// A live obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub entity: Entity,
    pub kind: ObstacleKind,
    /// Scrolling speed (units/tick, leftward)
    pub speed: f32,
    /// Scored flag (barriers only)
    pub passed: bool,
    /// Shared by the two barriers spawned together for one gap
    pub gap_id: Option<u32>,
    /// Gravity already flipped by this hazard
    #[serde(default)]
    pub toggled: bool,
}

impl Obstacle {
    pub fn barrier(id: u32, kind: ObstacleKind, gap_id: u32, pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            entity: Entity::new(id, pos, size),
            kind,
            speed,
            passed: false,
            gap_id: Some(gap_id),
            toggled: false,
        }
    }

    pub fn hazard(id: u32, pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            entity: Entity::new(id, pos, size),
            kind: ObstacleKind::Hazard,
            speed,
            passed: false,
            gap_id: None,
            toggled: false,
        }
    }

    pub fn id(&self) -> u32 {
        self.entity.id
    }

    /// Scroll left by this obstacle's speed
    pub fn advance(&mut self) {
        self.entity.pos.x -= self.speed;
    }

    /// Trailing edge has crossed the left boundary
    pub fn is_offscreen(&self) -> bool {
        self.entity.right() < 0.0
    }

    /// Unscored barrier whose right edge is now left of `player_x`
    pub fn should_score(&self, player_x: f32) -> bool {
        self.kind.is_barrier() && !self.passed && self.entity.right() < player_x
    }

    pub fn bounds(&self) -> Aabb {
        self.entity.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipe(x: f32) -> Obstacle {
        Obstacle::barrier(
            1,
            ObstacleKind::TopBarrier,
            1,
            Vec2::new(x, 0.0),
            Vec2::new(100.0, 200.0),
            5.0,
        )
    }

    #[test]
    fn test_advance() {
        let mut p = pipe(800.0);
        p.advance();
        assert_eq!(p.entity.pos.x, 795.0);

        let mut h = Obstacle::hazard(2, Vec2::new(800.0, 300.0), Vec2::splat(50.0), 8.0);
        h.advance();
        assert_eq!(h.entity.pos.x, 792.0);
    }

    #[test]
    fn test_offscreen_only_when_right_edge_negative() {
        assert!(!pipe(-100.0).is_offscreen());
        assert!(pipe(-100.5).is_offscreen());
        assert!(!pipe(-99.0).is_offscreen());
    }

    #[test]
    fn test_should_score() {
        let mut p = pipe(0.0);
        // right edge 100 == player x: not yet past
        assert!(!p.should_score(100.0));
        p.entity.pos.x = -1.0;
        assert!(p.should_score(100.0));
        p.passed = true;
        assert!(!p.should_score(100.0));

        let h = Obstacle::hazard(2, Vec2::new(-60.0, 300.0), Vec2::splat(50.0), 8.0);
        assert!(!h.should_score(100.0));
    }
}
