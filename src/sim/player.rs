//! The player-controlled bird

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Aabb, Entity};
use crate::config::GameConfig;

/// The single controlled entity of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub entity: Entity,
    /// Vertical velocity (units/tick, positive = down)
    pub velocity: f32,
    /// Added to velocity each tick; negative when inverted by a hazard
    pub gravity: f32,
}

impl Player {
    /// Fresh player at the configured start position, at rest
    pub fn new(id: u32, config: &GameConfig) -> Self {
        Self {
            entity: Entity::new(
                id,
                Vec2::new(config.player_start_x, config.player_start_y),
                Vec2::new(config.player_width, config.player_height),
            ),
            velocity: 0.0,
            gravity: config.gravity,
        }
    }

    /// Set velocity to a fixed impulse pointing against gravity
    pub fn jump(&mut self, impulse: f32) {
        self.velocity = -self.gravity.signum() * impulse.abs();
    }

    /// Integrate one tick: velocity first, then position.
    ///
    /// No clamping; leaving the playfield is the collision detector's call.
    pub fn tick(&mut self) {
        self.velocity += self.gravity;
        self.entity.pos.y += self.velocity;
    }

    pub fn invert_gravity(&mut self) {
        self.gravity = -self.gravity;
    }

    pub fn is_inverted(&self) -> bool {
        self.gravity < 0.0
    }

    pub fn bounds(&self) -> Aabb {
        self.entity.bounds()
    }

    pub fn x(&self) -> f32 {
        self.entity.pos.x
    }

    pub fn y(&self) -> f32 {
        self.entity.pos.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(1, &GameConfig::default())
    }

    #[test]
    fn test_free_fall_ten_ticks() {
        let mut p = player();
        assert_eq!(p.entity.pos, Vec2::new(100.0, 250.0));

        for _ in 0..10 {
            p.tick();
        }
        assert_eq!(p.y(), 305.0);
        assert_eq!(p.velocity, 10.0);
    }

    #[test]
    fn test_position_moves_by_post_update_velocity() {
        let mut p = player();
        p.velocity = 3.0;
        let y0 = p.y();
        p.tick();
        assert_eq!(p.velocity, 4.0);
        assert_eq!(p.y(), y0 + 4.0);
    }

    #[test]
    fn test_jump_opposes_gravity() {
        let mut p = player();
        p.velocity = 7.0;
        p.jump(15.0);
        assert_eq!(p.velocity, -15.0);

        p.invert_gravity();
        assert!(p.is_inverted());
        p.jump(15.0);
        assert_eq!(p.velocity, 15.0);
    }

    #[test]
    fn test_inverted_gravity_accelerates_upward() {
        let mut p = player();
        p.invert_gravity();
        p.tick();
        p.tick();
        assert_eq!(p.velocity, -2.0);
        assert_eq!(p.y(), 250.0 - 1.0 - 2.0);
    }
}
