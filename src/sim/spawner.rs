//! Frame-counter-driven obstacle scheduling
//!
//! Barrier pairs spawn on a fixed cadence with a randomized hole; hazards
//! spawn on an independent cadence whose length is redrawn every time the
//! previous hazard leaves the playfield. At most one hazard is live.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::IdAllocator;
use super::obstacle::{Obstacle, ObstacleKind};
use super::rng::RandomSource;
use crate::config::GameConfig;

/// Barrier heights `(top, bottom)` for a hole drawn at `hole`.
///
/// Holes in the upper half open just below `hole`; holes in the lower half
/// open just above it. Either way `top + bottom + gap == field_height`.
pub fn barrier_heights(hole: i32, gap: f32, field_height: f32) -> (f32, f32) {
    let hole = hole as f32;
    if hole < field_height / 2.0 {
        (hole, field_height - (hole + gap))
    } else {
        (hole - gap, field_height - hole)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    /// Ticks since the last barrier spawn, modulo the spawn interval
    pub barrier_counter: u32,
    /// Ticks waited so far for the next hazard
    pub hazard_counter: u32,
    /// Ticks to wait for the next hazard
    pub hazard_interval: u32,
    /// A hazard is currently on the playfield
    pub hazard_live: bool,
}

impl Spawner {
    /// Counters at zero; draws the first hazard interval when hazards are enabled
    pub fn new(config: &GameConfig, rng: &mut impl RandomSource) -> Self {
        let hazard_interval = if config.hazards_enabled {
            draw_hazard_interval(config, rng)
        } else {
            0
        };
        Self {
            barrier_counter: 0,
            hazard_counter: 0,
            hazard_interval,
            hazard_live: false,
        }
    }

    /// Advance both cadences one tick, returning any newly spawned obstacles
    /// in spawn order (top barrier, bottom barrier, hazard).
    pub fn tick(
        &mut self,
        config: &GameConfig,
        rng: &mut impl RandomSource,
        ids: &mut IdAllocator,
    ) -> Vec<Obstacle> {
        let mut spawned = Vec::new();

        if self.barrier_counter == 0 {
            let hole = rng.range_inclusive(config.hole_min, config.hole_max);
            spawned.extend(spawn_barrier_pair(config, hole, ids));
        }
        self.barrier_counter = (self.barrier_counter + 1) % config.barrier_spawn_interval;

        if config.hazards_enabled && !self.hazard_live {
            self.hazard_counter += 1;
            if self.hazard_counter >= self.hazard_interval {
                let top = config.hole_min;
                let bottom = config.hole_max - config.hazard_height.ceil() as i32;
                let y = rng.range_inclusive(top, bottom.max(top)) as f32;
                let hazard = Obstacle::hazard(
                    ids.next_id(),
                    Vec2::new(config.playfield_width, y),
                    Vec2::new(config.hazard_width, config.hazard_height),
                    config.hazard_speed,
                );
                log::debug!("Hazard {} spawned at y={}", hazard.id(), y);
                spawned.push(hazard);
                self.hazard_live = true;
                self.hazard_counter = 0;
            }
        }

        spawned
    }

    /// The live hazard left the playfield; start a fresh cadence
    pub fn hazard_removed(&mut self, config: &GameConfig, rng: &mut impl RandomSource) {
        self.hazard_live = false;
        self.hazard_counter = 0;
        self.hazard_interval = draw_hazard_interval(config, rng);
    }
}

fn draw_hazard_interval(config: &GameConfig, rng: &mut impl RandomSource) -> u32 {
    rng.range_inclusive(config.hazard_interval_min, config.hazard_interval_max)
        .max(1) as u32
}

/// Two barriers at the right edge framing a gap around `hole`
fn spawn_barrier_pair(config: &GameConfig, hole: i32, ids: &mut IdAllocator) -> [Obstacle; 2] {
    let (top_height, bottom_height) =
        barrier_heights(hole, config.gap_height, config.playfield_height);
    let x = config.playfield_width;
    let gap_id = ids.next_id();

    let top = Obstacle::barrier(
        gap_id,
        ObstacleKind::TopBarrier,
        gap_id,
        Vec2::new(x, config.top_barrier_offset),
        Vec2::new(config.barrier_width, top_height),
        config.barrier_speed,
    );
    let bottom = Obstacle::barrier(
        ids.next_id(),
        ObstacleKind::BottomBarrier,
        gap_id,
        Vec2::new(x, config.playfield_height - bottom_height),
        Vec2::new(config.barrier_width, bottom_height),
        config.barrier_speed,
    );
    log::debug!(
        "Barrier pair {} spawned: hole={}, top={}, bottom={}",
        gap_id,
        hole,
        top_height,
        bottom_height
    );

    [top, bottom]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::testing::ScriptedRng;
    use crate::sim::rng::SeededRng;
    use proptest::prelude::*;

    #[test]
    fn test_barrier_heights_both_branches() {
        // Lower-half hole: gap opens above it
        assert_eq!(barrier_heights(300, 150.0, 600.0), (150.0, 300.0));
        // Upper-half hole: gap opens below it
        assert_eq!(barrier_heights(200, 150.0, 600.0), (200.0, 250.0));
        assert_eq!(barrier_heights(150, 150.0, 600.0), (150.0, 300.0));
        assert_eq!(barrier_heights(450, 150.0, 600.0), (300.0, 150.0));
    }

    #[test]
    fn test_first_tick_spawns_pair_at_right_edge() {
        let config = GameConfig::default();
        let mut rng = ScriptedRng::new([300]);
        let mut ids = IdAllocator::default();
        let mut spawner = Spawner::new(&config, &mut rng);

        let spawned = spawner.tick(&config, &mut rng, &mut ids);
        assert_eq!(spawned.len(), 2);

        let (top, bottom) = (&spawned[0], &spawned[1]);
        assert_eq!(top.kind, ObstacleKind::TopBarrier);
        assert_eq!(bottom.kind, ObstacleKind::BottomBarrier);
        assert_eq!(top.gap_id, bottom.gap_id);
        assert_eq!(top.entity.pos, Vec2::new(800.0, 0.0));
        assert_eq!(top.entity.size, Vec2::new(100.0, 150.0));
        assert_eq!(bottom.entity.pos, Vec2::new(800.0, 300.0));
        assert_eq!(bottom.entity.size, Vec2::new(100.0, 300.0));
        assert_eq!(top.entity.size.y + bottom.entity.size.y + config.gap_height, 600.0);
    }

    #[test]
    fn test_barrier_cadence_wraps_at_interval() {
        let config = GameConfig {
            barrier_spawn_interval: 3,
            ..Default::default()
        };
        let mut rng = SeededRng::new(1);
        let mut ids = IdAllocator::default();
        let mut spawner = Spawner::new(&config, &mut rng);

        let counts: Vec<usize> = (0..7)
            .map(|_| spawner.tick(&config, &mut rng, &mut ids).len())
            .collect();
        assert_eq!(counts, vec![2, 0, 0, 2, 0, 0, 2]);
    }

    #[test]
    fn test_single_hazard_until_removed() {
        let config = GameConfig {
            hazards_enabled: true,
            hazard_interval_min: 2,
            hazard_interval_max: 2,
            barrier_spawn_interval: 1000,
            ..Default::default()
        };
        let mut rng = SeededRng::new(3);
        let mut ids = IdAllocator::default();
        let mut spawner = Spawner::new(&config, &mut rng);

        let hazards = |v: Vec<Obstacle>| v.iter().filter(|o| o.kind == ObstacleKind::Hazard).count();

        assert_eq!(hazards(spawner.tick(&config, &mut rng, &mut ids)), 0);
        assert_eq!(hazards(spawner.tick(&config, &mut rng, &mut ids)), 1);
        assert!(spawner.hazard_live);
        for _ in 0..10 {
            assert_eq!(hazards(spawner.tick(&config, &mut rng, &mut ids)), 0);
        }

        spawner.hazard_removed(&config, &mut rng);
        assert!(!spawner.hazard_live);
        assert_eq!(hazards(spawner.tick(&config, &mut rng, &mut ids)), 0);
        assert_eq!(hazards(spawner.tick(&config, &mut rng, &mut ids)), 1);
    }

    #[test]
    fn test_hazard_spawns_inside_hole_band() {
        let config = GameConfig::from_preset(crate::config::Preset::Spikes);
        let mut rng = SeededRng::new(11);
        let mut ids = IdAllocator::default();
        let mut spawner = Spawner::new(&config, &mut rng);

        let mut seen = 0;
        for _ in 0..5000 {
            for o in spawner.tick(&config, &mut rng, &mut ids) {
                if o.kind == ObstacleKind::Hazard {
                    seen += 1;
                    let b = o.bounds();
                    assert!(b.min.y >= config.hole_min as f32);
                    assert!(b.max.y <= config.hole_max as f32);
                    spawner.hazard_removed(&config, &mut rng);
                }
            }
        }
        assert!(seen > 0);
    }

    #[test]
    fn test_no_hazards_when_disabled() {
        let config = GameConfig::default();
        let mut rng = SeededRng::new(5);
        let mut ids = IdAllocator::default();
        let mut spawner = Spawner::new(&config, &mut rng);
        for _ in 0..1000 {
            assert!(spawner
                .tick(&config, &mut rng, &mut ids)
                .iter()
                .all(|o| o.kind.is_barrier()));
        }
    }

    proptest! {
        #[test]
        fn prop_pair_heights_fill_playfield(seed in any::<u64>()) {
            let config = GameConfig::default();
            let mut rng = SeededRng::new(seed);
            let mut ids = IdAllocator::default();
            let mut spawner = Spawner::new(&config, &mut rng);

            let spawned = spawner.tick(&config, &mut rng, &mut ids);
            let top = spawned[0].entity.size.y;
            let bottom = spawned[1].entity.size.y;
            prop_assert!(top > 0.0 && bottom > 0.0);
            prop_assert_eq!(top + bottom + config.gap_height, config.playfield_height);
            prop_assert_eq!(spawned[1].bounds().max.y, config.playfield_height);
        }

        #[test]
        fn prop_heights_sum_for_any_hole(hole in 150i32..=450) {
            let (top, bottom) = barrier_heights(hole, 150.0, 600.0);
            prop_assert_eq!(top + bottom + 150.0, 600.0);
        }
    }
}
