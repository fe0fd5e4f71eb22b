//! Time-driven enemy creation
//!
//! A fixed-threshold accumulator: once the timer exceeds `2 / spawn_rate`
//! seconds it resets to zero (overflow is discarded) and exactly one enemy
//! appears.

use rand::Rng;

use crate::core::rng::{symmetric, uniform};
use crate::core::types::{Seconds, Vec2};
use crate::entity::Enemy;
use crate::world::{Bounds, MapDef};

/// Inset from the top/left edges for spawn positions
pub const SPAWN_NEAR_INSET: f32 = 100.0;
/// Inset from the bottom/right edges for spawn positions
pub const SPAWN_FAR_INSET: f32 = 200.0;
/// Half-range of the random drift velocity on each axis
pub const SPAWN_DRIFT: Vec2 = Vec2 { x: 40.0, y: 30.0 };
/// Seconds between spawns at `spawn_rate == 1`
pub const SPAWN_PERIOD_SCALE: f32 = 2.0;

/// Whether a map leaves a non-empty spawn rectangle
pub fn spawn_margin_ok(bounds: &Bounds) -> bool {
    bounds.w > SPAWN_NEAR_INSET + SPAWN_FAR_INSET && bounds.h > SPAWN_NEAR_INSET + SPAWN_FAR_INSET
}

/// Seconds the timer must exceed before the next spawn
pub fn spawn_threshold(map: &MapDef) -> Seconds {
    SPAWN_PERIOD_SCALE / map.spawn_rate
}

/// Build one enemy at a uniform position in
/// `[100, w - 200) x [100, h - 200)` with a small random drift.
pub fn spawn_enemy<R: Rng>(map: &MapDef, rng: &mut R) -> Enemy {
    let position = Vec2::new(
        uniform(rng, SPAWN_NEAR_INSET, map.bounds.w - SPAWN_FAR_INSET),
        uniform(rng, SPAWN_NEAR_INSET, map.bounds.h - SPAWN_FAR_INSET),
    );
    let velocity = Vec2::new(symmetric(rng, SPAWN_DRIFT.x), symmetric(rng, SPAWN_DRIFT.y));
    Enemy::new(position, velocity)
}

/// Spawn accumulator
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spawner {
    timer: Seconds,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timer(&self) -> Seconds {
        self.timer
    }

    pub fn reset(&mut self) {
        self.timer = 0.0;
    }

    /// Accumulate `dt`; returns true (and resets) when a spawn is due
    pub fn advance(&mut self, dt: Seconds, map: &MapDef) -> bool {
        self.timer += dt;
        if self.timer > spawn_threshold(map) {
            self.timer = 0.0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rift() -> MapDef {
        MapDef::new("Fenda Sombria", 1600.0, 1000.0, 1.2)
    }

    #[test]
    fn test_threshold_from_rate() {
        assert!((spawn_threshold(&rift()) - 1.666_666_7).abs() < 1e-5);
    }

    #[test]
    fn test_no_spawn_before_threshold() {
        let map = rift();
        let mut spawner = Spawner::new();
        for _ in 0..33 {
            assert!(!spawner.advance(0.05, &map));
        }
        assert!((spawner.timer() - 1.65).abs() < 1e-4);
    }

    #[test]
    fn test_spawn_resets_without_carry_over() {
        let map = rift();
        let mut spawner = Spawner::new();
        assert!(!spawner.advance(1.0, &map));
        assert!(spawner.advance(1.0, &map));
        assert_eq!(spawner.timer(), 0.0);
    }

    #[test]
    fn test_one_spawn_per_crossing_even_with_huge_dt() {
        let map = rift();
        let mut spawner = Spawner::new();
        assert!(spawner.advance(10.0, &map));
        assert!(!spawner.advance(0.0, &map));
    }

    #[test]
    fn test_spawned_enemy_in_inset_rect() {
        let map = rift();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let e = spawn_enemy(&map, &mut rng);
            let p = e.body.position;
            assert!(p.x >= 100.0 && p.x < 1400.0, "x out of range: {}", p.x);
            assert!(p.y >= 100.0 && p.y < 800.0, "y out of range: {}", p.y);
            assert!(e.body.velocity.x.abs() <= 40.0);
            assert!(e.body.velocity.y.abs() <= 30.0);
            assert_eq!(e.hp, 60.0);
        }
    }

    #[test]
    fn test_spawn_margin() {
        assert!(spawn_margin_ok(&Bounds::new(301.0, 301.0)));
        assert!(!spawn_margin_ok(&Bounds::new(300.0, 1000.0)));
    }
}
