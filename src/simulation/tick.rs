//! Tick system - orchestrates simulation updates
//!
//! Each tick advances the simulation by one externally supplied `dt`.
//! Combat commands resolve between ticks, so enemies they kill are removed
//! by the cleanup step of the very next tick.

use crate::core::types::Seconds;
use crate::simulation::corruption::apply_corruption;
use crate::simulation::engine::Simulation;
use crate::simulation::events::SimEvent;
use crate::simulation::spawner::spawn_enemy;

impl Simulation {
    /// Run a single simulation tick
    ///
    /// Does nothing while paused. Otherwise, in order:
    /// 1. Advance elapsed time
    /// 2. Move the player from held input and tick down the attack cooldown
    /// 3. Integrate enemy positions, then remove enemies with hp <= 0
    /// 4. Spawner check
    /// 5. Camera follow
    /// 6. Corruption decay over the whole roster
    ///
    /// Negative `dt` is treated as zero. Callers should cap `dt` (see
    /// `FrameClock`); this function does not.
    pub fn tick(&mut self, dt: Seconds) {
        if !self.run_state.is_running() {
            return;
        }
        let dt = dt.max(0.0);

        self.elapsed += dt;
        self.player.update(&self.input, dt);
        self.update_enemies(dt);
        self.run_spawner(dt);
        self.update_camera();
        self.run_corruption(dt);
    }

    fn update_enemies(&mut self, dt: Seconds) {
        for enemy in &mut self.enemies {
            enemy.body.advance(dt);
        }

        let mut defeated = Vec::new();
        self.enemies.retain(|enemy| {
            if enemy.is_defeated() {
                defeated.push(enemy.id);
                false
            } else {
                true
            }
        });

        for enemy in defeated {
            self.emit(SimEvent::EnemyDefeated { enemy });
        }
    }

    fn run_spawner(&mut self, dt: Seconds) {
        let map = &self.config.maps[self.map_index];
        if self.spawner.advance(dt, map) {
            let enemy = spawn_enemy(map, &mut self.rng);
            tracing::debug!(
                "Spawned enemy at ({:.0}, {:.0}) on '{}'",
                enemy.body.position.x,
                enemy.body.position.y,
                map.name
            );
            self.enemies.push(enemy);
        }
    }

    fn run_corruption(&mut self, dt: Seconds) {
        let report = apply_corruption(&mut self.roster, dt);

        if !report.critical.is_empty() {
            tracing::debug!(
                "{} character(s) in the critical corruption tier",
                report.critical.len()
            );
        }

        for index in report.newly_incapacitated {
            let character = self.character_name(index);
            self.emit(SimEvent::CharacterIncapacitated { character });
        }
    }
}
