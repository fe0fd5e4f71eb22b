//! Simulation - the single owner of all mutable game state
//!
//! Commands (`attack`, `use_skill`, `switch_to`, `set_paused`, `select_map`)
//! run synchronously between ticks. The per-tick pipeline lives in `tick.rs`.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::combat::{resolve_ability, resolve_melee, AbilityOutcome, AbilityTable, MeleeOutcome};
use crate::core::config::SimConfig;
use crate::core::error::Result;
use crate::core::types::{EntityId, Seconds, Vec2};
use crate::entity::{Enemy, MovementInput, PlayerEntity};
use crate::roster::{Character, Roster};
use crate::simulation::camera;
use crate::simulation::command::Command;
use crate::simulation::events::{LoggedEvent, SimEvent};
use crate::simulation::snapshot::{
    CharacterSnapshot, EnemySnapshot, MapSnapshot, PlayerSnapshot, SimSnapshot,
};
use crate::simulation::spawner::{spawn_enemy, Spawner};
use crate::simulation::state::RunState;
use crate::world::MapDef;

/// Inset used when re-placing the player after a switch or map change
pub const PLAYER_REPLACE_INSET: f32 = 100.0;

pub struct Simulation {
    pub(crate) config: SimConfig,
    pub(crate) run_state: RunState,
    pub(crate) elapsed: Seconds,
    pub(crate) map_index: usize,
    pub(crate) roster: Roster,
    pub(crate) abilities: AbilityTable,
    pub(crate) player: PlayerEntity,
    pub(crate) enemies: Vec<Enemy>,
    pub(crate) spawner: Spawner,
    pub(crate) camera: Vec2,
    pub(crate) input: MovementInput,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) pending_events: Vec<LoggedEvent>,
}

impl Simulation {
    /// Build with the standard ability table
    pub fn new(config: SimConfig) -> Result<Self> {
        Self::with_abilities(config, AbilityTable::standard())
    }

    /// Build with a custom ability table (for non-default rosters)
    pub fn with_abilities(config: SimConfig, abilities: AbilityTable) -> Result<Self> {
        config.validate()?;

        let roster = Roster::from_defs(&config.roster, config.corruption_limit);
        let map_index = config.starting_map;
        let player = PlayerEntity::new(roster.active_index(), config.player_start);
        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        let mut sim = Self {
            run_state: RunState::Running,
            elapsed: 0.0,
            map_index,
            roster,
            abilities,
            player,
            enemies: Vec::new(),
            spawner: Spawner::new(),
            camera: Vec2::ZERO,
            input: MovementInput::none(),
            rng,
            pending_events: Vec::new(),
            config,
        };

        for _ in 0..sim.config.initial_enemies {
            let enemy = spawn_enemy(&sim.config.maps[sim.map_index], &mut sim.rng);
            sim.enemies.push(enemy);
        }
        sim.update_camera();

        tracing::info!(
            "Simulation ready: map '{}', {} characters, {} enemies",
            sim.active_map().name,
            sim.roster.len(),
            sim.enemies.len()
        );
        sim.emit(SimEvent::Started { characters: sim.roster.len() });

        Ok(sim)
    }

    // === COMMANDS ===

    /// Replace the held-movement snapshot used by the next tick
    pub fn set_input(&mut self, input: MovementInput) {
        self.input = input;
    }

    /// Melee swing; `None` while the cooldown is running
    pub fn attack(&mut self) -> Option<MeleeOutcome> {
        let outcome = resolve_melee(
            &mut self.player,
            self.roster.active_character_mut(),
            &mut self.enemies,
        )?;

        let attacker = self.roster.active_character().name.clone();
        for hit in &outcome.hits {
            self.emit(SimEvent::EnemyHit {
                attacker: attacker.clone(),
                remaining_hp: hit.remaining_hp,
            });
        }
        self.emit(SimEvent::AttackUsed {
            character: attacker,
            hits: outcome.hits.len(),
        });

        Some(outcome)
    }

    /// Cast the active character's ability; `None` if its id has no entry
    pub fn use_skill(&mut self) -> Option<AbilityOutcome> {
        let caster = self.roster.active_index();
        let Some(ability) = self.abilities.get(&self.roster.active_character().id) else {
            tracing::warn!(
                "No ability registered for '{}'",
                self.roster.active_character().id
            );
            return None;
        };

        let outcome = resolve_ability(
            ability,
            caster,
            &mut self.roster,
            &mut self.enemies,
            &mut self.rng,
        )?;

        self.emit(SimEvent::AbilityUsed {
            character: self.roster.active_character().name.clone(),
            summary: outcome.summary.clone(),
        });

        Some(outcome)
    }

    /// Select the active character.
    ///
    /// Ignored when `index` is out of range or already active. Otherwise a new
    /// player entity replaces the old one at the old position, clamped into
    /// the map inset. Returns whether a switch happened.
    pub fn switch_to(&mut self, index: usize) -> bool {
        let Some(notice) = self.roster.switch_to(index) else {
            if index >= self.roster.len() {
                tracing::warn!("Ignoring switch to out-of-range slot {}", index);
            }
            return false;
        };

        self.replace_player(notice.to);

        let from = self.character_name(notice.from);
        let to = self.character_name(notice.to);
        self.emit(SimEvent::CharacterSwitched { from, to });
        true
    }

    /// Enter `Paused` (true) or `Running` (false). No-op if already there.
    pub fn set_paused(&mut self, paused: bool) {
        self.transition(RunState::from_paused(paused));
    }

    pub fn toggle_pause(&mut self) {
        self.transition(self.run_state.toggled());
    }

    /// Change stage.
    ///
    /// Ignored when `index` is invalid or current. Enemies stay; the spawn
    /// timer restarts and the player is re-clamped into the new bounds.
    pub fn select_map(&mut self, index: usize) -> bool {
        if index == self.map_index || index >= self.config.maps.len() {
            return false;
        }
        self.map_index = index;
        self.spawner.reset();
        self.player.body.position = self
            .active_map()
            .bounds
            .clamp_inset(self.player.body.position, PLAYER_REPLACE_INSET);
        self.update_camera();

        let name = self.active_map().name.clone();
        self.emit(SimEvent::MapChanged { name });
        true
    }

    /// Dispatch a command from the input layer
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Attack => {
                self.attack();
            }
            Command::UseSkill => {
                self.use_skill();
            }
            Command::SwitchTo(index) => {
                self.switch_to(index);
            }
            Command::TogglePause => self.toggle_pause(),
            Command::SetPaused(paused) => self.set_paused(paused),
        }
    }

    /// Place an enemy directly (scenario setup, tooling)
    pub fn spawn_enemy_at(&mut self, position: Vec2, velocity: Vec2) -> EntityId {
        let enemy = Enemy::new(position, velocity);
        let id = enemy.id;
        self.enemies.push(enemy);
        id
    }

    /// Take every event emitted since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<LoggedEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // === ACCESSORS ===

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_paused(&self) -> bool {
        !self.run_state.is_running()
    }

    pub fn elapsed(&self) -> Seconds {
        self.elapsed
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Character mutators clamp, so direct access cannot break the invariants
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn characters(&self) -> &[Character] {
        self.roster.characters()
    }

    pub fn active_character(&self) -> &Character {
        self.roster.active_character()
    }

    pub fn player(&self) -> &PlayerEntity {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn map_index(&self) -> usize {
        self.map_index
    }

    pub fn active_map(&self) -> &MapDef {
        &self.config.maps[self.map_index]
    }

    pub fn camera(&self) -> Vec2 {
        self.camera
    }

    pub fn spawn_timer(&self) -> Seconds {
        self.spawner.timer()
    }

    pub fn input(&self) -> MovementInput {
        self.input
    }

    pub fn snapshot(&self) -> SimSnapshot {
        let active = self.roster.active_index();
        SimSnapshot {
            elapsed: self.elapsed,
            paused: self.is_paused(),
            map: MapSnapshot::capture(self.map_index, self.active_map()),
            camera: self.camera,
            player: PlayerSnapshot {
                id: self.player.id,
                character_index: self.player.character_index,
                position: self.player.body.position,
                size: self.player.body.size,
                attack_cooldown: self.player.attack_cooldown,
            },
            characters: self
                .roster
                .characters()
                .iter()
                .enumerate()
                .map(|(i, c)| CharacterSnapshot::capture(c, i == active))
                .collect(),
            enemies: self.enemies.iter().map(EnemySnapshot::from).collect(),
            corruption_limit: self.config.corruption_limit,
            average_corruption: self.roster.average_corruption_fraction(),
        }
    }

    // === INTERNALS ===

    pub(crate) fn emit(&mut self, event: SimEvent) {
        tracing::info!(at = self.elapsed, "{}", event);
        self.pending_events.push(LoggedEvent {
            at: self.elapsed,
            event,
        });
    }

    pub(crate) fn update_camera(&mut self) {
        let view = Vec2::new(self.config.view_width, self.config.view_height);
        let bounds = self.config.maps[self.map_index].bounds;
        self.camera = camera::follow(self.player.body.position, view, &bounds);
    }

    pub(crate) fn character_name(&self, index: usize) -> String {
        self.roster
            .get(index)
            .map(|c| c.name.clone())
            .unwrap_or_default()
    }

    fn replace_player(&mut self, character_index: usize) {
        let position = self
            .active_map()
            .bounds
            .clamp_inset(self.player.body.position, PLAYER_REPLACE_INSET);
        self.player = PlayerEntity::new(character_index, position);
    }

    fn transition(&mut self, next: RunState) {
        if next == self.run_state {
            return;
        }
        self.run_state = next;
        match next {
            RunState::Paused => self.emit(SimEvent::Paused),
            RunState::Running => self.emit(SimEvent::Resumed),
        }
    }
}
