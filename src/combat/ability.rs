//! Character abilities
//!
//! Each character id maps to one `Ability` descriptor in an `AbilityTable`;
//! `resolve_ability` evaluates any descriptor the same way.

use ahash::AHashMap;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::constants::*;
use crate::core::rng::symmetric;
use crate::core::types::Vec2;
use crate::entity::Enemy;
use crate::roster::Roster;

/// A single effect an ability applies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AbilityEffect {
    /// Flat damage to every live enemy
    DamageAll(f32),
    /// Add a uniform random velocity in `[-x, x) x [-y, y)` to every enemy
    ImpulseAll(Vec2),
    /// Restore the caster's hp (clamped to max)
    HealSelf(f32),
    /// Reduce every character's corruption (floored at 0)
    CleanseAll(f32),
}

/// Descriptor for one character's ability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    /// Human-readable line for the event log
    pub summary: String,
    pub effects: Vec<AbilityEffect>,
    /// Added to the caster after the effects resolve
    pub corruption_cost: f32,
}

impl Ability {
    pub fn new(summary: &str, effects: Vec<AbilityEffect>, corruption_cost: f32) -> Self {
        Self {
            summary: summary.to_string(),
            effects,
            corruption_cost,
        }
    }
}

/// Result of casting an ability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityOutcome {
    pub caster: String,
    pub summary: String,
    pub enemies_affected: usize,
}

/// Character id -> ability descriptor
#[derive(Debug, Clone, Default)]
pub struct AbilityTable {
    by_id: AHashMap<String, Ability>,
}

impl AbilityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The prototype's five abilities, keyed by the default roster ids
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.insert(
            "shrek",
            Ability::new(
                "Shrek performs a seismic slam!",
                vec![AbilityEffect::DamageAll(TANK_DAMAGE)],
                TANK_CORRUPTION_COST,
            ),
        );
        table.insert(
            "freeza",
            Ability::new(
                "Freeza fires an intense barrage!",
                vec![AbilityEffect::DamageAll(OFFENSE_DAMAGE)],
                OFFENSE_CORRUPTION_COST,
            ),
        );
        table.insert(
            "lula",
            Ability::new(
                "Lula plays a melody: confusion!",
                vec![AbilityEffect::ImpulseAll(CONTROL_IMPULSE)],
                CONTROL_CORRUPTION_COST,
            ),
        );
        table.insert(
            "choque",
            Ability::new(
                "Super Choque raises an electric shield!",
                vec![AbilityEffect::HealSelf(AGILITY_HEAL)],
                AGILITY_CORRUPTION_COST,
            ),
        );
        table.insert(
            "bmo",
            Ability::new(
                "BMO repairs memories and heals!",
                vec![
                    AbilityEffect::HealSelf(SUPPORT_HEAL),
                    AbilityEffect::CleanseAll(SUPPORT_CLEANSE),
                ],
                0.0,
            ),
        );
        table
    }

    pub fn insert(&mut self, id: &str, ability: Ability) {
        self.by_id.insert(id.to_string(), ability);
    }

    pub fn get(&self, id: &str) -> Option<&Ability> {
        self.by_id.get(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Apply `ability` as cast by roster slot `caster`.
///
/// Returns `None` if `caster` is not a valid slot.
pub fn resolve_ability<R: Rng>(
    ability: &Ability,
    caster: usize,
    roster: &mut Roster,
    enemies: &mut [Enemy],
    rng: &mut R,
) -> Option<AbilityOutcome> {
    let caster_id = roster.get(caster)?.id.clone();
    let mut enemies_affected = 0;

    for effect in &ability.effects {
        match *effect {
            AbilityEffect::DamageAll(amount) => {
                for enemy in enemies.iter_mut() {
                    enemy.hp -= amount;
                }
                enemies_affected = enemies_affected.max(enemies.len());
            }
            AbilityEffect::ImpulseAll(range) => {
                for enemy in enemies.iter_mut() {
                    enemy.body.velocity +=
                        Vec2::new(symmetric(rng, range.x), symmetric(rng, range.y));
                }
                enemies_affected = enemies_affected.max(enemies.len());
            }
            AbilityEffect::HealSelf(amount) => {
                roster.characters_mut()[caster].adjust_hp(amount);
            }
            AbilityEffect::CleanseAll(amount) => {
                for character in roster.characters_mut() {
                    character.adjust_corruption(-amount);
                }
            }
        }
    }

    if ability.corruption_cost != 0.0 {
        roster.characters_mut()[caster].adjust_corruption(ability.corruption_cost);
    }

    Some(AbilityOutcome {
        caster: caster_id,
        summary: ability.summary.clone(),
        enemies_affected,
    })
}
