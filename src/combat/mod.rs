//! Combat resolution: rate-limited melee and per-character abilities

pub mod ability;
pub mod constants;
pub mod melee;

pub use ability::{resolve_ability, Ability, AbilityEffect, AbilityOutcome, AbilityTable};
pub use melee::{melee_hitbox, resolve_melee, MeleeHit, MeleeOutcome};
