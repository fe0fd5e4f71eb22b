//! Simulation configuration
//!
//! Catalogs and per-run settings. Gameplay tuning constants (cooldowns,
//! damage, decay rates) live next to the systems that use them.

use std::path::Path;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::core::types::Vec2;
use crate::roster::{default_roster, CharacterDef};
use crate::simulation::spawner::spawn_margin_ok;
use crate::world::{default_maps, MapDef};

/// Configuration for one simulation instance
///
/// Every field has a default, so a TOML file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seed for the enemy placement / impulse RNG
    pub seed: u64,

    /// Viewport size used by the camera follower (world units)
    pub view_width: f32,
    pub view_height: f32,

    /// Upper bound for every character's corruption
    pub corruption_limit: f32,

    /// Where the first player entity appears
    pub player_start: Vec2,

    /// Enemies spawned at construction, before the first tick
    pub initial_enemies: usize,

    /// Entries kept by `EventLog` (newest first)
    pub event_log_capacity: usize,

    /// Recommended ceiling for a single tick's dt; applied by `FrameClock`
    pub max_dt: f32,

    /// Index into `maps` selected at startup
    pub starting_map: usize,

    pub maps: Vec<MapDef>,
    pub roster: Vec<CharacterDef>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            view_width: 800.0,
            view_height: 600.0,
            corruption_limit: 100.0,
            player_start: Vec2::new(400.0, 300.0),
            initial_enemies: 3,
            event_log_capacity: 100,
            max_dt: 0.05,
            starting_map: 0,
            maps: default_maps(),
            roster: default_roster(),
        }
    }
}

impl SimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; missing fields keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SimConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.roster.is_empty() {
            return Err(SimError::InvalidConfig("roster must not be empty".into()));
        }
        if self.maps.is_empty() {
            return Err(SimError::InvalidConfig("map catalog must not be empty".into()));
        }
        if self.starting_map >= self.maps.len() {
            return Err(SimError::InvalidConfig(format!(
                "starting_map ({}) out of range for {} maps",
                self.starting_map,
                self.maps.len()
            )));
        }
        if !finite_positive(self.corruption_limit) {
            return Err(SimError::InvalidConfig(
                "corruption_limit must be positive".into(),
            ));
        }
        if !finite_positive(self.view_width) || !finite_positive(self.view_height) {
            return Err(SimError::InvalidConfig("view size must be positive".into()));
        }
        if !finite_positive(self.max_dt) {
            return Err(SimError::InvalidConfig("max_dt must be positive".into()));
        }
        if !self.player_start.x.is_finite() || !self.player_start.y.is_finite() {
            return Err(SimError::InvalidConfig("player_start must be finite".into()));
        }

        let mut seen = AHashSet::new();
        for def in &self.roster {
            if !seen.insert(def.id.as_str()) {
                return Err(SimError::InvalidConfig(format!(
                    "duplicate character id '{}'",
                    def.id
                )));
            }
            if !finite_positive(def.max_hp) {
                return Err(SimError::InvalidConfig(format!(
                    "character '{}' needs a positive max_hp",
                    def.id
                )));
            }
        }

        for map in &self.maps {
            if !finite_positive(map.spawn_rate) {
                return Err(SimError::InvalidConfig(format!(
                    "map '{}' needs a positive spawn_rate",
                    map.name
                )));
            }
            if !map.bounds.w.is_finite() || !map.bounds.h.is_finite() {
                return Err(SimError::InvalidConfig(format!(
                    "map '{}' needs finite bounds",
                    map.name
                )));
            }
            if !spawn_margin_ok(&map.bounds) {
                return Err(SimError::InvalidConfig(format!(
                    "map '{}' ({}x{}) is too small for the spawn inset",
                    map.name, map.bounds.w, map.bounds.h
                )));
            }
        }

        Ok(())
    }
}

/// Rejects NaN and infinities along with zero and negatives
fn finite_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
