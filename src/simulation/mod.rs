//! Simulation core
//!
//! `Simulation` owns every piece of mutable state. Each subsystem here is a
//! plain function or small struct the orchestrator composes once per tick:
//! input -> movement -> enemy physics/cleanup -> spawn -> camera -> corruption.

pub mod camera;
pub mod clock;
pub mod command;
pub mod corruption;
pub mod engine;
pub mod events;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use clock::{clamp_dt, FrameClock};
pub use command::Command;
pub use corruption::{apply_corruption, corruption_tier, CorruptionReport, CorruptionTier};
pub use engine::Simulation;
pub use events::{EventLog, LoggedEvent, SimEvent};
pub use snapshot::{CharacterSnapshot, EnemySnapshot, MapSnapshot, PlayerSnapshot, SimSnapshot};
pub use spawner::{spawn_enemy, spawn_threshold, Spawner};
pub use state::RunState;
