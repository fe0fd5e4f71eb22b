//! Rift Core - real-time simulation core for a character-swapping action prototype

pub mod combat;
pub mod core;
pub mod entity;
pub mod roster;
pub mod simulation;
pub mod world;

pub use crate::core::{Result, SimConfig, SimError};
pub use crate::simulation::{Command, Simulation};
