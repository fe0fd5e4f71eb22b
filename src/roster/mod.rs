//! Character roster
//!
//! Per-character hp and corruption live here and outlast every player
//! entity built on top of them.

pub mod character;
pub mod registry;

pub use character::{default_roster, Character, CharacterDef, Role};
pub use registry::{Roster, SwitchNotice};
