//! Stage definitions and world bounds

pub mod map;

pub use map::{default_maps, Bounds, MapDef};
