//! Held movement keys, supplied by the input layer each frame

use serde::{Deserialize, Serialize};

use crate::core::types::Vec2;

/// Snapshot of the four movement directions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementInput {
    pub fn none() -> Self {
        Self::default()
    }

    /// Unit-length direction (or zero); diagonals are normalized
    pub fn direction(&self) -> Vec2 {
        let mut dx = 0.0;
        let mut dy = 0.0;
        if self.left {
            dx -= 1.0;
        }
        if self.right {
            dx += 1.0;
        }
        if self.up {
            dy -= 1.0;
        }
        if self.down {
            dy += 1.0;
        }
        Vec2::new(dx, dy).normalize()
    }
}
