//! Camera follower
//!
//! Pure function of player position, view size and map bounds.

use crate::core::types::{clamp, Vec2};
use crate::world::Bounds;

/// Top-left view offset centred on `player`, clamped into
/// `[0, w - view_w] x [0, h - view_h]`. Never negative, even when the map is
/// smaller than the view.
pub fn follow(player: Vec2, view: Vec2, bounds: &Bounds) -> Vec2 {
    Vec2::new(
        clamp(player.x - view.x / 2.0, 0.0, bounds.w - view.x),
        clamp(player.y - view.y / 2.0, 0.0, bounds.h - view.y),
    )
}
