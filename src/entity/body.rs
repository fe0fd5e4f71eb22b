//! Physical body shared by the player and enemies

use serde::{Deserialize, Serialize};

use crate::core::types::{Seconds, Vec2};

/// Axis-aligned box with a velocity.
///
/// `position` is the top-left corner; the box spans
/// `[x, x + w) x [y, y + h)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Integrate position by velocity * dt
    pub fn advance(&mut self, dt: Seconds) {
        self.position += self.velocity * dt;
    }

    fn has_area(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }

    /// True iff the interiors overlap on both axes.
    ///
    /// Touching edges and degenerate (zero-width or zero-height) boxes never
    /// collide. Symmetric in its arguments.
    pub fn overlaps(&self, other: &Body) -> bool {
        if !self.has_area() || !other.has_area() {
            return false;
        }
        let a = self.position;
        let b = other.position;
        a.x < b.x + other.size.x
            && a.x + self.size.x > b.x
            && a.y < b.y + other.size.y
            && a.y + self.size.y > b.y
    }
}
