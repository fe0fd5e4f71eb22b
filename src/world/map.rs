//! Static map catalog

use serde::{Deserialize, Serialize};

use crate::core::types::{clamp, Vec2};

/// World extents in world units, anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub w: f32,
    pub h: f32,
}

impl Bounds {
    pub fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }

    /// Clamp a point into `[margin, w - margin] x [margin, h - margin]`
    pub fn clamp_inset(&self, point: Vec2, margin: f32) -> Vec2 {
        Vec2::new(
            clamp(point.x, margin, self.w - margin),
            clamp(point.y, margin, self.h - margin),
        )
    }
}

/// A selectable stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDef {
    pub name: String,
    pub bounds: Bounds,
    /// Enemies per two seconds; the spawn threshold is `2 / spawn_rate`
    pub spawn_rate: f32,
}

impl MapDef {
    pub fn new(name: impl Into<String>, w: f32, h: f32, spawn_rate: f32) -> Self {
        Self {
            name: name.into(),
            bounds: Bounds::new(w, h),
            spawn_rate,
        }
    }
}

/// The prototype's three stages
pub fn default_maps() -> Vec<MapDef> {
    vec![
        MapDef::new("Tão Tão Distante (Corrompido)", 2000.0, 1200.0, 2.0),
        MapDef::new("Fenda Sombria", 1600.0, 1000.0, 1.2),
        MapDef::new("Planície dos Ecos", 2200.0, 1400.0, 2.5),
    ]
}
