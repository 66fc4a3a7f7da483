use egui::Color32;

use crate::error::PlaygroundError;
use crate::geometry;

/// Tunables for a playground session.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(default)] // missing fields fall back to their defaults
pub struct PlaygroundConfig {
    /// World units per half viewport height.
    pub scale: f32,
    /// Reorder AABB corners into min/max before every AABB computation.
    pub normalize_aabb: bool,
    pub background: Color32,
    /// Color of the markers drawn where shapes intersect.
    pub intersection_color: Color32,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            normalize_aabb: true,
            background: Color32::WHITE,
            intersection_color: Color32::from_rgb(0, 127, 0),
        }
    }
}

impl PlaygroundConfig {
    pub fn from_json(json: &str) -> Result<Self, PlaygroundError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, PlaygroundError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Pushes the engine-wide policies of this config.
    pub fn apply(&self) {
        if geometry::aabb_normalization() != self.normalize_aabb {
            log::info!("AABB corner normalization set to {}", self.normalize_aabb);
        }
        geometry::set_aabb_normalization(self.normalize_aabb);
    }
}
