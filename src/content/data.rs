//! Content domain: definition types deserialized from RON files.

use serde::{Deserialize, Serialize};

use crate::movement::{HorizontalTuning, VerticalTuning};

/// Top-level wrapper for a RON data file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

/// Body extent and probe sizing for one character archetype.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BodyDef {
    pub half_width: f32,
    pub half_height: f32,
    pub ground_check_radius: f32,
}

impl BodyDef {
    pub fn half_extent(&self) -> bevy::math::Vec2 {
        bevy::math::Vec2::new(self.half_width, self.half_height)
    }
}

/// Movement tuning for one character archetype (characters.ron).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CharacterDef {
    pub id: String,
    pub horizontal: HorizontalTuning,
    pub vertical: VerticalTuning,
    pub body: BodyDef,
}

impl CharacterDef {
    /// Built-in defaults used when a definition is missing or rejected.
    pub fn fallback(id: &str) -> Self {
        Self {
            id: id.to_string(),
            horizontal: HorizontalTuning::default(),
            vertical: VerticalTuning::default(),
            body: BodyDef {
                half_width: 0.35,
                half_height: 0.8,
                ground_check_radius: 0.2,
            },
        }
    }
}
