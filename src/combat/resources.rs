//! Combat domain: input and tuning resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Default)]
pub struct CombatInput {
    pub attack_pressed: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct CombatTuning {
    pub attack_cooldown: f32,
    /// Seconds the attack probe stays active after a swing starts.
    pub attack_buffer: f32,
    pub attack_radius: f32,
    /// Invulnerability window after taking contact damage.
    pub contact_invuln: f32,
    pub knockback_speed: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            attack_cooldown: 0.2,
            attack_buffer: 0.3,
            attack_radius: 0.5,
            contact_invuln: 0.2,
            knockback_speed: 8.0,
        }
    }
}
