//! Combat domain: player attacks, contact damage, and enemy patrol.

mod ai;
mod components;
mod resources;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{AttackState, Enemy, Invulnerable, Lives, PatrolAi};
pub use resources::{CombatInput, CombatTuning};

use bevy::prelude::*;

use crate::movement::MovementSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatInput>()
            .init_resource::<CombatTuning>()
            .add_systems(Startup, spawn::spawn_enemies)
            .add_systems(
                Update,
                (
                    systems::read_combat_input,
                    systems::update_combat_timers,
                    ai::update_patrol_ai,
                )
                    .in_set(MovementSet::Intent),
            )
            .add_systems(
                Update,
                (systems::process_player_attacks, systems::apply_contact_damage)
                    .after(MovementSet::Solve),
            );
    }
}
