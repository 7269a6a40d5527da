//! Movement domain: the character-movement core and its ECS glue.
//!
//! `solver` and `probes` hold the engine-agnostic logic; the systems feed them
//! from the physics world once per tick and apply the results back.

mod bootstrap;
mod components;
mod dev;
pub mod probes;
pub mod solver;
mod systems;


pub use components::{
    BodyProbes, CharacterBody, Facing, GameLayer, GroundState, Motor, MoveIntent, Player,
};
pub use dev::Ground;
pub use probes::ProbeSet;
pub use solver::{HorizontalTuning, MoveResult, MovementSolver, VerticalState, VerticalTuning};

use bevy::prelude::*;

/// Update-schedule phases for the movement pipeline. Combat hooks into these:
/// patrol AI writes intents in `Intent`, attack resolution runs after `Solve`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementSet {
    /// Probe refresh and ground detection.
    Sense,
    /// Input sampling and AI intent writing.
    Intent,
    /// Solver step, velocity write-back, facing.
    Solve,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (MovementSet::Sense, MovementSet::Intent, MovementSet::Solve).chain(),
        )
        .add_systems(Startup, (dev::spawn_test_room, bootstrap::spawn_player))
        .add_systems(
            Update,
            (systems::update_probes, systems::detect_ground)
                .chain()
                .in_set(MovementSet::Sense),
        )
        .add_systems(Update, systems::read_input.in_set(MovementSet::Intent))
        .add_systems(
            Update,
            (systems::apply_movement, systems::update_facing)
                .chain()
                .in_set(MovementSet::Solve),
        );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, dev::draw_probe_gizmos.after(MovementSet::Sense));
    }
}
