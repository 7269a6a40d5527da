//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::probes::ProbeSet;
use crate::movement::solver::MovementSolver;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, walls)
    Ground,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
}

#[derive(Component, Debug)]
pub struct Player;

/// Per-entity movement solver instance. One per simulated character; the
/// solver's grace counters are never shared across entities.
#[derive(Component, Debug)]
pub struct Motor(pub MovementSolver);

/// Body extent used to place the collision probes.
#[derive(Component, Debug)]
pub struct CharacterBody {
    pub half_extent: Vec2,
    pub ground_check_radius: f32,
}

/// Probe points recomputed each tick from the current transform.
#[derive(Component, Debug, Default)]
pub struct BodyProbes(pub ProbeSet);

/// Grounded flag as fed to the solver, plus the post-jump window during which
/// the ground probe is ignored (it would still overlap the takeoff surface).
#[derive(Component, Debug, Default)]
pub struct GroundState {
    pub grounded: bool,
    pub regrab_timer: f32,
}

/// Per-tick movement input for one character. The input system fills this for
/// the player; patrol AI fills it for enemies. Both feed the same solver.
#[derive(Component, Debug, Default)]
pub struct MoveIntent {
    pub axis: f32,
    pub jump_down: bool,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}
