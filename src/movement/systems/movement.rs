//! Movement domain: solver step and velocity write-back.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::RunStats;
use crate::movement::{Facing, GroundState, Motor, MoveIntent, Player};

/// One solver step per character per tick: feed the current velocity, grounded
/// flag, and intent; write the result back to the rigid body. On a triggered
/// jump the grounded flag is cleared immediately and the ground probe is
/// suppressed for the hang window, matching how the solver's grace counters
/// expect to be fed.
pub(crate) fn apply_movement(
    time: Res<Time>,
    gravity: Res<Gravity>,
    mut stats: ResMut<RunStats>,
    mut query: Query<(
        &MoveIntent,
        &mut Motor,
        &mut GroundState,
        &mut LinearVelocity,
        Has<Player>,
    )>,
) {
    let dt = time.delta_secs();

    for (intent, mut motor, mut ground, mut velocity, is_player) in &mut query {
        let result = motor.0.step(
            velocity.0,
            ground.grounded,
            intent.axis,
            intent.jump_down,
            gravity.0.y,
            dt,
        );
        velocity.0 = result.velocity;

        if result.jump_triggered {
            ground.grounded = false;
            ground.regrab_timer = motor.0.vertical().jump_hang_time;
            if is_player {
                stats.jumps += 1;
            }
            debug!("jump triggered, velocity.y = {}", velocity.y);
        }
    }
}

pub(crate) fn update_facing(mut query: Query<(&MoveIntent, &mut Facing)>) {
    for (intent, mut facing) in &mut query {
        if intent.axis < -0.5 {
            *facing = Facing::Left;
        } else if intent.axis > 0.5 {
            *facing = Facing::Right;
        }
    }
}
