//! Movement domain: the per-tick velocity solver for platformer locomotion.
//!
//! `MovementSolver` is engine-agnostic: it never touches the physics world.
//! Once per simulation tick the caller hands it the body's current velocity,
//! the grounded flag, the raw horizontal axis, and the jump button state; it
//! returns the new velocity plus a flag saying whether a jump fired this tick.
//! The only state kept between ticks is what the jump grace periods and the
//! turn throttle need, so every simulated character owns its own instance.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Horizontal tuning. Damping values are the fraction of velocity shed per
/// damping-constant unit, so higher means a harder stop.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HorizontalTuning {
    pub max_velocity: f32,
    /// Damping while grounded and actively moving.
    pub damping_movement: f32,
    /// Damping while the effective axis is zero.
    pub damping_stop: f32,
    /// Damping while airborne and rising.
    pub damping_jump: f32,
    /// Damping while airborne and falling.
    pub damping_fall: f32,
    /// Exponent scale for the damping curve; larger decays faster.
    pub damping_constant: f32,
    /// Fraction of max velocity the character must shed before an input
    /// reversal is allowed to stick. 0 = reversals always stick.
    pub turn_rate: f32,
    /// Per-tick ramp of the input throttle after a suppressed turn, in [0, 0.1].
    pub turn_recover: f32,
}

impl Default for HorizontalTuning {
    fn default() -> Self {
        Self {
            max_velocity: 9.0,
            damping_movement: 0.5,
            damping_stop: 0.95,
            damping_jump: 0.35,
            damping_fall: 0.3,
            damping_constant: 12.0,
            turn_rate: 0.2,
            turn_recover: 0.05,
        }
    }
}

/// Vertical tuning. `jump_hang_time` and `jump_buffer_length` are the two
/// grace windows that make jump timing forgiving.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerticalTuning {
    /// Jump impulse magnitude; velocity.y is set to this on a trigger.
    pub max_velocity: f32,
    /// Extra gravity scale while falling (>= 1). Makes descents snappier.
    pub fall_multiplier: f32,
    /// Gravity scale while rising with the jump button released (>= 1).
    /// Lets the player cut a jump short.
    pub controllable_jump_multiplier: f32,
    /// Seconds a jump stays triggerable after leaving the ground.
    pub jump_hang_time: f32,
    /// Seconds a jump press stays pending before landing.
    pub jump_buffer_length: f32,
}

impl Default for VerticalTuning {
    fn default() -> Self {
        Self {
            max_velocity: 14.0,
            fall_multiplier: 2.5,
            controllable_jump_multiplier: 2.0,
            jump_hang_time: 0.12,
            jump_buffer_length: 0.1,
        }
    }
}

/// Outcome of one solver tick. The caller applies the velocity to its rigid
/// body and reacts to `jump_triggered` (clear grounded, count the jump, ...).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    pub velocity: Vec2,
    pub jump_triggered: bool,
}

/// Vertical phase for damping selection, derived fresh each tick from the
/// grounded flag and the sign of vertical velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalState {
    Grounded,
    Rising,
    Falling,
}

impl VerticalState {
    /// Airborne with near-zero vertical velocity counts as `Grounded` so the
    /// apex of a jump uses the ordinary movement damping.
    pub fn classify(is_grounded: bool, vertical_velocity: f32) -> Self {
        if is_grounded {
            VerticalState::Grounded
        } else if vertical_velocity > 0.01 {
            VerticalState::Rising
        } else if vertical_velocity < -0.01 {
            VerticalState::Falling
        } else {
            VerticalState::Grounded
        }
    }
}

/// Per-character movement solver. Call [`MovementSolver::step`] exactly once
/// per simulation tick, in order; the grace counters are plain linear decays
/// and are only ever sign-tested, so they may go negative between resets.
#[derive(Debug, Clone)]
pub struct MovementSolver {
    horizontal: HorizontalTuning,
    vertical: VerticalTuning,
    jump_hang_counter: f32,
    jump_buffer_counter: f32,
    jump_down_last: bool,
    /// Throttle on the applied axis after a suppressed turn: reset to 0 when a
    /// turn is suppressed, ramps back up by `turn_recover` each tick.
    recover_axis: f32,
}

impl MovementSolver {
    pub fn new(horizontal: HorizontalTuning, vertical: VerticalTuning) -> Self {
        Self {
            horizontal,
            vertical,
            jump_hang_counter: 0.0,
            jump_buffer_counter: 0.0,
            jump_down_last: false,
            recover_axis: 1.0,
        }
    }

    pub fn horizontal(&self) -> &HorizontalTuning {
        &self.horizontal
    }

    pub fn vertical(&self) -> &VerticalTuning {
        &self.vertical
    }

    /// Advance one tick. `axis` is the raw horizontal input; its magnitude is
    /// added to velocity.x directly (per-tick contribution, deliberately not
    /// scaled by `dt` — matching how the damping constants were tuned).
    /// `gravity_y` is the world gravity along Y, negative when pointing down;
    /// only the extra shaping terms are applied here, the base pull stays
    /// with the physics engine.
    pub fn step(
        &mut self,
        velocity: Vec2,
        is_grounded: bool,
        axis: f32,
        jump_down: bool,
        gravity_y: f32,
        dt: f32,
    ) -> MoveResult {
        let mut velocity = velocity;

        let jump_down_event = !self.jump_down_last && jump_down;
        self.jump_down_last = jump_down;

        let jump_triggered = self.solve_vertical(
            &mut velocity,
            is_grounded,
            jump_down,
            jump_down_event,
            gravity_y,
            dt,
        );
        self.solve_horizontal(&mut velocity, axis, is_grounded, dt);

        MoveResult {
            velocity,
            jump_triggered,
        }
    }

    fn solve_vertical(
        &mut self,
        velocity: &mut Vec2,
        is_grounded: bool,
        jump_down: bool,
        jump_down_event: bool,
        gravity_y: f32,
        dt: f32,
    ) -> bool {
        let v = &self.vertical;
        let mut jump_triggered = false;

        self.jump_hang_counter = if is_grounded {
            v.jump_hang_time
        } else {
            self.jump_hang_counter - dt
        };
        self.jump_buffer_counter = if jump_down_event {
            v.jump_buffer_length
        } else {
            self.jump_buffer_counter - dt
        };

        // A press slightly before landing (buffer) or slightly after leaving
        // the ground (hang) still registers as a perfectly timed jump.
        if self.jump_buffer_counter >= 0.0 && self.jump_hang_counter > 0.0 {
            velocity.y = v.max_velocity;
            // Zero both so the same press cannot fire twice.
            self.jump_hang_counter = 0.0;
            self.jump_buffer_counter = 0.0;
            jump_triggered = true;
        }

        // Gravity shaping: at most one extra term per tick, on top of the
        // engine's base gravity.
        if !jump_down && velocity.y > 0.0 {
            velocity.y += gravity_y * (v.controllable_jump_multiplier - 1.0) * dt;
        } else if velocity.y < 0.0 {
            velocity.y += gravity_y * (v.fall_multiplier - 1.0) * dt;
        }

        jump_triggered
    }

    fn solve_horizontal(&mut self, velocity: &mut Vec2, axis: f32, is_grounded: bool, dt: f32) {
        let h = &self.horizontal;
        let mut axis = axis;

        // Reversing while still fast in the old direction feels unnatural:
        // swallow the input until enough speed has been shed, then ramp
        // acceleration back in through `recover_axis`.
        if axis.signum() != velocity.x.signum()
            && velocity.x.abs() > h.max_velocity * (1.0 - h.turn_rate)
        {
            axis = 0.0;
            self.recover_axis = 0.0;
        } else {
            axis = axis.signum() * axis.abs().min(self.recover_axis.abs());
            velocity.x += axis;
            self.recover_axis += h.turn_recover;
        }

        if velocity.x.abs() > 0.01 {
            let profile = if axis.abs() < 0.01 {
                h.damping_stop
            } else {
                match VerticalState::classify(is_grounded, velocity.y) {
                    VerticalState::Rising => h.damping_jump,
                    VerticalState::Falling => h.damping_fall,
                    VerticalState::Grounded => h.damping_movement,
                }
            };
            velocity.x *= damping_factor(profile, h.damping_constant, dt);
            velocity.x = velocity.x.signum() * velocity.x.abs().min(h.max_velocity);
        } else {
            // Below the deadband: snap to zero instead of decaying forever.
            velocity.x = 0.0;
        }
    }
}

/// Exponential decay factor retaining `(1 - damping)` of the velocity per
/// damping-constant unit of time; half-life is independent of tick rate.
fn damping_factor(damping: f32, damping_constant: f32, dt: f32) -> f32 {
    (1.0 - damping).powf(dt * damping_constant)
}
