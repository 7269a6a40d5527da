//! Combat domain: components for attacks, damage, and enemy behavior.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Enemy;

/// Remaining lives for a damageable character.
#[derive(Component, Debug, Clone)]
pub struct Lives {
    pub current: u32,
}

impl Lives {
    pub fn new(count: u32) -> Self {
        Self { current: count }
    }

    /// Remove one life and return what is left.
    pub fn deplete(&mut self) -> u32 {
        self.current = self.current.saturating_sub(1);
        self.current
    }

    pub fn is_dead(&self) -> bool {
        self.current == 0
    }
}

/// Invulnerability frames - entity cannot take damage while the timer runs.
#[derive(Component, Debug, Default)]
pub struct Invulnerable {
    pub timer: f32,
}

impl Invulnerable {
    pub fn is_invulnerable(&self) -> bool {
        self.timer > 0.0
    }
}

/// Player attack timers: `cooldown_timer` gates new attacks, `buffer_timer`
/// is the active window during which the attack probe keeps checking for
/// overlaps, so a swing connects even if an enemy walks in a moment late.
#[derive(Component, Debug, Default)]
pub struct AttackState {
    pub cooldown_timer: f32,
    pub buffer_timer: f32,
}

/// Patrol behavior: walk until a wall is ahead or the direction timer runs
/// out, then turn around. The decision logic is plain data so it can be
/// tested without a physics world.
#[derive(Component, Debug)]
pub struct PatrolAi {
    pub dir_change_time: f32,
    pub dir_change_counter: f32,
    pub heading_left: bool,
    /// Ray length for the wall-ahead check.
    pub lookahead: f32,
}

impl PatrolAi {
    pub fn new(dir_change_time: f32, heading_left: bool, lookahead: f32) -> Self {
        Self {
            dir_change_time,
            dir_change_counter: dir_change_time,
            heading_left,
            lookahead,
        }
    }

    /// Advance one tick and return the horizontal axis to feed the motor.
    pub fn advance(&mut self, wall_ahead: bool, dt: f32) -> f32 {
        if wall_ahead || self.dir_change_counter <= 0.0 {
            self.heading_left = !self.heading_left;
            self.dir_change_counter = self.dir_change_time;
        } else {
            self.dir_change_counter -= dt;
        }
        if self.heading_left { -1.0 } else { 1.0 }
    }
}
