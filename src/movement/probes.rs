//! Movement domain: collision probe placement derived from body extents.

use bevy::prelude::*;

/// The three probe points a character carries: a ground-check circle center
/// below the body and one attack circle center per facing direction. Derived
/// values only; recomputed whenever the body's bounds may have moved.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProbeSet {
    pub ground_check: Vec2,
    pub attack_left: Vec2,
    pub attack_right: Vec2,
}

impl ProbeSet {
    /// Recompute all probe points from the body's current center and half
    /// extent. Pure: identical bounds always yield identical probes.
    ///
    /// The ground probe sits 0.8 of the half height below center — near but
    /// not exactly at the feet, so capsule rounding doesn't starve the
    /// overlap check. Attack probes sit at half of the half width to either
    /// side, on the center line.
    pub fn recompute(center: Vec2, half_extent: Vec2) -> Self {
        Self {
            ground_check: center - Vec2::new(0.0, half_extent.y * 0.8),
            attack_left: center - Vec2::new(half_extent.x * 0.5, 0.0),
            attack_right: center + Vec2::new(half_extent.x * 0.5, 0.0),
        }
    }
}
