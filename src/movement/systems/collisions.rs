//! Movement domain: probe placement and ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::probes::ProbeSet;
use crate::movement::{BodyProbes, CharacterBody, GameLayer, GroundState};

/// Refresh every character's probe points from its current transform. Runs
/// before ground detection and attack resolution so both see this tick's
/// positions.
pub(crate) fn update_probes(mut query: Query<(&Transform, &CharacterBody, &mut BodyProbes)>) {
    for (transform, body, mut probes) in &mut query {
        probes.0 = ProbeSet::recompute(transform.translation.truncate(), body.half_extent);
    }
}

/// Circle overlap at the ground probe against the Ground layer. While
/// `regrab_timer` runs the probe is skipped entirely; right after a jump it
/// still overlaps the takeoff surface and would hand the hang grace back.
pub(crate) fn detect_ground(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut query: Query<(&BodyProbes, &CharacterBody, &mut GroundState)>,
) {
    let dt = time.delta_secs();
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (probes, body, mut state) in &mut query {
        if state.regrab_timer > 0.0 {
            state.regrab_timer -= dt;
            continue;
        }

        let was_grounded = state.grounded;
        let hits = spatial_query.shape_intersections(
            &Collider::circle(body.ground_check_radius),
            probes.0.ground_check,
            0.0,
            &ground_filter,
        );
        state.grounded = !hits.is_empty();

        if state.grounded != was_grounded {
            debug!(
                "grounded changed: {} -> {} at {:?}",
                was_grounded, state.grounded, probes.0.ground_check
            );
        }
    }
}
