//! Combat domain: enemy patrol AI feeding the shared movement pipeline.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::components::{Enemy, PatrolAi};
use crate::movement::{GameLayer, MoveIntent};

/// Write each enemy's `MoveIntent` from its patrol decision. Enemies run the
/// same movement solver as the player; only the intent source differs.
pub(crate) fn update_patrol_ai(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &mut PatrolAi, &mut MoveIntent), With<Enemy>>,
) {
    let dt = time.delta_secs();
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, mut ai, mut intent) in &mut query {
        let origin = transform.translation.truncate();
        let direction = if ai.heading_left { Dir2::NEG_X } else { Dir2::X };

        let wall_ahead = spatial_query
            .cast_ray(origin, direction, ai.lookahead, true, &ground_filter)
            .is_some();

        intent.axis = ai.advance(wall_ahead, dt);
        intent.jump_down = false;
    }
}
