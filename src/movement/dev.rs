//! Movement domain: test level spawn and debug-only probe overlay.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

#[cfg(feature = "dev-tools")]
use crate::movement::{BodyProbes, CharacterBody, GroundState};

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]);

    let mut spawn_block = |color: Color, size: Vec2, x: f32, y: f32| {
        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(x, y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    };

    // Floor
    spawn_block(ground_color, Vec2::new(24.0, 1.0), 0.0, -3.5);

    // Side walls
    spawn_block(wall_color, Vec2::new(1.0, 10.0), -12.0, 1.5);
    spawn_block(wall_color, Vec2::new(1.0, 10.0), 12.0, 1.5);

    // Platforms
    spawn_block(platform_color, Vec2::new(4.0, 0.5), -6.0, -1.2);
    spawn_block(platform_color, Vec2::new(4.0, 0.5), 6.0, 0.0);
    spawn_block(platform_color, Vec2::new(3.0, 0.5), 0.0, 1.5);
}

/// Draws the ground-check and attack probes, red while grounded and green
/// while airborne.
#[cfg(feature = "dev-tools")]
pub(crate) fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    query: Query<(&BodyProbes, &CharacterBody, &GroundState)>,
) {
    use bevy::color::palettes::css::{GREEN, RED};

    for (probes, body, ground) in &query {
        let color = if ground.grounded { RED } else { GREEN };
        gizmos.circle_2d(probes.0.ground_check, body.ground_check_radius, color);
        gizmos.circle_2d(probes.0.attack_left, body.ground_check_radius, color);
        gizmos.circle_2d(probes.0.attack_right, body.ground_check_radius, color);
    }
}
