//! Movement domain: player bootstrap from content data.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{AttackState, Invulnerable, Lives};
use crate::content::{CharacterDef, ContentRegistry};
use crate::movement::solver::MovementSolver;
use crate::movement::{
    BodyProbes, CharacterBody, Facing, GameLayer, GroundState, Motor, MoveIntent, Player,
};

pub(crate) fn spawn_player(mut commands: Commands, registry: Option<Res<ContentRegistry>>) {
    let def = registry
        .as_ref()
        .and_then(|reg| reg.characters.get("player").cloned())
        .unwrap_or_else(|| {
            warn!("no 'player' character definition loaded, using built-in defaults");
            CharacterDef::fallback("player")
        });

    let half = def.body.half_extent();
    // Capsule matching the configured extent: straight section plus end caps.
    let capsule_radius = half.x.min(half.y * 0.5);
    let capsule_length = (half.y - capsule_radius) * 2.0;

    info!(
        "spawning player: max_vx={}, jump_v={}, hang={}s, buffer={}s",
        def.horizontal.max_velocity,
        def.vertical.max_velocity,
        def.vertical.jump_hang_time,
        def.vertical.jump_buffer_length
    );

    commands.spawn((
        // Identity & movement
        (
            Player,
            Motor(MovementSolver::new(def.horizontal, def.vertical)),
            CharacterBody {
                half_extent: half,
                ground_check_radius: def.body.ground_check_radius,
            },
            BodyProbes::default(),
            GroundState::default(),
            MoveIntent::default(),
            Facing::default(),
        ),
        // Combat
        (Lives::new(3), Invulnerable::default(), AttackState::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(half * 2.0),
            ..default()
        },
        Transform::from_xyz(0.0, 1.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::capsule(capsule_radius, capsule_length),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Enemy]),
        ),
    ));
}
