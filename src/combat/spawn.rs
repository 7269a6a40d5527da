//! Combat domain: enemy spawning from content data.

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::Rng;

use crate::combat::components::{Enemy, PatrolAi};
use crate::content::{CharacterDef, ContentRegistry};
use crate::movement::solver::MovementSolver;
use crate::movement::{
    BodyProbes, CharacterBody, Facing, GameLayer, GroundState, Motor, MoveIntent,
};

pub(crate) fn spawn_enemies(mut commands: Commands, registry: Option<Res<ContentRegistry>>) {
    let def = registry
        .as_ref()
        .and_then(|reg| reg.characters.get("walker").cloned())
        .unwrap_or_else(|| {
            warn!("no 'walker' character definition loaded, using built-in defaults");
            CharacterDef::fallback("walker")
        });

    let mut rng = rand::rng();

    // One on the left platform, one on the floor.
    for (x, y) in [(-6.0, -0.3), (5.0, -2.3)] {
        let half = def.body.half_extent();
        let capsule_radius = half.x.min(half.y * 0.5);
        let capsule_length = (half.y - capsule_radius) * 2.0;

        commands.spawn((
            (
                Enemy,
                PatrolAi::new(
                    rng.random_range(2.0..4.0),
                    rng.random_bool(0.5),
                    half.x + 2.0,
                ),
                Motor(MovementSolver::new(
                    def.horizontal.clone(),
                    def.vertical.clone(),
                )),
                CharacterBody {
                    half_extent: half,
                    ground_check_radius: def.body.ground_check_radius,
                },
                BodyProbes::default(),
                GroundState::default(),
                MoveIntent::default(),
                Facing::default(),
            ),
            Sprite {
                color: Color::srgb(0.8, 0.3, 0.3),
                custom_size: Some(half * 2.0),
                ..default()
            },
            Transform::from_xyz(x, y, 0.0),
            (
                RigidBody::Dynamic,
                Collider::capsule(capsule_radius, capsule_length),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Enemy, [GameLayer::Ground, GameLayer::Player]),
            ),
        ));
    }
}
