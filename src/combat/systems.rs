//! Combat domain: attack input, attack resolution, and contact damage.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::components::{AttackState, Enemy, Invulnerable, Lives};
use crate::combat::resources::{CombatInput, CombatTuning};
use crate::core::RunStats;
use crate::movement::{BodyProbes, Facing, GameLayer, Player};

pub(crate) fn read_combat_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<CombatInput>,
) {
    input.attack_pressed =
        keyboard.just_pressed(KeyCode::KeyJ) || keyboard.just_pressed(KeyCode::KeyZ);
}

pub(crate) fn update_combat_timers(
    time: Res<Time>,
    mut query: Query<(&mut Invulnerable, Option<&mut AttackState>)>,
) {
    let dt = time.delta_secs();

    for (mut invuln, attack_state) in &mut query {
        if invuln.timer > 0.0 {
            invuln.timer -= dt;
        }
        if let Some(mut attack) = attack_state {
            attack.cooldown_timer -= dt;
            attack.buffer_timer -= dt;
        }
    }
}

/// Start a swing on attack input (gated by the cooldown), then resolve hits
/// with a circle overlap at the facing-side attack probe for as long as the
/// buffer window is open.
pub(crate) fn process_player_attacks(
    mut commands: Commands,
    input: Res<CombatInput>,
    tuning: Res<CombatTuning>,
    spatial_query: SpatialQuery,
    mut stats: ResMut<RunStats>,
    mut query: Query<(&mut AttackState, &BodyProbes, &Facing), With<Player>>,
    enemy_query: Query<Entity, With<Enemy>>,
) {
    let enemy_filter = SpatialQueryFilter::from_mask(GameLayer::Enemy);

    for (mut attack, probes, facing) in &mut query {
        if input.attack_pressed && attack.cooldown_timer <= 0.0 {
            attack.cooldown_timer = tuning.attack_cooldown;
            attack.buffer_timer = tuning.attack_buffer;
            stats.attacks += 1;
            debug!("attack started, facing {:?}", facing);
        }

        if attack.buffer_timer >= 0.0 {
            let probe = match facing {
                Facing::Left => probes.0.attack_left,
                Facing::Right => probes.0.attack_right,
            };

            let hits = spatial_query.shape_intersections(
                &Collider::circle(tuning.attack_radius),
                probe,
                0.0,
                &enemy_filter,
            );
            for entity in hits {
                if enemy_query.contains(entity) {
                    commands.entity(entity).despawn();
                    stats.kills += 1;
                    info!("enemy destroyed ({} total)", stats.kills);
                }
            }
        }
    }
}

/// Touching an enemy costs a life, knocks the player away from it, and opens
/// a short invulnerability window. At zero lives the player despawns.
pub(crate) fn apply_contact_damage(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    tuning: Res<CombatTuning>,
    stats: Res<RunStats>,
    transforms: Query<&Transform>,
    mut player_query: Query<(Entity, &mut Lives, &mut Invulnerable, &mut LinearVelocity), With<Player>>,
    enemy_query: Query<Entity, With<Enemy>>,
) {
    let Ok((player_entity, mut lives, mut invuln, mut velocity)) = player_query.single_mut() else {
        // Consume events if no player
        for _ in collision_events.read() {}
        return;
    };

    for event in collision_events.read() {
        let (enemy_entity, other) = if enemy_query.contains(event.collider1) {
            (event.collider1, event.collider2)
        } else if enemy_query.contains(event.collider2) {
            (event.collider2, event.collider1)
        } else {
            continue;
        };

        if other != player_entity || invuln.is_invulnerable() {
            continue;
        }

        if lives.deplete() == 0 {
            info!(
                "player died: jumps={}, attacks={}, kills={}",
                stats.jumps, stats.attacks, stats.kills
            );
            commands.entity(player_entity).despawn();
            return;
        }

        invuln.timer = tuning.contact_invuln;
        if let (Ok(player_tf), Ok(enemy_tf)) =
            (transforms.get(player_entity), transforms.get(enemy_entity))
        {
            let away = (player_tf.translation.truncate() - enemy_tf.translation.truncate())
                .normalize_or_zero();
            velocity.0 = away * tuning.knockback_speed;
        }
        debug!("player hit, {} lives left", lives.current);
    }
}
