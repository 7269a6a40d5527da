//! Combat domain: tests for patrol decisions and damage bookkeeping.

use super::components::{AttackState, Invulnerable, Lives, PatrolAi};

const DT: f32 = 1.0 / 60.0;

// -----------------------------------------------------------------------------
// PatrolAi tests
// -----------------------------------------------------------------------------

#[test]
fn test_patrol_axis_matches_heading() {
    let mut ai = PatrolAi::new(2.0, true, 2.0);
    assert_eq!(ai.advance(false, DT), -1.0);

    let mut ai = PatrolAi::new(2.0, false, 2.0);
    assert_eq!(ai.advance(false, DT), 1.0);
}

#[test]
fn test_patrol_flips_on_wall_ahead() {
    let mut ai = PatrolAi::new(5.0, false, 2.0);

    assert_eq!(ai.advance(true, DT), -1.0);
    // Counter was reset by the flip, so the next tick keeps the new heading.
    assert_eq!(ai.advance(false, DT), -1.0);
}

#[test]
fn test_patrol_flips_when_timer_expires() {
    // Powers of two so the countdown hits exactly zero.
    let dt = 0.03125;
    let mut ai = PatrolAi::new(0.125, false, 2.0);

    let mut flipped_at = None;
    for tick in 0..20 {
        if ai.advance(false, dt) < 0.0 {
            flipped_at = Some(tick);
            break;
        }
    }

    // Four ticks drain the counter; the fifth flips.
    assert_eq!(flipped_at, Some(4));
}

#[test]
fn test_patrol_wall_flip_resets_timer() {
    let mut ai = PatrolAi::new(0.5, false, 2.0);

    for _ in 0..20 {
        let _ = ai.advance(false, DT);
    }
    let remaining_before = ai.dir_change_counter;
    let _ = ai.advance(true, DT);

    assert!(ai.dir_change_counter > remaining_before);
    assert_eq!(ai.dir_change_counter, 0.5);
}

// -----------------------------------------------------------------------------
// Lives tests
// -----------------------------------------------------------------------------

#[test]
fn test_lives_deplete_to_zero() {
    let mut lives = Lives::new(3);

    assert_eq!(lives.deplete(), 2);
    assert_eq!(lives.deplete(), 1);
    assert_eq!(lives.deplete(), 0);
    assert!(lives.is_dead());
}

#[test]
fn test_lives_deplete_saturates() {
    let mut lives = Lives::new(0);
    assert_eq!(lives.deplete(), 0);
}

// -----------------------------------------------------------------------------
// Timer component tests
// -----------------------------------------------------------------------------

#[test]
fn test_invulnerable_window() {
    let mut invuln = Invulnerable::default();
    assert!(!invuln.is_invulnerable());

    invuln.timer = 0.2;
    assert!(invuln.is_invulnerable());

    invuln.timer -= 0.25;
    assert!(!invuln.is_invulnerable());
}

#[test]
fn test_attack_state_starts_ready() {
    let attack = AttackState::default();
    assert!(attack.cooldown_timer <= 0.0);
    assert!(attack.buffer_timer <= 0.0);
}
