//! Content domain: tests for parsing and range validation.

use super::data::{BodyDef, CharacterDef, DataFile};
use super::validation::validate_character;

fn usable_def() -> CharacterDef {
    CharacterDef::fallback("test_character")
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_fallback_definition_is_valid() {
    assert!(validate_character(&usable_def()).is_empty());
}

#[test]
fn test_damping_out_of_unit_range_is_rejected() {
    let mut def = usable_def();
    def.horizontal.damping_stop = 1.5;

    let errors = validate_character(&def);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "horizontal.damping_stop");
}

#[test]
fn test_negative_damping_constant_is_rejected() {
    let mut def = usable_def();
    def.horizontal.damping_constant = -3.0;

    let errors = validate_character(&def);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "horizontal.damping_constant");
}

#[test]
fn test_turn_recover_above_cap_is_rejected() {
    let mut def = usable_def();
    def.horizontal.turn_recover = 0.2;

    assert!(!validate_character(&def).is_empty());
}

#[test]
fn test_multipliers_below_one_are_rejected() {
    let mut def = usable_def();
    def.vertical.fall_multiplier = 0.5;
    def.vertical.controllable_jump_multiplier = 0.0;

    let errors = validate_character(&def);
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_validation_error_display_names_the_field() {
    let mut def = usable_def();
    def.vertical.jump_hang_time = -1.0;

    let errors = validate_character(&def);
    let message = errors[0].to_string();
    assert!(message.contains("test_character"));
    assert!(message.contains("vertical.jump_hang_time"));
}

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_character_data_file_round_trip() {
    let file = DataFile {
        schema_version: 1,
        items: vec![CharacterDef {
            id: "walker".to_string(),
            body: BodyDef {
                half_width: 0.4,
                half_height: 0.6,
                ground_check_radius: 0.15,
            },
            ..usable_def()
        }],
    };

    let text = ron::ser::to_string(&file).expect("serialize");
    let parsed: DataFile<CharacterDef> = ron::from_str(&text).expect("parse");

    assert_eq!(parsed.schema_version, 1);
    assert_eq!(parsed.items.len(), 1);
    assert_eq!(parsed.items[0].id, "walker");
    assert_eq!(parsed.items[0].body.half_width, 0.4);
}

#[test]
fn test_characters_ron_literal_parses() {
    // Struct literal in RON form, as authored in assets/data.
    let text = r#"(
        schema_version: 1,
        items: [
            (
                id: "player",
                horizontal: (
                    max_velocity: 9.0,
                    damping_movement: 0.5,
                    damping_stop: 0.95,
                    damping_jump: 0.35,
                    damping_fall: 0.3,
                    damping_constant: 12.0,
                    turn_rate: 0.2,
                    turn_recover: 0.05,
                ),
                vertical: (
                    max_velocity: 14.0,
                    fall_multiplier: 2.5,
                    controllable_jump_multiplier: 2.0,
                    jump_hang_time: 0.12,
                    jump_buffer_length: 0.1,
                ),
                body: (
                    half_width: 0.35,
                    half_height: 0.8,
                    ground_check_radius: 0.2,
                ),
            ),
        ],
    )"#;

    let parsed: DataFile<CharacterDef> = ron::from_str(text).expect("parse");
    assert_eq!(parsed.items[0].id, "player");
    assert!(validate_character(&parsed.items[0]).is_empty());
}
