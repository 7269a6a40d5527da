//! Content domain: authoring-time range validation for tuning values.
//!
//! The movement solver itself never validates its configuration; anything
//! out of range is rejected here, before a solver is ever constructed.

use super::data::CharacterDef;

/// A validation error with context about which field failed.
#[derive(Debug)]
pub struct ValidationError {
    pub character_id: String,
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "character '{}': field '{}' = {} (expected {})",
            self.character_id, self.field, self.value, self.expected
        )
    }
}

macro_rules! check_range {
    ($errors:expr, $id:expr, $field:expr, $value:expr, $ok:expr, $expected:expr) => {
        if !$ok {
            $errors.push(ValidationError {
                character_id: $id.to_string(),
                field: $field,
                value: $value,
                expected: $expected,
            });
        }
    };
}

/// Validate one character definition against the documented tuning ranges.
/// Returns all violations, empty if the definition is usable.
pub fn validate_character(def: &CharacterDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let id = &def.id;
    let h = &def.horizontal;
    let v = &def.vertical;

    check_range!(errors, id, "horizontal.max_velocity", h.max_velocity, h.max_velocity >= 0.0, ">= 0");
    for (field, value) in [
        ("horizontal.damping_movement", h.damping_movement),
        ("horizontal.damping_stop", h.damping_stop),
        ("horizontal.damping_jump", h.damping_jump),
        ("horizontal.damping_fall", h.damping_fall),
        ("horizontal.turn_rate", h.turn_rate),
    ] {
        check_range!(errors, id, field, value, (0.0..=1.0).contains(&value), "in [0, 1]");
    }
    check_range!(errors, id, "horizontal.damping_constant", h.damping_constant, h.damping_constant >= 0.0, ">= 0");
    check_range!(
        errors,
        id,
        "horizontal.turn_recover",
        h.turn_recover,
        (0.0..=0.1).contains(&h.turn_recover),
        "in [0, 0.1]"
    );

    check_range!(errors, id, "vertical.max_velocity", v.max_velocity, v.max_velocity >= 0.0, ">= 0");
    check_range!(errors, id, "vertical.fall_multiplier", v.fall_multiplier, v.fall_multiplier >= 1.0, ">= 1");
    check_range!(
        errors,
        id,
        "vertical.controllable_jump_multiplier",
        v.controllable_jump_multiplier,
        v.controllable_jump_multiplier >= 1.0,
        ">= 1"
    );
    check_range!(errors, id, "vertical.jump_hang_time", v.jump_hang_time, v.jump_hang_time >= 0.0, ">= 0");
    check_range!(
        errors,
        id,
        "vertical.jump_buffer_length",
        v.jump_buffer_length,
        v.jump_buffer_length >= 0.0,
        ">= 0"
    );

    check_range!(errors, id, "body.half_width", def.body.half_width, def.body.half_width > 0.0, "> 0");
    check_range!(errors, id, "body.half_height", def.body.half_height, def.body.half_height > 0.0, "> 0");
    check_range!(
        errors,
        id,
        "body.ground_check_radius",
        def.body.ground_check_radius,
        def.body.ground_check_radius > 0.0,
        "> 0"
    );

    errors
}
