//! Validation of tuning values and binding names.
//!
//! Problems are reported, not repaired: tuning is applied as written, and a
//! binding whose name does not resolve is skipped.

use super::data::*;
use crate::input::{
    ActionMap, ActionMaps, AxisBinding, Binding, GamepadStick, PLAYER_ACTION_MAP,
    parse_gamepad_button, parse_key,
};
use crate::movement::ControllerTuning;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub source: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} field '{}': {}", self.source, self.field, self.message)
    }
}

/// Longest sprint delay accepted without a warning, in seconds.
pub const MAX_SPRINT_DELAY_SECS: f32 = 3600.0;

macro_rules! check_positive {
    ($errors:expr, $tuning:expr, $field:ident) => {
        if !($tuning.$field > 0.0) {
            $errors.push(ValidationError {
                source: "tuning".to_string(),
                field: stringify!($field),
                message: format!("expected a positive value, got {}", $tuning.$field),
            });
        }
    };
}

/// Check tuning for values that produce degenerate motion.
pub fn validate_tuning(tuning: &ControllerTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_positive!(errors, tuning, walk_speed);
    check_positive!(errors, tuning, run_speed);
    check_positive!(errors, tuning, sprint_speed);
    check_positive!(errors, tuning, crouch_speed);
    check_positive!(errors, tuning, jump_force);
    check_positive!(errors, tuning, ground_line);

    if !(0.0..=MAX_SPRINT_DELAY_SECS).contains(&tuning.sprint_delay_secs) {
        errors.push(ValidationError {
            source: "tuning".to_string(),
            field: "sprint_delay_secs",
            message: format!(
                "expected a value in [0, {}], got {}",
                MAX_SPRINT_DELAY_SECS, tuning.sprint_delay_secs
            ),
        });
    }

    if !(0.0..1.0).contains(&tuning.deadzone) {
        errors.push(ValidationError {
            source: "tuning".to_string(),
            field: "deadzone",
            message: format!("expected a value in [0, 1), got {}", tuning.deadzone),
        });
    }

    errors
}

fn resolve_bindings(
    defs: &[BindingDef],
    source: &str,
    field: &'static str,
    errors: &mut Vec<ValidationError>,
) -> Vec<Binding> {
    let mut bindings = Vec::with_capacity(defs.len());

    for def in defs {
        let resolved = match def {
            BindingDef::Key(name) => parse_key(name).map(Binding::Key),
            BindingDef::Button(name) => parse_gamepad_button(name).map(Binding::Button),
        };
        match resolved {
            Some(binding) => bindings.push(binding),
            None => errors.push(ValidationError {
                source: source.to_string(),
                field,
                message: format!("unknown binding {:?}", def),
            }),
        }
    }

    bindings
}

fn resolve_map(def: &ActionMapDef, errors: &mut Vec<ValidationError>) -> ActionMap {
    let source = format!("action map '{}'", def.name);

    let move_axis = AxisBinding {
        up: resolve_bindings(&def.move_axis.up, &source, "move_axis.up", errors),
        down: resolve_bindings(&def.move_axis.down, &source, "move_axis.down", errors),
        left: resolve_bindings(&def.move_axis.left, &source, "move_axis.left", errors),
        right: resolve_bindings(&def.move_axis.right, &source, "move_axis.right", errors),
        stick: def.move_axis.stick.map(|stick| match stick {
            StickDef::Left => GamepadStick::Left,
            StickDef::Right => GamepadStick::Right,
        }),
    };

    let map = ActionMap {
        name: def.name.clone(),
        move_axis,
        crouch: resolve_bindings(&def.crouch, &source, "crouch", errors),
        jump: resolve_bindings(&def.jump, &source, "jump", errors),
        sprint: resolve_bindings(&def.sprint, &source, "sprint", errors),
    };

    let move_unbound = map.move_axis.left.is_empty()
        && map.move_axis.right.is_empty()
        && map.move_axis.stick.is_none();
    for (field, unbound) in [
        ("move_axis", move_unbound),
        ("crouch", map.crouch.is_empty()),
        ("jump", map.jump.is_empty()),
        ("sprint", map.sprint.is_empty()),
    ] {
        if unbound {
            errors.push(ValidationError {
                source: source.clone(),
                field,
                message: "action has no usable binding".to_string(),
            });
        }
    }

    map
}

/// Turn map definitions into [`ActionMaps`], collecting every problem found.
pub fn resolve_action_maps(defs: &[ActionMapDef]) -> (ActionMaps, Vec<ValidationError>) {
    let mut errors = Vec::new();
    let mut maps: Vec<ActionMap> = Vec::with_capacity(defs.len());

    for def in defs {
        if maps.iter().any(|m| m.name == def.name) {
            errors.push(ValidationError {
                source: format!("action map '{}'", def.name),
                field: "name",
                message: "duplicate map name, later definition ignored".to_string(),
            });
            continue;
        }
        maps.push(resolve_map(def, &mut errors));
    }

    if !maps.iter().any(|m| m.name == PLAYER_ACTION_MAP) {
        errors.push(ValidationError {
            source: "input_actions".to_string(),
            field: "items",
            message: format!("no '{}' action map defined", PLAYER_ACTION_MAP),
        });
    }

    (ActionMaps { maps }, errors)
}
