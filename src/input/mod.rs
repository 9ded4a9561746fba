//! Input domain: logical actions over data-driven action maps.

mod actions;
mod bindings;
mod components;
mod systems;

#[cfg(test)]
mod tests;

pub use actions::{ActionEvent, ActionPhase, PLAYER_ACTION_MAP, PlayerAction};
pub use bindings::{
    ActionMap, ActionMaps, ActionValues, AxisBinding, Binding, GamepadStick, parse_gamepad_button,
    parse_key,
};
pub use components::{PlayerInput, UnknownActionMap};
pub use systems::sprint_held;

use bevy::prelude::*;

use crate::core::ControllerSet;
use crate::input::systems::{emit_input_actions, report_missing_player_input, switch_to_player_map};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActionMaps>()
            .add_message::<ActionEvent>()
            .add_systems(
                Update,
                (
                    report_missing_player_input,
                    switch_to_player_map,
                    emit_input_actions,
                )
                    .chain()
                    .in_set(ControllerSet::Input),
            );
    }
}
