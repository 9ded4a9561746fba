//! Input domain: action-map activation and action sampling.

use bevy::prelude::*;

use crate::input::{ActionEvent, ActionMaps, PLAYER_ACTION_MAP, PlayerAction, PlayerInput};
use crate::movement::Player;

/// Switch freshly attached inputs to the player map.
pub(crate) fn switch_to_player_map(
    maps: Res<ActionMaps>,
    mut query: Query<(Entity, &mut PlayerInput), Added<PlayerInput>>,
) {
    for (entity, mut player_input) in &mut query {
        match player_input.switch_current_action_map(&maps, PLAYER_ACTION_MAP) {
            Ok(()) => debug!("{entity}: switched to action map '{PLAYER_ACTION_MAP}'"),
            Err(e) => error!("{entity}: cannot switch action map: {e}"),
        }
    }
}

/// A player without input bindings keeps running with input disabled.
pub(crate) fn report_missing_player_input(
    query: Query<Entity, (Added<Player>, Without<PlayerInput>)>,
) {
    for entity in &query {
        error!("{entity}: PlayerInput component is missing, input handling disabled");
    }
}

/// Sample the active map of every input and emit its transitions.
pub(crate) fn emit_input_actions(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    maps: Res<ActionMaps>,
    mut inputs: Query<(Entity, &mut PlayerInput)>,
    mut actions: MessageWriter<ActionEvent>,
) {
    let pads: Vec<&Gamepad> = gamepads.iter().collect();

    for (entity, mut player_input) in &mut inputs {
        let Some(map) = player_input.current_map().and_then(|name| maps.get(name)) else {
            continue;
        };
        let values = map.sample(&keyboard, &pads);

        player_input.update(entity, values, |event| {
            trace!("{entity}: {:?} {:?}", event.action, event.phase);
            actions.write(event);
        });
    }
}

/// Whether the Sprint binding of `entity` is held right now.
pub fn sprint_held(input: Option<&PlayerInput>) -> bool {
    input.is_some_and(|input| input.is_pressed(PlayerAction::Sprint))
}
