//! Input domain: tests for action maps, transitions and emission.

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::{
    ActionEvent, ActionMap, ActionMaps, ActionValues, InputPlugin, PLAYER_ACTION_MAP,
    PlayerAction, PlayerInput, parse_gamepad_button, parse_key,
};
use crate::core::configure_controller_sets;

const ENTITY: Entity = Entity::PLACEHOLDER;

fn collect(input: &mut PlayerInput, values: ActionValues) -> Vec<ActionEvent> {
    let mut out = Vec::new();
    input.update(ENTITY, values, |event| out.push(event));
    out
}

fn switched_input() -> PlayerInput {
    let mut input = PlayerInput::default();
    input
        .switch_current_action_map(&ActionMaps::default(), PLAYER_ACTION_MAP)
        .expect("player map exists");
    input
}

// -----------------------------------------------------------------------------
// PlayerInput transitions
// -----------------------------------------------------------------------------

#[test]
fn test_switch_to_unknown_map_fails() {
    let mut input = PlayerInput::default();
    let err = input
        .switch_current_action_map(&ActionMaps::default(), "Vehicle")
        .unwrap_err();

    assert_eq!(err.name, "Vehicle");
    assert!(input.current_map().is_none());
}

#[test]
fn test_switch_to_player_map() {
    let input = switched_input();
    assert_eq!(input.current_map(), Some(PLAYER_ACTION_MAP));
}

#[test]
fn test_button_press_and_release() {
    let mut input = switched_input();

    let events = collect(
        &mut input,
        ActionValues {
            sprint: true,
            ..default()
        },
    );
    assert_eq!(events, vec![ActionEvent::performed(ENTITY, PlayerAction::Sprint)]);
    assert!(input.is_pressed(PlayerAction::Sprint));

    // Held: no repeat
    let events = collect(
        &mut input,
        ActionValues {
            sprint: true,
            ..default()
        },
    );
    assert!(events.is_empty());

    let events = collect(&mut input, ActionValues::default());
    assert_eq!(events, vec![ActionEvent::canceled(ENTITY, PlayerAction::Sprint)]);
    assert!(!input.is_pressed(PlayerAction::Sprint));
}

#[test]
fn test_move_performed_on_each_change_and_canceled_at_zero() {
    let mut input = switched_input();

    let right = ActionValues {
        move_value: Vec2::X,
        ..default()
    };
    let up_right = ActionValues {
        move_value: Vec2::new(1.0, 1.0),
        ..default()
    };

    assert_eq!(
        collect(&mut input, right),
        vec![ActionEvent::moved(ENTITY, Vec2::X)]
    );
    assert!(collect(&mut input, right).is_empty());
    assert_eq!(
        collect(&mut input, up_right),
        vec![ActionEvent::moved(ENTITY, Vec2::new(1.0, 1.0))]
    );
    assert_eq!(
        collect(&mut input, ActionValues::default()),
        vec![ActionEvent::canceled(ENTITY, PlayerAction::Move)]
    );
}

#[test]
fn test_switching_map_releases_held_state() {
    let mut input = switched_input();
    collect(
        &mut input,
        ActionValues {
            crouch: true,
            ..default()
        },
    );
    assert!(input.is_pressed(PlayerAction::Crouch));

    input
        .switch_current_action_map(&ActionMaps::default(), PLAYER_ACTION_MAP)
        .expect("player map exists");
    assert!(!input.is_pressed(PlayerAction::Crouch));
}

// -----------------------------------------------------------------------------
// Bindings
// -----------------------------------------------------------------------------

#[test]
fn test_default_player_map_sampling() {
    let map = ActionMap::default_player();
    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::KeyA);
    keyboard.press(KeyCode::KeyW);
    keyboard.press(KeyCode::Space);

    let values = map.sample(&keyboard, &[]);
    assert_eq!(values.move_value, Vec2::new(-1.0, 1.0));
    assert!(values.jump);
    assert!(!values.crouch);
    assert!(!values.sprint);
}

#[test]
fn test_opposite_keys_cancel_out() {
    let map = ActionMap::default_player();
    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::KeyA);
    keyboard.press(KeyCode::ArrowRight);

    assert_eq!(map.sample(&keyboard, &[]).move_value, Vec2::ZERO);
}

#[test]
fn test_parse_binding_names() {
    assert_eq!(parse_key("Space"), Some(KeyCode::Space));
    assert_eq!(parse_key("ShiftLeft"), Some(KeyCode::ShiftLeft));
    assert_eq!(parse_key("KeyQ"), Some(KeyCode::KeyQ));
    assert_eq!(parse_key("Shift"), None);
    assert_eq!(parse_gamepad_button("South"), Some(GamepadButton::South));
    assert_eq!(parse_gamepad_button("A"), None);
}

// -----------------------------------------------------------------------------
// Emission
// -----------------------------------------------------------------------------

fn emission_app() -> App {
    let mut app = App::new();
    configure_controller_sets(&mut app);
    app.init_resource::<ButtonInput<KeyCode>>()
        .add_plugins(InputPlugin);
    app
}

fn drain(app: &mut App) -> Vec<ActionEvent> {
    app.world_mut()
        .resource_mut::<Messages<ActionEvent>>()
        .drain()
        .collect()
}

#[test]
fn test_emits_for_entities_with_player_map() {
    let mut app = emission_app();
    let player = app.world_mut().spawn(PlayerInput::default()).id();

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ShiftLeft);
    app.update();

    let events = drain(&mut app);
    assert_eq!(events, vec![ActionEvent::performed(player, PlayerAction::Sprint)]);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(KeyCode::ShiftLeft);
    app.update();

    let events = drain(&mut app);
    assert_eq!(events, vec![ActionEvent::canceled(player, PlayerAction::Sprint)]);
}

#[test]
fn test_no_emission_without_active_map() {
    let mut app = emission_app();
    app.insert_resource(ActionMaps { maps: Vec::new() });
    app.world_mut().spawn(PlayerInput::default());

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Space);
    app.update();

    assert!(drain(&mut app).is_empty());
}
