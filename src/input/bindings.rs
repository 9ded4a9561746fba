//! Input domain: action maps and physical bindings.

use bevy::prelude::*;

use crate::input::PLAYER_ACTION_MAP;

/// A physical control an action can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Key(KeyCode),
    Button(GamepadButton),
}

impl Binding {
    pub fn is_pressed(&self, keyboard: &ButtonInput<KeyCode>, gamepads: &[&Gamepad]) -> bool {
        match self {
            Binding::Key(key) => keyboard.pressed(*key),
            Binding::Button(button) => gamepads.iter().any(|pad| pad.pressed(*button)),
        }
    }
}

fn any_pressed(bindings: &[Binding], keyboard: &ButtonInput<KeyCode>, gamepads: &[&Gamepad]) -> bool {
    bindings.iter().any(|b| b.is_pressed(keyboard, gamepads))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamepadStick {
    Left,
    Right,
}

/// Composite 2D binding: four directions plus an optional analog stick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisBinding {
    pub up: Vec<Binding>,
    pub down: Vec<Binding>,
    pub left: Vec<Binding>,
    pub right: Vec<Binding>,
    pub stick: Option<GamepadStick>,
}

impl AxisBinding {
    pub fn sample(&self, keyboard: &ButtonInput<KeyCode>, gamepads: &[&Gamepad]) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if any_pressed(&self.left, keyboard, gamepads) {
            axis.x -= 1.0;
        }
        if any_pressed(&self.right, keyboard, gamepads) {
            axis.x += 1.0;
        }
        if any_pressed(&self.down, keyboard, gamepads) {
            axis.y -= 1.0;
        }
        if any_pressed(&self.up, keyboard, gamepads) {
            axis.y += 1.0;
        }

        // Digital input wins; the stick only fills in when no key is held
        if axis == Vec2::ZERO
            && let Some(stick) = self.stick
        {
            for pad in gamepads {
                let value = match stick {
                    GamepadStick::Left => pad.left_stick(),
                    GamepadStick::Right => pad.right_stick(),
                };
                if value != Vec2::ZERO {
                    return value.clamp_length_max(1.0);
                }
            }
        }

        axis
    }
}

/// Raw values of all four actions for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActionValues {
    pub move_value: Vec2,
    pub crouch: bool,
    pub jump: bool,
    pub sprint: bool,
}

/// A named set of bindings that is active as a whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionMap {
    pub name: String,
    pub move_axis: AxisBinding,
    pub crouch: Vec<Binding>,
    pub jump: Vec<Binding>,
    pub sprint: Vec<Binding>,
}

impl ActionMap {
    pub fn sample(&self, keyboard: &ButtonInput<KeyCode>, gamepads: &[&Gamepad]) -> ActionValues {
        ActionValues {
            move_value: self.move_axis.sample(keyboard, gamepads),
            crouch: any_pressed(&self.crouch, keyboard, gamepads),
            jump: any_pressed(&self.jump, keyboard, gamepads),
            sprint: any_pressed(&self.sprint, keyboard, gamepads),
        }
    }

    /// Built-in keyboard/gamepad layout for the player map.
    pub fn default_player() -> Self {
        use Binding::{Button, Key};

        Self {
            name: PLAYER_ACTION_MAP.to_string(),
            move_axis: AxisBinding {
                up: vec![Key(KeyCode::KeyW), Key(KeyCode::ArrowUp)],
                down: vec![Key(KeyCode::KeyS), Key(KeyCode::ArrowDown)],
                left: vec![
                    Key(KeyCode::KeyA),
                    Key(KeyCode::ArrowLeft),
                    Button(GamepadButton::DPadLeft),
                ],
                right: vec![
                    Key(KeyCode::KeyD),
                    Key(KeyCode::ArrowRight),
                    Button(GamepadButton::DPadRight),
                ],
                stick: Some(GamepadStick::Left),
            },
            crouch: vec![Key(KeyCode::KeyC), Key(KeyCode::ControlLeft), Button(GamepadButton::East)],
            jump: vec![Key(KeyCode::Space), Button(GamepadButton::South)],
            sprint: vec![Key(KeyCode::ShiftLeft), Button(GamepadButton::LeftThumb)],
        }
    }
}

/// All action maps known to the game.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ActionMaps {
    pub maps: Vec<ActionMap>,
}

impl Default for ActionMaps {
    fn default() -> Self {
        Self {
            maps: vec![ActionMap::default_player()],
        }
    }
}

impl ActionMaps {
    pub fn get(&self, name: &str) -> Option<&ActionMap> {
        self.maps.iter().find(|map| map.name == name)
    }
}

/// Resolve a key name as written in data files (`"KeyA"`, `"Space"`, ...).
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let key = match name {
        "KeyA" => KeyCode::KeyA,
        "KeyB" => KeyCode::KeyB,
        "KeyC" => KeyCode::KeyC,
        "KeyD" => KeyCode::KeyD,
        "KeyE" => KeyCode::KeyE,
        "KeyF" => KeyCode::KeyF,
        "KeyG" => KeyCode::KeyG,
        "KeyH" => KeyCode::KeyH,
        "KeyI" => KeyCode::KeyI,
        "KeyJ" => KeyCode::KeyJ,
        "KeyK" => KeyCode::KeyK,
        "KeyL" => KeyCode::KeyL,
        "KeyM" => KeyCode::KeyM,
        "KeyN" => KeyCode::KeyN,
        "KeyO" => KeyCode::KeyO,
        "KeyP" => KeyCode::KeyP,
        "KeyQ" => KeyCode::KeyQ,
        "KeyR" => KeyCode::KeyR,
        "KeyS" => KeyCode::KeyS,
        "KeyT" => KeyCode::KeyT,
        "KeyU" => KeyCode::KeyU,
        "KeyV" => KeyCode::KeyV,
        "KeyW" => KeyCode::KeyW,
        "KeyX" => KeyCode::KeyX,
        "KeyY" => KeyCode::KeyY,
        "KeyZ" => KeyCode::KeyZ,
        "Digit0" => KeyCode::Digit0,
        "Digit1" => KeyCode::Digit1,
        "Digit2" => KeyCode::Digit2,
        "Digit3" => KeyCode::Digit3,
        "Digit4" => KeyCode::Digit4,
        "Digit5" => KeyCode::Digit5,
        "Digit6" => KeyCode::Digit6,
        "Digit7" => KeyCode::Digit7,
        "Digit8" => KeyCode::Digit8,
        "Digit9" => KeyCode::Digit9,
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Escape,
        "Tab" => KeyCode::Tab,
        "Backspace" => KeyCode::Backspace,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ShiftRight" => KeyCode::ShiftRight,
        "ControlLeft" => KeyCode::ControlLeft,
        "ControlRight" => KeyCode::ControlRight,
        "AltLeft" => KeyCode::AltLeft,
        "AltRight" => KeyCode::AltRight,
        _ => return None,
    };
    Some(key)
}

/// Resolve a gamepad button name (`"South"`, `"DPadLeft"`, ...).
pub fn parse_gamepad_button(name: &str) -> Option<GamepadButton> {
    let button = match name {
        "South" => GamepadButton::South,
        "East" => GamepadButton::East,
        "North" => GamepadButton::North,
        "West" => GamepadButton::West,
        "LeftTrigger" => GamepadButton::LeftTrigger,
        "LeftTrigger2" => GamepadButton::LeftTrigger2,
        "RightTrigger" => GamepadButton::RightTrigger,
        "RightTrigger2" => GamepadButton::RightTrigger2,
        "LeftThumb" => GamepadButton::LeftThumb,
        "RightThumb" => GamepadButton::RightThumb,
        "Select" => GamepadButton::Select,
        "Start" => GamepadButton::Start,
        "DPadUp" => GamepadButton::DPadUp,
        "DPadDown" => GamepadButton::DPadDown,
        "DPadLeft" => GamepadButton::DPadLeft,
        "DPadRight" => GamepadButton::DPadRight,
        _ => return None,
    };
    Some(button)
}
