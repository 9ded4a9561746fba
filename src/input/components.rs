//! Input domain: per-entity input binding state.

use bevy::prelude::*;

use crate::input::{ActionEvent, ActionMaps, ActionValues, PlayerAction};

/// Failure to switch a [`PlayerInput`] to another action map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownActionMap {
    pub name: String,
}

impl std::fmt::Display for UnknownActionMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "action map '{}' does not exist", self.name)
    }
}

impl std::error::Error for UnknownActionMap {}

/// Binds an entity to the action-map layer.
///
/// Entities without this component receive no input actions.
#[derive(Component, Debug, Default)]
pub struct PlayerInput {
    current_map: Option<String>,
    last: ActionValues,
}

impl PlayerInput {
    pub fn current_map(&self) -> Option<&str> {
        self.current_map.as_deref()
    }

    /// Make `name` the active map. Held state is dropped so the new map
    /// starts from a released baseline.
    pub fn switch_current_action_map(
        &mut self,
        maps: &ActionMaps,
        name: &str,
    ) -> Result<(), UnknownActionMap> {
        if maps.get(name).is_none() {
            return Err(UnknownActionMap {
                name: name.to_string(),
            });
        }
        self.current_map = Some(name.to_string());
        self.last = ActionValues::default();
        Ok(())
    }

    pub fn is_pressed(&self, action: PlayerAction) -> bool {
        match action {
            PlayerAction::Move => self.last.move_value != Vec2::ZERO,
            PlayerAction::Crouch => self.last.crouch,
            PlayerAction::Jump => self.last.jump,
            PlayerAction::Sprint => self.last.sprint,
        }
    }

    /// Store this frame's values and report every transition.
    ///
    /// Move is performed whenever its value changes to something non-zero
    /// and canceled when it returns to zero. Buttons are performed on press
    /// and canceled on release.
    pub fn update(
        &mut self,
        entity: Entity,
        values: ActionValues,
        mut emit: impl FnMut(ActionEvent),
    ) {
        let previous = std::mem::replace(&mut self.last, values);

        if values.move_value != previous.move_value {
            if values.move_value == Vec2::ZERO {
                emit(ActionEvent::canceled(entity, PlayerAction::Move));
            } else {
                emit(ActionEvent::moved(entity, values.move_value));
            }
        }

        for (action, was, is) in [
            (PlayerAction::Crouch, previous.crouch, values.crouch),
            (PlayerAction::Jump, previous.jump, values.jump),
            (PlayerAction::Sprint, previous.sprint, values.sprint),
        ] {
            match (was, is) {
                (false, true) => emit(ActionEvent::performed(entity, action)),
                (true, false) => emit(ActionEvent::canceled(entity, action)),
                _ => {}
            }
        }
    }
}
