//! Input domain: logical actions and the messages they emit.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Name of the action map the player switches to on startup.
pub const PLAYER_ACTION_MAP: &str = "Player";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// 2D analog direction
    Move,
    Crouch,
    Jump,
    Sprint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionPhase {
    Performed,
    Canceled,
}

/// Message fired on every performed/canceled transition of an action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionEvent {
    pub entity: Entity,
    pub action: PlayerAction,
    pub phase: ActionPhase,
    /// Move direction for `Move`, zero for buttons
    pub value: Vec2,
}

impl Message for ActionEvent {}

impl ActionEvent {
    pub fn performed(entity: Entity, action: PlayerAction) -> Self {
        Self {
            entity,
            action,
            phase: ActionPhase::Performed,
            value: Vec2::ZERO,
        }
    }

    pub fn canceled(entity: Entity, action: PlayerAction) -> Self {
        Self {
            entity,
            action,
            phase: ActionPhase::Canceled,
            value: Vec2::ZERO,
        }
    }

    pub fn moved(entity: Entity, value: Vec2) -> Self {
        Self {
            entity,
            action: PlayerAction::Move,
            phase: ActionPhase::Performed,
            value,
        }
    }

    pub fn is_performed(&self) -> bool {
        self.phase == ActionPhase::Performed
    }
}
