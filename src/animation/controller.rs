//! Animation state machine.
//!
//! Clip states are chosen from the parameter table, the same inputs a host
//! animator graph would read.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use super::{AnimatorParameters, PARAM_CROUCHED, PARAM_GROUNDED, PARAM_SPEED};
use crate::movement::ControllerTuning;

/// Speeds at or below this count as standing still.
const IDLE_SPEED: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Run,
    Sprint,
    Crouch,
    Airborne,
}

impl AnimationState {
    /// Pick the clip for the current parameters. Airborne beats crouch,
    /// crouch beats any speed band.
    pub fn select(params: &AnimatorParameters, tuning: &ControllerTuning) -> Self {
        if !params.bool(PARAM_GROUNDED).unwrap_or(false) {
            return AnimationState::Airborne;
        }
        if params.bool(PARAM_CROUCHED).unwrap_or(false) {
            return AnimationState::Crouch;
        }

        let speed = params.float(PARAM_SPEED).unwrap_or(0.0);
        if speed <= IDLE_SPEED {
            AnimationState::Idle
        } else if speed >= (tuning.run_speed + tuning.sprint_speed) * 0.5 {
            AnimationState::Sprint
        } else if speed >= (tuning.walk_speed + tuning.run_speed) * 0.5 {
            AnimationState::Run
        } else {
            AnimationState::Walk
        }
    }

    /// Sprite tint standing in for the clip artwork.
    pub fn tint(self) -> Color {
        match self {
            AnimationState::Idle => Color::srgb(0.9, 0.9, 0.9),
            AnimationState::Walk => Color::srgb(0.6, 0.8, 1.0),
            AnimationState::Run => Color::srgb(0.4, 0.6, 1.0),
            AnimationState::Sprint => Color::srgb(1.0, 0.5, 0.2),
            AnimationState::Crouch => Color::srgb(0.6, 0.6, 0.3),
            AnimationState::Airborne => Color::srgb(0.8, 0.5, 0.9),
        }
    }
}

/// Clip currently selected for a character.
#[derive(Component, Debug, Default)]
pub struct AnimationController {
    pub state: AnimationState,
}

impl AnimationController {
    /// Returns `true` if the clip changed.
    pub fn set_state(&mut self, state: AnimationState) -> bool {
        if self.state == state {
            return false;
        }
        self.state = state;
        true
    }
}

/// Message fired when the clip state changes.
#[derive(Debug)]
pub struct AnimationStateChanged {
    pub entity: Entity,
    pub from: AnimationState,
    pub to: AnimationState,
}

impl Message for AnimationStateChanged {}
