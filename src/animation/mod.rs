//! Animation domain: parameter table and clip selection for characters.

mod controller;
mod parameters;
mod systems;

#[cfg(test)]
mod tests;

pub use controller::{AnimationController, AnimationState, AnimationStateChanged};
pub use parameters::{AnimatorParameters, PARAM_CROUCHED, PARAM_GROUNDED, PARAM_SPEED};

use bevy::prelude::*;

use crate::animation::systems::{
    apply_clip_to_sprite, select_animation_clip, sync_animation_parameters,
};
use crate::core::ControllerSet;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationStateChanged>().add_systems(
            Update,
            (
                sync_animation_parameters,
                select_animation_clip,
                apply_clip_to_sprite,
            )
                .chain()
                .in_set(ControllerSet::Animation),
        );
    }
}
