//! Animation systems: parameter push, clip selection and sprite update.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::{
    AnimationController, AnimationState, AnimationStateChanged, AnimatorParameters,
    PARAM_GROUNDED, PARAM_SPEED,
};
use crate::movement::{ControllerTuning, MovementController};

/// Push `Speed` and `isGrounded` every frame.
pub(crate) fn sync_animation_parameters(
    mut query: Query<(&MovementController, &LinearVelocity, &mut AnimatorParameters)>,
) {
    for (controller, velocity, mut params) in &mut query {
        params.set_float(PARAM_SPEED, velocity.x.abs());
        params.set_bool(PARAM_GROUNDED, controller.grounded);
    }
}

pub(crate) fn select_animation_clip(
    tuning: Res<ControllerTuning>,
    mut query: Query<(Entity, &AnimatorParameters, &mut AnimationController)>,
    mut changed: MessageWriter<AnimationStateChanged>,
) {
    for (entity, params, mut animation) in &mut query {
        let from = animation.state;
        let to = AnimationState::select(params, &tuning);
        if animation.set_state(to) {
            changed.write(AnimationStateChanged { entity, from, to });
        }
    }
}

pub(crate) fn apply_clip_to_sprite(
    mut changed: MessageReader<AnimationStateChanged>,
    mut sprites: Query<&mut Sprite>,
) {
    for change in changed.read() {
        debug!("{}: clip {:?} -> {:?}", change.entity, change.from, change.to);
        if let Ok(mut sprite) = sprites.get_mut(change.entity) {
            sprite.color = change.to.tint();
        }
    }
}
