//! Animation domain: tests for parameters, clip selection and sprite update.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::{
    AnimationController, AnimationPlugin, AnimationState, AnimationStateChanged,
    AnimatorParameters, PARAM_CROUCHED, PARAM_GROUNDED, PARAM_SPEED,
};
use crate::core::configure_controller_sets;
use crate::movement::{ControllerTuning, MovementController};

fn grounded_params(speed: f32) -> AnimatorParameters {
    let mut params = AnimatorParameters::default();
    params.set_bool(PARAM_GROUNDED, true);
    params.set_float(PARAM_SPEED, speed);
    params
}

#[test]
fn test_parameter_types_are_kept_apart() {
    let mut params = AnimatorParameters::default();
    params.set_float(PARAM_SPEED, 2.5);
    params.set_bool(PARAM_GROUNDED, true);

    assert_eq!(params.float(PARAM_SPEED), Some(2.5));
    assert_eq!(params.bool(PARAM_SPEED), None);
    assert_eq!(params.bool(PARAM_GROUNDED), Some(true));
    assert_eq!(params.float(PARAM_GROUNDED), None);
    assert_eq!(params.bool(PARAM_CROUCHED), None);
}

#[test]
fn test_clip_selection_by_speed_band() {
    let tuning = ControllerTuning::default();

    assert_eq!(
        AnimationState::select(&grounded_params(0.0), &tuning),
        AnimationState::Idle
    );
    assert_eq!(
        AnimationState::select(&grounded_params(tuning.walk_speed), &tuning),
        AnimationState::Walk
    );
    assert_eq!(
        AnimationState::select(&grounded_params(tuning.run_speed), &tuning),
        AnimationState::Run
    );
    assert_eq!(
        AnimationState::select(&grounded_params(tuning.sprint_speed), &tuning),
        AnimationState::Sprint
    );
}

#[test]
fn test_airborne_and_crouch_override_speed() {
    let tuning = ControllerTuning::default();

    let mut params = grounded_params(tuning.run_speed);
    params.set_bool(PARAM_CROUCHED, true);
    assert_eq!(AnimationState::select(&params, &tuning), AnimationState::Crouch);

    params.set_bool(PARAM_GROUNDED, false);
    assert_eq!(AnimationState::select(&params, &tuning), AnimationState::Airborne);
}

#[test]
fn test_set_state_reports_changes_only() {
    let mut animation = AnimationController::default();
    assert_eq!(animation.state, AnimationState::Idle);

    assert!(animation.set_state(AnimationState::Run));
    assert!(!animation.set_state(AnimationState::Run));
    assert_eq!(animation.state, AnimationState::Run);
}

#[test]
fn test_parameters_synced_every_frame() {
    let mut app = App::new();
    configure_controller_sets(&mut app);
    app.init_resource::<Time>()
        .init_resource::<ControllerTuning>()
        .add_plugins(AnimationPlugin);

    let entity = app
        .world_mut()
        .spawn((
            MovementController {
                grounded: true,
                ..default()
            },
            LinearVelocity(Vec2::new(-10.0, 0.0)),
            AnimatorParameters::default(),
            AnimationController::default(),
            Sprite::default(),
        ))
        .id();

    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(0.016));
    app.update();

    let params = app.world().get::<AnimatorParameters>(entity).expect("params");
    assert_eq!(params.float(PARAM_SPEED), Some(10.0));
    assert_eq!(params.bool(PARAM_GROUNDED), Some(true));
    // Crouched is only pushed by crouch actions
    assert_eq!(params.bool(PARAM_CROUCHED), None);

    let animation = app.world().get::<AnimationController>(entity).expect("animation");
    assert_eq!(animation.state, AnimationState::Run);

    let sprite = app.world().get::<Sprite>(entity).expect("sprite");
    assert_eq!(sprite.color, AnimationState::Run.tint());
}

#[test]
fn test_clip_change_tints_sprite_once() {
    let mut app = App::new();
    configure_controller_sets(&mut app);
    app.init_resource::<Time>()
        .init_resource::<ControllerTuning>()
        .add_plugins(AnimationPlugin);

    let entity = app
        .world_mut()
        .spawn((
            MovementController::default(),
            LinearVelocity::default(),
            AnimatorParameters::default(),
            AnimationController::default(),
            Sprite::default(),
        ))
        .id();

    // Not grounded: airborne on the first frame
    app.update();
    let changes: Vec<AnimationStateChanged> = app
        .world_mut()
        .resource_mut::<Messages<AnimationStateChanged>>()
        .drain()
        .collect();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].from, AnimationState::Idle);
    assert_eq!(changes[0].to, AnimationState::Airborne);
    assert_eq!(
        app.world().get::<Sprite>(entity).expect("sprite").color,
        AnimationState::Airborne.tint()
    );

    // A tint set elsewhere survives while the clip holds
    app.world_mut()
        .get_mut::<Sprite>(entity)
        .expect("sprite")
        .color = Color::BLACK;
    app.update();
    assert_eq!(
        app.world().get::<Sprite>(entity).expect("sprite").color,
        Color::BLACK
    );
}
