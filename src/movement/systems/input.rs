//! Movement domain: applying input actions to controller state.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::{AnimatorParameters, PARAM_CROUCHED};
use crate::input::{ActionEvent, ActionPhase, PlayerAction, PlayerInput, sprint_held};
use crate::movement::{ControllerTuning, MovementController};

pub(crate) fn apply_input_actions(
    mut actions: MessageReader<ActionEvent>,
    tuning: Res<ControllerTuning>,
    mut query: Query<
        (
            &mut MovementController,
            &mut LinearVelocity,
            Option<&mut AnimatorParameters>,
        ),
        With<PlayerInput>,
    >,
) {
    for event in actions.read() {
        let Ok((mut controller, mut velocity, params)) = query.get_mut(event.entity) else {
            continue;
        };

        match (event.action, event.phase) {
            (PlayerAction::Move, ActionPhase::Performed) => controller.set_move_input(event.value),
            (PlayerAction::Move, ActionPhase::Canceled) => controller.clear_move_input(),
            (PlayerAction::Crouch, _) => {
                let crouched = event.is_performed();
                if crouched {
                    controller.start_crouch();
                } else {
                    controller.stop_crouch();
                }
                if let Some(mut params) = params {
                    params.set_bool(PARAM_CROUCHED, crouched);
                }
            }
            (PlayerAction::Jump, ActionPhase::Performed) => {
                if controller.try_jump(&mut velocity.0, &tuning) {
                    debug!("{}: jump, vy={}", event.entity, velocity.y);
                }
            }
            (PlayerAction::Jump, ActionPhase::Canceled) => {}
            (PlayerAction::Sprint, ActionPhase::Performed) => {
                controller.start_sprint(tuning.sprint_delay());
                info!("{}: started running", event.entity);
            }
            (PlayerAction::Sprint, ActionPhase::Canceled) => {
                controller.stop_sprint();
                info!("{}: stopped sprinting", event.entity);
            }
        }
    }
}

/// Upgrade Run to Sprint once the delay has elapsed with Sprint still held.
/// Runs before `apply_input_actions`, so the frame of the press is not counted.
pub(crate) fn tick_sprint_charge(
    time: Res<Time>,
    mut query: Query<(Entity, &mut MovementController, Option<&PlayerInput>)>,
) {
    for (entity, mut controller, input) in &mut query {
        if !controller.sprint_pending() {
            continue;
        }
        if controller.tick_sprint_charge(time.delta(), sprint_held(input)) {
            info!("{entity}: sprint activated");
        }
    }
}
