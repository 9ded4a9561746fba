//! Movement domain: horizontal velocity and facing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ControllerTuning, MovementController};

/// Write the mode speed into `velocity.x`; `velocity.y` belongs to physics.
pub(crate) fn apply_horizontal_movement(
    tuning: Res<ControllerTuning>,
    mut query: Query<(&MovementController, &mut LinearVelocity)>,
) {
    for (controller, mut velocity) in &mut query {
        velocity.x = controller.horizontal_velocity(&tuning);
    }
}

/// Mirror the sprite when the input direction crosses zero.
pub(crate) fn update_facing(
    tuning: Res<ControllerTuning>,
    mut query: Query<(&mut MovementController, &mut Transform)>,
) {
    for (mut controller, mut transform) in &mut query {
        let direction = controller.move_input.x;
        if direction.abs() <= tuning.deadzone {
            continue;
        }

        if controller.face_towards(direction) {
            transform.scale.x *= -1.0;
        }
    }
}
