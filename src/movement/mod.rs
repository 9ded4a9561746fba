//! Movement domain: player locomotion driven by input actions.

mod bootstrap;
mod components;
mod dev;
mod resources;
mod systems;


pub use components::{Facing, GameLayer, GroundCheck, MovementController, MovementMode, Player};
pub use resources::ControllerTuning;

use bevy::prelude::*;

use crate::core::ControllerSet;
use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{
    apply_horizontal_movement, apply_input_actions, detect_ground, tick_sprint_charge,
    update_facing,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerTuning>()
            .add_systems(Startup, (spawn_test_room, spawn_player))
            .add_systems(
                Update,
                (tick_sprint_charge, apply_input_actions)
                    .chain()
                    .in_set(ControllerSet::Actions),
            )
            .add_systems(Update, detect_ground.in_set(ControllerSet::Ground))
            .add_systems(
                Update,
                (apply_horizontal_movement, update_facing).in_set(ControllerSet::Motion),
            );
    }
}
