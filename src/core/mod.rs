//! Core domain: frame ordering and camera setup.

mod systems;

use bevy::prelude::*;

use crate::core::systems::setup_camera;

/// Per-frame phases of the controller, run in this order every `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    /// Sample bindings and emit action messages
    Input,
    /// Apply action messages to controller state
    Actions,
    /// Ground probe
    Ground,
    /// Horizontal velocity and facing
    Motion,
    /// Animation parameter push and clip selection
    Animation,
}

/// Chain the controller phases on the `Update` schedule.
pub fn configure_controller_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            ControllerSet::Input,
            ControllerSet::Actions,
            ControllerSet::Ground,
            ControllerSet::Motion,
            ControllerSet::Animation,
        )
            .chain(),
    );
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        configure_controller_sets(app);
        app.add_systems(Startup, setup_camera);
    }
}
