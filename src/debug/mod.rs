//! Debug drawing for the ground probe.

use bevy::prelude::*;

use crate::movement::{ControllerTuning, GroundCheck};

const GROUND_RAY_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_ground_check_ray);
    }
}

fn draw_ground_check_ray(
    mut gizmos: Gizmos,
    tuning: Res<ControllerTuning>,
    query: Query<(&Transform, &GroundCheck)>,
) {
    for (transform, ground_check) in &query {
        let origin = transform.translation.truncate() + ground_check.anchor;
        gizmos.ray_2d(origin, Vec2::NEG_Y * tuning.ground_line, GROUND_RAY_COLOR);
    }
}
