//! Core domain: camera setup.

use bevy::prelude::*;

/// World units rendered per screen pixel. Tuning values are in world units
/// (one unit is roughly one character width).
const WORLD_UNITS_PER_PIXEL: f32 = 1.0 / 48.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: WORLD_UNITS_PER_PIXEL,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, 2.0, 0.0),
    ));
}
