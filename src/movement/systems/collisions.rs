//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ControllerTuning, GameLayer, GroundCheck, MovementController};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<ControllerTuning>,
    mut query: Query<(Entity, &Transform, &GroundCheck, &mut MovementController)>,
) {
    // Only walkable geometry counts, never the character itself
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (entity, transform, ground_check, mut controller) in &mut query {
        let was_grounded = controller.grounded;
        let origin = transform.translation.truncate() + ground_check.anchor;

        let hit = spatial_query.cast_ray(
            origin,
            Dir2::NEG_Y,
            tuning.ground_line,
            true,
            &ground_filter,
        );

        controller.grounded = hit.is_some();

        if controller.grounded != was_grounded {
            debug!("{entity}: grounded={}", controller.grounded);
        }
    }
}
