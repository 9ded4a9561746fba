//! Movement domain: demo level geometry.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

fn spawn_ground_block(commands: &mut Commands, color: Color, size: Vec2, position: Vec2) {
    commands.spawn((
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Floor
    spawn_ground_block(
        &mut commands,
        ground_color,
        Vec2::new(40.0, 1.0),
        Vec2::new(0.0, -4.0),
    );

    // Platforms
    spawn_ground_block(
        &mut commands,
        platform_color,
        Vec2::new(4.0, 0.5),
        Vec2::new(-6.0, -1.0),
    );
    spawn_ground_block(
        &mut commands,
        platform_color,
        Vec2::new(4.0, 0.5),
        Vec2::new(6.0, 1.0),
    );
    spawn_ground_block(
        &mut commands,
        platform_color,
        Vec2::new(3.0, 0.5),
        Vec2::new(0.0, 3.0),
    );
}
