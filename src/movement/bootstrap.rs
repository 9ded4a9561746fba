//! Movement domain: player spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::{AnimationController, AnimationState, AnimatorParameters};
use crate::input::PlayerInput;
use crate::movement::{GameLayer, GroundCheck, MovementController, Player};

const PLAYER_SIZE: Vec2 = Vec2::new(1.0, 2.0);

pub(crate) fn spawn_player(mut commands: Commands) {
    info!("Spawning player");

    commands.spawn((
        // Identity & Movement
        (
            Player,
            PlayerInput::default(),
            MovementController::default(),
            GroundCheck {
                anchor: Vec2::new(0.0, -PLAYER_SIZE.y * 0.5),
            },
        ),
        // Animation
        (AnimatorParameters::default(), AnimationController::default()),
        // Rendering
        Sprite {
            color: AnimationState::default().tint(),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 2.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}
