//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::detect_ground;
pub(crate) use input::{apply_input_actions, tick_sprint_charge};
pub(crate) use movement::{apply_horizontal_movement, update_facing};
