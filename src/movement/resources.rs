//! Movement domain: tuning resource.

use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::MovementMode;

/// Authoring-time constants for the controller, in world units and seconds.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerTuning {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub sprint_speed: f32,
    pub crouch_speed: f32,
    pub jump_force: f32,
    /// Length of the downward ground probe
    pub ground_line: f32,
    /// How long Sprint must be held before Run upgrades to Sprint
    pub sprint_delay_secs: f32,
    /// Horizontal input magnitude below which the character stops
    pub deadzone: f32,
}

impl Default for ControllerTuning {
    fn default() -> Self {
        Self {
            walk_speed: 6.0,
            run_speed: 10.0,
            sprint_speed: 14.0,
            crouch_speed: 4.0,
            jump_force: 10.0,
            ground_line: 1.0,
            sprint_delay_secs: 5.0,
            deadzone: 0.1,
        }
    }
}

impl ControllerTuning {
    pub fn speed_for(&self, mode: MovementMode) -> f32 {
        match mode {
            MovementMode::Walk => self.walk_speed,
            MovementMode::Run => self.run_speed,
            MovementMode::Sprint => self.sprint_speed,
            MovementMode::Crouch => self.crouch_speed,
        }
    }

    /// Negative and NaN delays collapse to zero, values too large for a
    /// `Duration` saturate.
    pub fn sprint_delay(&self) -> Duration {
        Duration::try_from_secs_f32(self.sprint_delay_secs.max(0.0)).unwrap_or(Duration::MAX)
    }
}
