//! Animation parameter table written by the controller.

use std::collections::HashMap;

use bevy::prelude::*;

/// Absolute horizontal speed, pushed every frame.
pub const PARAM_SPEED: &str = "Speed";
/// Ground probe result, pushed every frame.
pub const PARAM_GROUNDED: &str = "isGrounded";
/// Pushed only when crouch starts or stops.
pub const PARAM_CROUCHED: &str = "Crouched";

#[derive(Debug, Clone, Copy, PartialEq)]
enum AnimatorParam {
    Float(f32),
    Bool(bool),
}

/// Named parameters consumed by the animation graph.
#[derive(Component, Debug, Default, Clone)]
pub struct AnimatorParameters {
    values: HashMap<String, AnimatorParam>,
}

impl AnimatorParameters {
    pub fn set_float(&mut self, name: &str, value: f32) {
        self.values
            .insert(name.to_string(), AnimatorParam::Float(value));
    }

    pub fn set_bool(&mut self, name: &str, value: bool) {
        self.values.insert(name.to_string(), AnimatorParam::Bool(value));
    }

    pub fn float(&self, name: &str) -> Option<f32> {
        match self.values.get(name) {
            Some(AnimatorParam::Float(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(AnimatorParam::Bool(v)) => Some(*v),
            _ => None,
        }
    }
}
