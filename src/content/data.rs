//! Data definitions for the controller RON files.
//!
//! These structs mirror assets/data/*.ron and are only used for
//! deserialization. Bindings stay as names here; validation resolves them.

use serde::{Deserialize, Serialize};

use crate::movement::ControllerTuning;

// ============================================================================
// Common wrapper for list files
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Tuning (controller.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControllerFile {
    pub schema_version: u32,
    pub tuning: ControllerTuning,
}

// ============================================================================
// Action maps (input_actions.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum BindingDef {
    /// Keyboard key by `KeyCode` name, e.g. `Key("Space")`
    Key(String),
    /// Gamepad button by name, e.g. `Button("South")`
    Button(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum StickDef {
    Left,
    Right,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AxisBindingDef {
    pub up: Vec<BindingDef>,
    pub down: Vec<BindingDef>,
    pub left: Vec<BindingDef>,
    pub right: Vec<BindingDef>,
    pub stick: Option<StickDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActionMapDef {
    pub name: String,
    #[serde(default)]
    pub move_axis: AxisBindingDef,
    #[serde(default)]
    pub crouch: Vec<BindingDef>,
    #[serde(default)]
    pub jump: Vec<BindingDef>,
    #[serde(default)]
    pub sprint: Vec<BindingDef>,
}
