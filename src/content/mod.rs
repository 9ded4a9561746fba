//! Content domain: RON-driven controller tuning and input bindings.

mod data;
mod loader;
mod validation;


pub use data::{ActionMapDef, AxisBindingDef, BindingDef, ControllerFile, DataFile, StickDef};
pub use loader::{ContentLoadError, load_action_maps, load_tuning, parse_ron};
pub use validation::{ValidationError, resolve_action_maps, validate_tuning};

use std::path::PathBuf;

use bevy::prelude::*;

use crate::input::ActionMaps;
use crate::movement::ControllerTuning;

pub const CONTROLLER_FILE: &str = "controller.ron";
pub const INPUT_ACTIONS_FILE: &str = "input_actions.ron";

/// Where the controller data files live.
#[derive(Resource, Debug, Clone)]
pub struct ContentPaths {
    pub data_dir: PathBuf,
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("assets/data"),
        }
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentPaths>()
            .add_systems(PreStartup, load_controller_content);
    }
}

/// Load tuning and action maps, falling back to built-in defaults for any
/// file that cannot be read.
fn load_controller_content(mut commands: Commands, paths: Res<ContentPaths>) {
    match load_tuning(&paths.data_dir.join(CONTROLLER_FILE)) {
        Ok(tuning) => {
            for e in validate_tuning(&tuning) {
                warn!("{}", e);
            }
            info!("Loaded controller tuning: {:?}", tuning);
            commands.insert_resource(tuning);
        }
        Err(e) => {
            warn!("{}; using default tuning", e);
            commands.insert_resource(ControllerTuning::default());
        }
    }

    match load_action_maps(&paths.data_dir.join(INPUT_ACTIONS_FILE)) {
        Ok(defs) => {
            let (maps, errors) = resolve_action_maps(&defs);
            for e in &errors {
                warn!("{}", e);
            }
            if maps.maps.is_empty() {
                warn!("No action maps loaded; using default bindings");
                commands.insert_resource(ActionMaps::default());
            } else {
                info!("Loaded {} action map(s)", maps.maps.len());
                commands.insert_resource(maps);
            }
        }
        Err(e) => {
            warn!("{}; using default bindings", e);
            commands.insert_resource(ActionMaps::default());
        }
    }
}
