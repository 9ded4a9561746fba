//! Loader for controller RON files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use crate::movement::ControllerTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse RON text; `file` only labels the error.
pub fn parse_ron<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load the tuning block from controller.ron.
pub fn load_tuning(path: &Path) -> Result<ControllerTuning, ContentLoadError> {
    let contents = read_file(path)?;
    let file: ControllerFile = parse_ron(&path.display().to_string(), &contents)?;
    Ok(file.tuning)
}

/// Load all action map definitions from input_actions.ron.
pub fn load_action_maps(path: &Path) -> Result<Vec<ActionMapDef>, ContentLoadError> {
    let contents = read_file(path)?;
    let file: DataFile<ActionMapDef> = parse_ron(&path.display().to_string(), &contents)?;
    Ok(file.items)
}
