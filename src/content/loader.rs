//! Content domain: loader for RON tuning files at startup.

use bevy::prelude::*;
use ron::Options;
use ron::extensions::Extensions;
use std::fs;
use std::path::Path;

use super::data::{CharacterDef, DataFile};
use super::registry::ContentRegistry;
use super::validation::validate_character;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl ContentLoadError {
    fn new(path: &Path, message: impl Into<String>) -> Self {
        Self {
            file: path.display().to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Parse a `DataFile<T>` wrapper from a RON file on disk.
fn read_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = fs::read_to_string(path)
        .map_err(|e| ContentLoadError::new(path, format!("IO error: {e}")))?;

    let data: DataFile<T> = Options::default()
        .with_default_extension(Extensions::IMPLICIT_SOME)
        .from_str(&contents)
        .map_err(|e| ContentLoadError::new(path, format!("Parse error: {e}")))?;

    Ok(data.items)
}

/// Load character tuning from `characters.ron` under `base_path` into a
/// registry. Definitions that fail range validation are skipped; callers fall
/// back to defaults for anything missing.
pub fn load_characters(base_path: &Path) -> Result<ContentRegistry, ContentLoadError> {
    let mut registry = ContentRegistry::default();

    for def in read_data_file::<CharacterDef>(&base_path.join("characters.ron"))? {
        let errors = validate_character(&def);
        if errors.is_empty() {
            registry.characters.insert(def.id.clone(), def);
        } else {
            for error in &errors {
                warn!("rejected tuning: {}", error);
            }
        }
    }

    Ok(registry)
}

/// Startup system: load the registry, logging and continuing on failure so
/// bootstrap systems can fall back to built-in defaults.
pub(crate) fn load_content(mut commands: Commands) {
    match load_characters(Path::new("assets/data")) {
        Ok(registry) => {
            info!("loaded {} character definitions", registry.characters.len());
            commands.insert_resource(registry);
        }
        Err(e) => {
            error!("{}", e);
        }
    }
}
