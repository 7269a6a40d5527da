//! Content domain: runtime registry of loaded definitions.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::CharacterDef;

/// All loaded character definitions, keyed by id. Absent when loading failed;
/// consumers treat that as "use built-in defaults".
#[derive(Resource, Debug, Default)]
pub struct ContentRegistry {
    pub characters: HashMap<String, CharacterDef>,
}
