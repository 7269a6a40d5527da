//! Content domain: RON-backed tuning data and its loader.

mod data;
mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{BodyDef, CharacterDef, DataFile};
pub use loader::{ContentLoadError, load_characters};
pub use registry::ContentRegistry;
pub use validation::{ValidationError, validate_character};

use bevy::prelude::*;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        // PreStartup so the registry exists before bootstrap systems spawn.
        app.add_systems(PreStartup, loader::load_content);
    }
}
