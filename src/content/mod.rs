//! Content domain: data-driven tuning loaded from RON files.

mod data;
mod loader;
#[cfg(test)]
mod tests;

pub use data::GameplayConfig;
pub use loader::{ContentLoadError, load_gameplay_config, parse_single};

use bevy::prelude::*;
use std::path::Path;

/// Directory holding the RON data files
const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

/// Insert tuning from disk, keeping built-in defaults if the file cannot be used.
fn load_content(mut commands: Commands) {
    let config = match load_gameplay_config(Path::new(DATA_DIR)) {
        Ok(config) => {
            info!(
                "Loaded gameplay config (schema {}): dash distance={}, duration={}, locks={}/{}",
                config.schema_version,
                config.dash_pierce.dash_distance,
                config.dash_pierce.dash_duration,
                config.dash_pierce.mover_lock_time,
                config.dash_pierce.opponent_lock_time
            );
            config
        }
        Err(e) => {
            warn!("{}; using default gameplay config", e);
            GameplayConfig::default()
        }
    };

    commands.insert_resource(config.dash_pierce);
    commands.insert_resource(config.stage);
}
