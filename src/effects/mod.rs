//! Effects domain: purely visual feedback with no gameplay weight.

mod ghost;
#[cfg(test)]
mod tests;

pub use ghost::{GhostSpawner, GhostTrail, spawn_ghost};

use bevy::prelude::*;

use crate::effects::ghost::fade_ghost_trails;

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, fade_ghost_trails);
    }
}
