//! Movement domain: fighter components, input sampling and locomotion.

mod bootstrap;
mod components;
mod resources;
mod systems;

pub use components::{Facing, Fighter, GameLayer, Ground, Player};
pub use resources::MovementInput;

pub(crate) use systems::read_input;

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{apply_walk, sync_facing_sprites, update_facing};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (read_input, update_facing, apply_walk, sync_facing_sprites).chain(),
            );
    }
}
