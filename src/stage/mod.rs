//! Stage domain: boundary colliders and the limits they impose on fighters.

mod bounds;
mod components;
mod resources;
mod spawn;

pub use bounds::{BoundaryLimits, StageError, resolve_boundary_limits};
pub use components::StageBoundary;
pub use resources::StageConfig;

use bevy::prelude::*;

use crate::stage::spawn::spawn_stage;

pub struct StagePlugin;

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StageConfig>()
            .add_systems(Startup, spawn_stage);
    }
}
