//! Stage domain: layout configuration.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Training stage layout, in world units
#[derive(Resource, Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct StageConfig {
    /// Distance between the inner faces of the two walls
    pub width: f32,
    pub wall_height: f32,
    pub wall_thickness: f32,
    /// Y of the walkable top of the floor
    pub floor_top: f32,
    /// X of an optional pillar standing on the floor
    pub obstacle_x: Option<f32>,
    pub player_spawn_x: f32,
    /// Training dummies spawned by dev tools
    pub dummy_count: u32,
    pub dummy_seed: u64,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            width: 24.0,
            wall_height: 12.0,
            wall_thickness: 1.0,
            floor_top: -4.0,
            obstacle_x: Some(9.0),
            player_spawn_x: -8.0,
            dummy_count: 3,
            dummy_seed: 7,
        }
    }
}

impl StageConfig {
    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }
}
