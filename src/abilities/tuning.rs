//! Abilities domain: Dash Pierce tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct DashPierceTuning {
    /// Distance covered by a full, unobstructed dash
    pub dash_distance: f32,
    /// Seconds the movement loop runs; also the activation cooldown
    pub dash_duration: f32,
    pub dash_damage: f32,
    /// How far behind the dash end point the dasher stops
    pub stop_behind_offset: f32,
    /// Vertical gap between stacked latched opponents
    pub stack_vertical_spacing: f32,
    pub stun_duration: f32,
    /// Radius of the disk swept along the path to find opponents
    pub latch_radius: f32,
    /// Extra reach added to every per-step sweep
    pub sweep_padding: f32,
    /// After-images spawned over one dash
    pub ghost_count: f32,
    /// Gap kept between the dash end point and a wall it ran into
    pub wall_clearance: f32,
    /// Seconds the dasher stays kinematic after the dash resolves
    pub mover_lock_time: f32,
    /// Seconds latched opponents stay kinematic after the dash resolves
    pub opponent_lock_time: f32,
}

impl Default for DashPierceTuning {
    fn default() -> Self {
        Self {
            dash_distance: 10.0,
            dash_duration: 0.3,
            dash_damage: 10.0,
            stop_behind_offset: 0.6,
            stack_vertical_spacing: 0.02,
            stun_duration: 0.5,
            latch_radius: 0.5,
            sweep_padding: 0.1,
            ghost_count: 10.0,
            wall_clearance: 0.05,
            mover_lock_time: 0.06,
            opponent_lock_time: 0.18,
        }
    }
}

impl DashPierceTuning {
    /// Travel speed of the movement loop; zero for a degenerate duration.
    pub fn speed(&self) -> f32 {
        if self.dash_duration > 0.0 {
            self.dash_distance / self.dash_duration
        } else {
            0.0
        }
    }

    /// Seconds between two after-images.
    pub fn ghost_interval(&self) -> f32 {
        if self.ghost_count > 0.0 {
            self.dash_duration / self.ghost_count
        } else {
            self.dash_duration
        }
    }
}
