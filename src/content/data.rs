//! Content data: the shape of dash_pierce.ron.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::abilities::DashPierceTuning;
use crate::stage::StageConfig;

/// Gameplay configuration read once at startup. Missing sections fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct GameplayConfig {
    pub schema_version: u32,
    pub dash_pierce: DashPierceTuning,
    pub stage: StageConfig,
}
