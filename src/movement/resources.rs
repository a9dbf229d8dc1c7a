//! Movement domain: input resources.

use bevy::prelude::*;

/// Edge-triggered input sampled once per frame for the local fighter
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub dash_just_pressed: bool,
}
