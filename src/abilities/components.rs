//! Abilities domain: components carried by fighters that can dash.

use bevy::prelude::*;

use crate::abilities::session::DashSession;

/// Marks a fighter as owning the Dash Pierce ability
#[derive(Component, Debug, Default)]
pub struct DashPierce;

/// Exclusivity and cooldown bookkeeping for a fighter's abilities
#[derive(Component, Debug, Default, Clone)]
pub struct AbilityState {
    /// Set while any ability owns the fighter
    pub is_performing_ability: bool,
    /// Set while the dash movement loop runs; the floor safety stop may clear it early
    pub is_dashing: bool,
    /// Time (seconds since startup) the last dash started
    pub last_activation: Option<f32>,
}

impl AbilityState {
    pub fn begin_dash(&mut self, now: f32) {
        self.is_performing_ability = true;
        self.is_dashing = true;
        self.last_activation = Some(now);
    }

    pub fn end_dash(&mut self) {
        self.is_performing_ability = false;
        self.is_dashing = false;
    }

    /// Touching ground mid-dash only drops the flag; the dash keeps stepping.
    pub fn safety_stop(&mut self) {
        self.is_dashing = false;
    }
}

/// A dash in flight. Removed once the movement loop has resolved.
#[derive(Component, Debug)]
pub struct ActiveDash(pub DashSession<Entity>);
