//! Combat domain: health, stun status and damage dispatch.

mod components;
mod events;
mod spawn;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{Health, Stun};
pub use events::{DamageEvent, DeathEvent, StunEvent};
pub use spawn::{FIGHTER_SIZE, FighterBundle};

use bevy::prelude::*;

use crate::combat::systems::{apply_damage, apply_stun, process_deaths, update_stun_timers};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<DamageEvent>()
            .add_message::<StunEvent>()
            .add_message::<DeathEvent>()
            .add_systems(
                FixedUpdate,
                (update_stun_timers, apply_damage, apply_stun, process_deaths).chain(),
            );
    }
}
