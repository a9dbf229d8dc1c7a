//! Combat domain: damage, stun and death handling.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{Health, Stun};
use crate::combat::events::{DamageEvent, DeathEvent, StunEvent};
use crate::movement::{Fighter, Player};

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    mut query: Query<(&mut Health, Option<&Fighter>)>,
) {
    for event in damage_events.read() {
        let Ok((mut health, fighter)) = query.get_mut(event.target) else {
            continue;
        };

        if health.is_dead() {
            continue;
        }

        let dealt = health.take_damage(event.amount);
        debug!(
            "{} took {} damage from {:?} ({}/{})",
            fighter.map_or("entity", |f| f.name.as_str()),
            dealt,
            event.source,
            health.current,
            health.max
        );

        if health.is_dead() {
            death_events.write(DeathEvent {
                entity: event.target,
            });
        }
    }
}

pub(crate) fn apply_stun(mut stun_events: MessageReader<StunEvent>, mut query: Query<&mut Stun>) {
    for event in stun_events.read() {
        // Targets without a status component simply ignore stuns
        if let Ok(mut stun) = query.get_mut(event.target) {
            stun.apply(event.duration);
        }
    }
}

pub(crate) fn update_stun_timers(time: Res<Time>, mut query: Query<&mut Stun>) {
    let dt = time.delta_secs();
    for mut stun in &mut query {
        stun.tick(dt);
    }
}

/// Defeated opponents leave the stage; the player stays down but on screen.
pub(crate) fn process_deaths(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    query: Query<(Option<&Fighter>, Has<Player>)>,
) {
    for event in death_events.read() {
        let Ok((fighter, is_player)) = query.get(event.entity) else {
            continue;
        };

        info!(
            "{} was defeated",
            fighter.map_or("entity", |f| f.name.as_str())
        );

        if !is_player {
            commands.entity(event.entity).despawn();
        }
    }
}
