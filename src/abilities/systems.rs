//! Abilities domain: systems driving Dash Pierce from input to lock release.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::abilities::components::{AbilityState, ActiveDash, DashPierce};
use crate::abilities::gate::{GateCheck, dash_gate_open};
use crate::abilities::resources::BodyLocks;
use crate::abilities::session::{DashAbort, DashSession, DashStep};
use crate::abilities::tuning::DashPierceTuning;
use crate::abilities::world::DashWorld;
use crate::combat::{Health, Stun};
use crate::movement::{Facing, Fighter, Ground, MovementInput, Player};
use crate::stage::{StageBoundary, resolve_boundary_limits};

/// Start a dash for the local fighter when the input edge arrives and the gate is open.
pub(crate) fn start_dash_pierce(
    input: Res<MovementInput>,
    time: Res<Time>,
    tuning: Res<DashPierceTuning>,
    boundaries: Query<(&StageBoundary, &ColliderAabb)>,
    mut players: Query<
        (
            Entity,
            &Fighter,
            &Facing,
            &Health,
            Option<&Stun>,
            &mut AbilityState,
        ),
        (With<Player>, With<DashPierce>),
    >,
    mut world: DashWorld,
) {
    if !input.dash_just_pressed {
        return;
    }

    let now = time.elapsed_secs();

    for (entity, fighter, facing, health, stun, mut ability) in &mut players {
        let check = GateCheck {
            alive: health.is_alive(),
            stunned: stun.is_some_and(Stun::is_stunned),
            now,
            cooldown: tuning.dash_duration,
        };
        if !dash_gate_open(&ability, &check) {
            continue;
        }

        match begin_dash(&mut world, &boundaries, entity, *facing, &tuning) {
            Ok(session) => {
                ability.begin_dash(now);
                info!(
                    "{} dashes {:?} from {:?} toward {:?}",
                    fighter.name,
                    facing,
                    session.start(),
                    session.end_point()
                );
                world.commands.entity(entity).insert(ActiveDash(session));
            }
            Err(err) => error!("{}: {}", fighter.name, err),
        }
    }
}

fn begin_dash(
    world: &mut DashWorld,
    boundaries: &Query<(&StageBoundary, &ColliderAabb)>,
    entity: Entity,
    facing: Facing,
    tuning: &DashPierceTuning,
) -> Result<DashSession<Entity>, DashAbort> {
    let limits = resolve_boundary_limits(boundaries)?;
    DashSession::begin(world, entity, facing.direction(), limits, tuning)
}

/// Step every dash in flight; resolved dashes hand their bodies to a trailing lock.
pub(crate) fn advance_dash_sessions(
    time: Res<Time>,
    mut locks: ResMut<BodyLocks>,
    mut sessions: Query<(Entity, &Fighter, &mut ActiveDash, &mut AbilityState)>,
    mut world: DashWorld,
) {
    let dt = time.delta_secs();

    for (entity, fighter, mut active, mut ability) in &mut sessions {
        let DashStep::Finished(outcome) = active.0.step(&mut world, dt) else {
            continue;
        };

        // Flags, gravity and layers are back before the lock begins
        ability.end_dash();
        world.commands.entity(entity).remove::<ActiveDash>();

        info!(
            "{} dash resolved ({:?}) after {} ticks: end {:?}, landed {:?}, latched {}",
            fighter.name,
            outcome.stop,
            outcome.ticks,
            outcome.end_point,
            outcome.mover_end,
            outcome.latched.len()
        );

        let (mover_lock, opponent_lock) = active.0.lock_times();
        locks.lock(&mut world, entity, &outcome.latched, mover_lock, opponent_lock);
    }
}

pub(crate) fn advance_body_locks(
    time: Res<Time>,
    mut locks: ResMut<BodyLocks>,
    mut world: DashWorld,
) {
    if locks.is_empty() {
        return;
    }
    locks.advance(&mut world, time.delta_secs());
}

/// Touching ground through ordinary collision mid-dash clears `is_dashing`.
///
/// This does not interrupt the movement loop, which still runs to its own end.
pub(crate) fn dash_floor_safety_stop(
    mut collision_events: MessageReader<CollisionStart>,
    ground: Query<(), With<Ground>>,
    mut dashers: Query<(&Fighter, &mut AbilityState)>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (dasher, other) in pairs {
            if !ground.contains(other) {
                continue;
            }
            let Ok((fighter, mut ability)) = dashers.get_mut(dasher) else {
                continue;
            };
            if ability.is_dashing {
                ability.safety_stop();
                debug!("{} touched ground mid-dash, dash flag cleared", fighter.name);
            }
        }
    }
}
