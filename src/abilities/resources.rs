//! Abilities domain: body locks waiting for release.

use bevy::prelude::*;

use crate::abilities::body_lock::BodyLockSequencer;
use crate::abilities::host::BodyModes;

/// Every trailing body lock still holding at least one group.
///
/// Locks outlive the dash that created them, so a new dash can start while an older
/// lock is still counting down.
#[derive(Resource, Debug, Default)]
pub struct BodyLocks {
    active: Vec<BodyLockSequencer<Entity>>,
}

impl BodyLocks {
    /// Lock a resolved dash's bodies, taking over any body an older lock still holds.
    pub fn lock<H: BodyModes<Entity>>(
        &mut self,
        host: &mut H,
        mover: Entity,
        opponents: &[Entity],
        mover_lock: f32,
        opponent_lock: f32,
    ) {
        if let Some(lock) = BodyLockSequencer::begin(
            host,
            &mut self.active,
            mover,
            opponents,
            mover_lock,
            opponent_lock,
        ) {
            self.active.push(lock);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Advance every lock by `dt` and drop the ones fully released.
    pub fn advance<H: BodyModes<Entity>>(&mut self, host: &mut H, dt: f32) {
        for lock in &mut self.active {
            lock.advance(host, dt);
        }
        self.active.retain(|lock| !lock.is_finished());
    }
}
