//! Abilities domain: the trailing body lock after a dash resolves.
//!
//! Both the dasher and its latched opponents are forced kinematic on entry. Each group is
//! handed back its own rigid body mode once its configured lock time has passed, so the
//! group with the shorter time is released first.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::abilities::host::BodyModes;

/// The two independently timed groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockGroup {
    Mover,
    Opponents,
}

/// Sequencer states. A dash with both lock times at zero never builds a sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockPhase {
    Locked,
    PartiallyReleased(LockGroup),
    FullyReleased,
}

#[derive(Debug)]
pub struct BodyLockSequencer<B> {
    /// `None` once another lock has taken the dasher over
    mover: Option<(B, RigidBody)>,
    opponents: Vec<(B, RigidBody)>,
    mover_lock: f32,
    opponent_lock: f32,
    elapsed: f32,
    phase: LockPhase,
}

impl<B: Copy + PartialEq> BodyLockSequencer<B> {
    /// Lock the dasher and `opponents`, or return `None` when neither group has lock time.
    ///
    /// A group whose time is zero is still locked, then released before this returns.
    /// A body still held by one of `held` is taken over: the new lock inherits its pre-lock
    /// mode and the older lock lets go of it, so the body always ends in its pre-lock mode.
    pub fn begin<H: BodyModes<B>>(
        host: &mut H,
        held: &mut [Self],
        mover: B,
        opponents: &[B],
        mover_lock: f32,
        opponent_lock: f32,
    ) -> Option<Self> {
        let mover_lock = mover_lock.max(0.0);
        let opponent_lock = opponent_lock.max(0.0);
        if mover_lock <= 0.0 && opponent_lock <= 0.0 {
            return None;
        }

        let current = host.body_mode(mover);
        let mover_mode = current
            .and_then(|_| take_over(held, mover))
            .or(current)
            .unwrap_or(RigidBody::Dynamic);
        host.set_body_mode(mover, RigidBody::Kinematic);

        let opponents = opponents
            .iter()
            .filter_map(|&opponent| {
                let current = host.body_mode(opponent)?;
                let mode = take_over(held, opponent).unwrap_or(current);
                host.set_body_mode(opponent, RigidBody::Kinematic);
                Some((opponent, mode))
            })
            .collect();

        let mut sequencer = Self {
            mover: Some((mover, mover_mode)),
            opponents,
            mover_lock,
            opponent_lock,
            elapsed: 0.0,
            phase: LockPhase::Locked,
        };
        sequencer.release_due(host);
        Some(sequencer)
    }

    pub fn phase(&self) -> LockPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase() == LockPhase::FullyReleased
    }

    /// Advance the timers by `dt` and release whatever is due.
    pub fn advance<H: BodyModes<B>>(&mut self, host: &mut H, dt: f32) -> LockPhase {
        if self.is_finished() {
            return self.phase;
        }

        self.elapsed += dt;
        self.release_due(host);
        self.phase
    }

    fn holds(&self, group: LockGroup) -> bool {
        match self.phase {
            LockPhase::Locked => true,
            LockPhase::PartiallyReleased(released) => released != group,
            LockPhase::FullyReleased => false,
        }
    }

    /// Stop holding `body`, returning its pre-lock mode if this lock still held it.
    fn relinquish(&mut self, body: B) -> Option<RigidBody> {
        if let Some((mover, mode)) = self.mover {
            if mover == body && self.holds(LockGroup::Mover) {
                self.mover = None;
                return Some(mode);
            }
        }

        if self.holds(LockGroup::Opponents) {
            let index = self.opponents.iter().position(|&(opponent, _)| opponent == body)?;
            return Some(self.opponents.swap_remove(index).1);
        }

        None
    }

    fn release_due<H: BodyModes<B>>(&mut self, host: &mut H) {
        let mover_due = self.elapsed >= self.mover_lock;
        let opponents_due = self.elapsed >= self.opponent_lock;

        let next = match (self.phase, mover_due, opponents_due) {
            (LockPhase::Locked, true, true) => {
                self.release(host, LockGroup::Mover);
                self.release(host, LockGroup::Opponents);
                LockPhase::FullyReleased
            }
            (LockPhase::Locked, true, false) => {
                self.release(host, LockGroup::Mover);
                LockPhase::PartiallyReleased(LockGroup::Mover)
            }
            (LockPhase::Locked, false, true) => {
                self.release(host, LockGroup::Opponents);
                LockPhase::PartiallyReleased(LockGroup::Opponents)
            }
            (LockPhase::PartiallyReleased(LockGroup::Mover), _, true) => {
                self.release(host, LockGroup::Opponents);
                LockPhase::FullyReleased
            }
            (LockPhase::PartiallyReleased(LockGroup::Opponents), true, _) => {
                self.release(host, LockGroup::Mover);
                LockPhase::FullyReleased
            }
            (phase, _, _) => phase,
        };

        if next != self.phase {
            debug!("Body lock {:?} -> {:?} at +{:.3}s", self.phase, next, self.elapsed);
            self.phase = next;
        }
    }

    fn release<H: BodyModes<B>>(&self, host: &mut H, group: LockGroup) {
        match group {
            LockGroup::Mover => {
                if let Some((mover, mode)) = self.mover {
                    host.set_body_mode(mover, mode);
                }
            }
            LockGroup::Opponents => {
                for &(opponent, mode) in &self.opponents {
                    host.set_body_mode(opponent, mode);
                }
            }
        }
    }
}

/// Pre-lock mode of `body` if an older lock still holds it; that lock lets go of it.
fn take_over<B: Copy + PartialEq>(
    held: &mut [BodyLockSequencer<B>],
    body: B,
) -> Option<RigidBody> {
    held.iter_mut().find_map(|lock| lock.relinquish(body))
}
