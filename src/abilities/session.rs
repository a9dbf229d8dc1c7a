//! Abilities domain: one Dash Pierce activation, stepped once per fixed tick.
//!
//! A session owns everything the dash mutates. [`DashSession::begin`] snapshots the
//! dasher's gravity, collision layers and trigger flag before overriding them, and every
//! way out of the movement loop goes through `finish`, which places the bodies and puts
//! the snapshot back.

use std::fmt::Debug;
use std::hash::Hash;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::abilities::host::DashHost;
use crate::abilities::latch::LatchSet;
use crate::abilities::placement::resolve_end_positions;
use crate::abilities::tuning::DashPierceTuning;
use crate::movement::GameLayer;
use crate::stage::{BoundaryLimits, StageError};

/// Why a dash could not start. Nothing has been mutated when this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashAbort {
    /// A stage boundary collider is missing
    Stage(StageError),
    /// The dasher has no body, collider or layers to work with
    MissingBody,
}

impl std::fmt::Display for DashAbort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashAbort::Stage(err) => write!(f, "dash aborted: {}", err),
            DashAbort::MissingBody => {
                write!(f, "dash aborted: dasher is missing its rigid body or collider")
            }
        }
    }
}

impl std::error::Error for DashAbort {}

impl From<StageError> for DashAbort {
    fn from(err: StageError) -> Self {
        DashAbort::Stage(err)
    }
}

/// What ended the movement loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashStop {
    /// The full duration elapsed
    TimeBudget,
    /// The probe ran into ground geometry
    Wall,
    /// The dasher's body disappeared mid-dash
    MoverLost,
}

/// Result of a resolved dash
#[derive(Debug, Clone)]
pub struct DashOutcome<B> {
    /// Opponents in first-contact order
    pub latched: Vec<B>,
    /// Raw end point, before the stop-behind offset
    pub end_point: Vec2,
    /// Where the dasher was placed
    pub mover_end: Vec2,
    /// Movement steps performed
    pub ticks: u32,
    pub stop: DashStop,
}

#[derive(Debug, Clone)]
pub enum DashStep<B> {
    /// Still moving; step again next tick
    Continue,
    /// The loop ended this tick and bodies have been placed
    Finished(DashOutcome<B>),
    /// The session already finished; nothing was done
    Spent,
}

/// Dasher state overridden for the duration of the movement loop
#[derive(Debug, Clone, Copy)]
struct MoverSnapshot {
    gravity_scale: f32,
    layers: CollisionLayers,
    trigger: bool,
}

#[derive(Debug)]
pub struct DashSession<B> {
    mover: B,
    direction: Dir2,
    limits: BoundaryLimits,
    tuning: DashPierceTuning,
    start: Vec2,
    end_point: Vec2,
    elapsed: f32,
    ticks: u32,
    ghost_timer: f32,
    latched: LatchSet<B>,
    snapshot: MoverSnapshot,
    spent: bool,
}

impl<B> DashSession<B>
where
    B: Copy + Eq + Hash + Debug,
{
    /// Snapshot the dasher, suspend its physics and compute the unobstructed end point.
    pub fn begin<H: DashHost<B>>(
        host: &mut H,
        mover: B,
        direction: Dir2,
        limits: BoundaryLimits,
        tuning: &DashPierceTuning,
    ) -> Result<Self, DashAbort> {
        let start = host.position(mover).ok_or(DashAbort::MissingBody)?;
        let snapshot = MoverSnapshot {
            gravity_scale: host.gravity_scale(mover).ok_or(DashAbort::MissingBody)?,
            layers: host.collision_layers(mover).ok_or(DashAbort::MissingBody)?,
            trigger: host.is_trigger(mover).ok_or(DashAbort::MissingBody)?,
        };

        host.set_trigger(mover, true);
        host.set_collision_layers(mover, GameLayer::no_collision_layers());
        host.set_gravity_scale(mover, 0.0);
        host.halt(mover);

        let end_point = limits.clamp(start + *direction * tuning.dash_distance);

        Ok(Self {
            mover,
            direction,
            limits,
            tuning: tuning.clone(),
            start,
            end_point,
            elapsed: 0.0,
            ticks: 0,
            ghost_timer: 0.0,
            latched: LatchSet::new(),
            snapshot,
            spent: false,
        })
    }

    pub fn direction(&self) -> Dir2 {
        self.direction
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Current end point; moves closer when a wall is hit.
    pub fn end_point(&self) -> Vec2 {
        self.end_point
    }

    pub fn is_spent(&self) -> bool {
        self.spent
    }

    /// Length of one step's sweep for a tick of `dt`.
    pub fn sweep_length(&self, dt: f32) -> f32 {
        self.tuning.speed() * dt + self.tuning.sweep_padding
    }

    pub fn latch_radius(&self) -> f32 {
        self.tuning.latch_radius
    }

    /// Dasher and opponent lock times, as configured when the dash started.
    pub fn lock_times(&self) -> (f32, f32) {
        (self.tuning.mover_lock_time, self.tuning.opponent_lock_time)
    }

    /// Advance the dash by one fixed tick of `dt` seconds.
    pub fn step<H: DashHost<B>>(&mut self, host: &mut H, dt: f32) -> DashStep<B> {
        if self.spent {
            return DashStep::Spent;
        }

        if self.elapsed >= self.tuning.dash_duration {
            return DashStep::Finished(self.finish(host, DashStop::TimeBudget));
        }

        let Some(origin) = host.position(self.mover) else {
            return DashStep::Finished(self.finish(host, DashStop::MoverLost));
        };

        // Nothing but the dash itself may move the body
        host.halt(self.mover);

        let step = *self.direction * (self.tuning.speed() * dt);
        let sweep_length = step.length() + self.tuning.sweep_padding;
        host.move_to(self.mover, self.limits.clamp(origin + step));
        self.ticks += 1;

        let ghost_interval = self.tuning.ghost_interval();
        self.ghost_timer += dt;
        if ghost_interval > 0.0 && self.ghost_timer >= ghost_interval {
            host.spawn_trail_marker(self.mover, origin);
            self.ghost_timer = 0.0;
        }

        if let Some(hit) = host.raycast(origin, self.direction, sweep_length, GameLayer::Ground) {
            self.end_point = self
                .limits
                .clamp(hit.point - *self.direction * self.tuning.wall_clearance);
            debug!(
                "Dash wall stop at {:?} on tick {}, end point {:?}",
                hit.point, self.ticks, self.end_point
            );
            return DashStep::Finished(self.finish(host, DashStop::Wall));
        }

        let hits = host.sweep_circle(
            origin,
            self.tuning.latch_radius,
            self.direction,
            sweep_length,
            GameLayer::Fighters,
        );
        for opponent in hits {
            if opponent == self.mover {
                continue;
            }
            if !self.latched.insert(opponent) {
                continue;
            }

            host.apply_damage(self.mover, opponent, self.tuning.dash_damage);
            host.apply_stun(opponent, self.tuning.stun_duration);
            host.halt(opponent);

            debug!(
                "Dash latched {:?} on tick {} ({} latched)",
                opponent,
                self.ticks,
                self.latched.len()
            );
        }

        self.elapsed += dt;
        DashStep::Continue
    }

    /// Place every body, restore the dasher's physics and close the session.
    fn finish<H: DashHost<B>>(&mut self, host: &mut H, stop: DashStop) -> DashOutcome<B> {
        self.spent = true;
        let latched = std::mem::take(&mut self.latched).into_vec();

        let mover_end = resolve_end_positions(
            host,
            self.mover,
            &latched,
            self.end_point,
            self.direction,
            self.tuning.stop_behind_offset,
            self.tuning.stack_vertical_spacing,
            &self.limits,
        );

        host.set_collision_layers(self.mover, self.snapshot.layers);
        host.set_gravity_scale(self.mover, self.snapshot.gravity_scale);
        host.set_trigger(self.mover, self.snapshot.trigger);

        DashOutcome {
            latched,
            end_point: self.end_point,
            mover_end,
            ticks: self.ticks,
            stop,
        }
    }
}
