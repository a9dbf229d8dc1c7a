//! Abilities domain: Dash Pierce, a dash that latches onto every opponent it passes.
//!
//! Flow per activation:
//! 1. `start_dash_pierce` checks the gate and begins a [`DashSession`].
//! 2. `advance_dash_sessions` steps it once per fixed tick: move, wall probe, latch sweep.
//! 3. On the last step the dasher and latched opponents are placed and the dasher's
//!    physics restored.
//! 4. A [`BodyLockSequencer`] keeps both groups kinematic for their own lock times.

mod body_lock;
mod components;
mod gate;
mod host;
mod latch;
mod placement;
mod resources;
mod session;
mod systems;
mod tuning;
mod world;

pub use body_lock::{BodyLockSequencer, LockGroup, LockPhase};
pub use components::{AbilityState, ActiveDash, DashPierce};
pub use gate::{GateCheck, dash_gate_open};
pub use host::{BodyModes, DashHost, SweepQuery, WallHit};
pub use latch::LatchSet;
pub use placement::{mover_end_position, resolve_end_positions, stacked_position};
pub use resources::BodyLocks;
pub use session::{DashAbort, DashOutcome, DashSession, DashStep, DashStop};
pub use tuning::DashPierceTuning;
pub use world::DashWorld;

use bevy::prelude::*;

use crate::abilities::systems::{
    advance_body_locks, advance_dash_sessions, dash_floor_safety_stop, start_dash_pierce,
};
use crate::movement::read_input;

pub struct AbilitiesPlugin;

impl Plugin for AbilitiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DashPierceTuning>()
            .init_resource::<BodyLocks>()
            .add_systems(
                Update,
                (
                    start_dash_pierce.after(read_input),
                    dash_floor_safety_stop,
                ),
            )
            .add_systems(FixedUpdate, (advance_body_locks, advance_dash_sessions).chain());
    }
}
