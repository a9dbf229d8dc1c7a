//! Abilities domain: end-of-dash placement of the dasher and latched opponents.

use bevy::prelude::*;

use crate::abilities::host::DashHost;
use crate::stage::BoundaryLimits;

/// Where the dasher lands: `stop_behind` short of the end point, against the travel direction.
pub fn mover_end_position(
    end_point: Vec2,
    direction: Dir2,
    stop_behind: f32,
    limits: &BoundaryLimits,
) -> Vec2 {
    limits.clamp(end_point - *direction * stop_behind)
}

/// Where the `index`-th latched opponent lands: stacked upward from the end point.
pub fn stacked_position(
    end_point: Vec2,
    index: usize,
    spacing: f32,
    limits: &BoundaryLimits,
) -> Vec2 {
    limits.clamp(end_point + Vec2::Y * (index as f32 * spacing))
}

/// Snap the dasher and every latched opponent into place, then kill residual motion.
///
/// Returns the dasher's final position.
#[allow(clippy::too_many_arguments)]
pub fn resolve_end_positions<B, H>(
    host: &mut H,
    mover: B,
    latched: &[B],
    end_point: Vec2,
    direction: Dir2,
    stop_behind: f32,
    spacing: f32,
    limits: &BoundaryLimits,
) -> Vec2
where
    B: Copy,
    H: DashHost<B>,
{
    let mover_end = mover_end_position(end_point, direction, stop_behind, limits);
    host.move_to(mover, mover_end);

    for (index, &opponent) in latched.iter().enumerate() {
        host.move_to(opponent, stacked_position(end_point, index, spacing, limits));
    }

    host.halt(mover);
    for &opponent in latched {
        host.halt(opponent);
    }

    mover_end
}
