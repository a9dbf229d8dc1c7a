//! Stage domain: world-space limits derived from the boundary colliders.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::stage::components::StageBoundary;

/// Box every position written during a dash is clamped into.
///
/// X is clamped into `[min_x, max_x]`; Y is only floored at `min_y`.
/// `min_x <= max_x` is assumed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryLimits {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
}

impl BoundaryLimits {
    pub fn new(min_x: f32, max_x: f32, min_y: f32) -> Self {
        Self { min_x, max_x, min_y }
    }

    pub fn clamp(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x.clamp(self.min_x, self.max_x), point.y.max(self.min_y))
    }

    /// Left wall's inner face, right wall's inner face, top of the floor.
    pub fn from_aabbs(
        left_wall: Option<&ColliderAabb>,
        right_wall: Option<&ColliderAabb>,
        floor: Option<&ColliderAabb>,
    ) -> Result<Self, StageError> {
        let left = left_wall.ok_or(StageError::Missing(StageBoundary::LeftWall))?;
        let right = right_wall.ok_or(StageError::Missing(StageBoundary::RightWall))?;
        let floor = floor.ok_or(StageError::Missing(StageBoundary::Floor))?;

        Ok(Self::new(left.max.x, right.min.x, floor.max.y))
    }
}

/// Snapshot the current limits from the stage's boundary colliders.
pub fn resolve_boundary_limits(
    query: &Query<(&StageBoundary, &ColliderAabb)>,
) -> Result<BoundaryLimits, StageError> {
    let mut left = None;
    let mut right = None;
    let mut floor = None;

    for (boundary, aabb) in query {
        match boundary {
            StageBoundary::LeftWall => left = Some(aabb),
            StageBoundary::RightWall => right = Some(aabb),
            StageBoundary::Floor => floor = Some(aabb),
        }
    }

    BoundaryLimits::from_aabbs(left, right, floor)
}

/// Error type for stage lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageError {
    Missing(StageBoundary),
}

impl std::fmt::Display for StageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageError::Missing(boundary) => write!(
                f,
                "{} collider missing from the stage, check the stage setup",
                boundary.label()
            ),
        }
    }
}

impl std::error::Error for StageError {}
