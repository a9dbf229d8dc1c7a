//! Stage domain: boundary markers.

use bevy::prelude::*;

/// Identifies one of the three colliders that bound the fighting stage
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageBoundary {
    LeftWall,
    RightWall,
    Floor,
}

impl StageBoundary {
    pub fn label(self) -> &'static str {
        match self {
            StageBoundary::LeftWall => "LeftWall",
            StageBoundary::RightWall => "RightWall",
            StageBoundary::Floor => "Floor",
        }
    }
}
