//! Movement domain: components and physics layers for fighters.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors, walls and obstacles
    Ground,
    /// Every fighter body, player or not
    Fighters,
    /// Bodies that must not touch anything (a fighter mid-dash)
    NoCollision,
}

impl GameLayer {
    /// Layers for a fighter body at rest.
    pub fn fighter_layers() -> CollisionLayers {
        CollisionLayers::new(
            GameLayer::Fighters,
            [GameLayer::Ground, GameLayer::Fighters],
        )
    }

    /// Layers for stage geometry.
    pub fn ground_layers() -> CollisionLayers {
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Fighters])
    }

    /// Layers for a body that is passing through the world untouched.
    pub fn no_collision_layers() -> CollisionLayers {
        CollisionLayers::new(GameLayer::NoCollision, LayerMask::NONE)
    }
}

/// Any character taking part in a fight
#[derive(Component, Debug, Clone)]
pub struct Fighter {
    pub name: String,
}

/// The locally controlled fighter. Only this one reads keyboard input.
#[derive(Component, Debug)]
pub struct Player;

/// Marker for stage geometry that counts as ground (floor, walls, obstacles)
#[derive(Component, Debug)]
pub struct Ground;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Unit travel direction on the horizontal axis.
    pub fn direction(self) -> Dir2 {
        match self {
            Facing::Right => Dir2::X,
            Facing::Left => Dir2::NEG_X,
        }
    }

    pub fn from_axis(x: f32) -> Option<Self> {
        if x > 0.1 {
            Some(Facing::Right)
        } else if x < -0.1 {
            Some(Facing::Left)
        } else {
            None
        }
    }
}
