//! Combat domain: fighter spawning helpers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::components::{Health, Stun};
use crate::movement::{Facing, Fighter, GameLayer};

/// Body size shared by every fighter, in world units
pub const FIGHTER_SIZE: Vec2 = Vec2::new(0.8, 1.6);

/// Bundle for spawning a fighter with a dynamic body
#[derive(Bundle)]
pub struct FighterBundle {
    pub fighter: Fighter,
    pub facing: Facing,
    pub health: Health,
    pub stun: Stun,
    pub sprite: Sprite,
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub collision_layers: CollisionLayers,
    pub collision_events: CollisionEventsEnabled,
    pub velocity: LinearVelocity,
    pub angular_velocity: AngularVelocity,
    pub gravity_scale: GravityScale,
    pub locked_axes: LockedAxes,
    pub ccd: SweptCcd,
}

impl FighterBundle {
    pub fn new(name: impl Into<String>, position: Vec2, max_health: f32, color: Color) -> Self {
        Self {
            fighter: Fighter { name: name.into() },
            facing: Facing::default(),
            health: Health::new(max_health),
            stun: Stun::default(),
            sprite: Sprite {
                color,
                custom_size: Some(FIGHTER_SIZE),
                ..default()
            },
            transform: Transform::from_xyz(position.x, position.y, 0.0),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::rectangle(FIGHTER_SIZE.x, FIGHTER_SIZE.y),
            collision_layers: GameLayer::fighter_layers(),
            collision_events: CollisionEventsEnabled,
            velocity: LinearVelocity::default(),
            angular_velocity: AngularVelocity::default(),
            gravity_scale: GravityScale(1.0),
            locked_axes: LockedAxes::ROTATION_LOCKED,
            // Fast dashes must not tunnel through thin geometry
            ccd: SweptCcd::default(),
        }
    }

    pub fn facing(mut self, facing: Facing) -> Self {
        self.facing = facing;
        self.sprite.flip_x = facing == Facing::Left;
        self
    }
}
