//! Abilities domain: the narrow world interface the dash engine runs against.
//!
//! The engine never touches the ECS directly. At runtime these traits are backed by
//! avian2d's spatial queries and fighter components (see `world.rs`); tests back them
//! with an in-memory arena.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

/// First blocking surface found by a ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallHit {
    pub point: Vec2,
}

/// Shape queries used by the per-step sweep.
pub trait SweepQuery<B> {
    /// First hit of a ray against colliders on `mask`, if within `max_distance`.
    fn raycast(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: GameLayer,
    ) -> Option<WallHit>;

    /// Bodies on `mask` touched by a disk of `radius` moved `max_distance` along `direction`.
    ///
    /// Results come in whatever stable order the backend produces.
    fn sweep_circle(
        &self,
        origin: Vec2,
        radius: f32,
        direction: Dir2,
        max_distance: f32,
        mask: GameLayer,
    ) -> Vec<B>;
}

/// Read and switch the rigid body mode of a body.
pub trait BodyModes<B> {
    fn body_mode(&self, body: B) -> Option<RigidBody>;

    /// Missing bodies are ignored.
    fn set_body_mode(&mut self, body: B, mode: RigidBody);
}

/// Body state and collaborators touched by a dash.
///
/// Getters return `None` when the body (or the component behind it) does not exist;
/// setters on missing bodies are no-ops.
pub trait DashHost<B>: SweepQuery<B> + BodyModes<B> {
    fn position(&self, body: B) -> Option<Vec2>;
    fn move_to(&mut self, body: B, position: Vec2);
    /// Zero linear and angular velocity.
    fn halt(&mut self, body: B);

    fn gravity_scale(&self, body: B) -> Option<f32>;
    fn set_gravity_scale(&mut self, body: B, scale: f32);
    fn collision_layers(&self, body: B) -> Option<CollisionLayers>;
    fn set_collision_layers(&mut self, body: B, layers: CollisionLayers);
    /// Whether the primary collider only reports overlaps.
    fn is_trigger(&self, body: B) -> Option<bool>;
    fn set_trigger(&mut self, body: B, trigger: bool);

    fn apply_damage(&mut self, source: B, target: B, amount: f32);
    fn apply_stun(&mut self, target: B, seconds: f32);
    /// Ask the visual-effect spawner for an after-image. Absent spawners ignore this.
    fn spawn_trail_marker(&mut self, mover: B, position: Vec2);
}
