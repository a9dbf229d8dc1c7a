//! Abilities domain: the ECS-backed world the dash engine runs against.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::abilities::host::{BodyModes, DashHost, SweepQuery, WallHit};
use crate::combat::{DamageEvent, StunEvent};
use crate::effects::{GhostSpawner, spawn_ghost};
use crate::movement::{Facing, Fighter, GameLayer};

/// Upper bound on opponents reported by one step's circle sweep
const MAX_SWEEP_HITS: u32 = 16;

type FighterBody = (
    &'static mut Transform,
    &'static mut LinearVelocity,
    &'static mut AngularVelocity,
    &'static mut GravityScale,
    &'static mut CollisionLayers,
    &'static RigidBody,
    Has<Sensor>,
);

/// Spatial queries, fighter bodies and effect writers, bundled for the dash engine
#[derive(SystemParam)]
pub struct DashWorld<'w, 's> {
    pub(crate) spatial: SpatialQuery<'w, 's>,
    pub(crate) bodies: Query<'w, 's, FighterBody, With<Fighter>>,
    pub(crate) spawners: Query<'w, 's, (&'static GhostSpawner, &'static Facing)>,
    pub(crate) commands: Commands<'w, 's>,
    pub(crate) damage: MessageWriter<'w, DamageEvent>,
    pub(crate) stun: MessageWriter<'w, StunEvent>,
}

impl SweepQuery<Entity> for DashWorld<'_, '_> {
    fn raycast(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: GameLayer,
    ) -> Option<WallHit> {
        let filter = SpatialQueryFilter::from_mask(mask);
        self.spatial
            .cast_ray(origin, direction, max_distance, true, &filter)
            .map(|hit| WallHit {
                point: origin + *direction * hit.distance,
            })
    }

    fn sweep_circle(
        &self,
        origin: Vec2,
        radius: f32,
        direction: Dir2,
        max_distance: f32,
        mask: GameLayer,
    ) -> Vec<Entity> {
        let filter = SpatialQueryFilter::from_mask(mask);
        let shape = Collider::circle(radius);
        let config = ShapeCastConfig::from_max_distance(max_distance);

        self.spatial
            .shape_hits(
                &shape,
                origin,
                0.0,
                direction,
                MAX_SWEEP_HITS,
                &config,
                &filter,
            )
            .into_iter()
            .map(|hit| hit.entity)
            .collect()
    }
}

impl BodyModes<Entity> for DashWorld<'_, '_> {
    fn body_mode(&self, body: Entity) -> Option<RigidBody> {
        self.bodies.get(body).ok().map(|item| *item.5)
    }

    fn set_body_mode(&mut self, body: Entity, mode: RigidBody) {
        // `RigidBody` is an immutable component in avian2d; replace it via re-insertion
        if self.bodies.contains(body) {
            self.commands.entity(body).insert(mode);
        }
    }
}

impl DashHost<Entity> for DashWorld<'_, '_> {
    fn position(&self, body: Entity) -> Option<Vec2> {
        self.bodies
            .get(body)
            .ok()
            .map(|item| item.0.translation.truncate())
    }

    fn move_to(&mut self, body: Entity, position: Vec2) {
        if let Ok((mut transform, ..)) = self.bodies.get_mut(body) {
            transform.translation.x = position.x;
            transform.translation.y = position.y;
        }
    }

    fn halt(&mut self, body: Entity) {
        if let Ok((_, mut linear, mut angular, ..)) = self.bodies.get_mut(body) {
            linear.0 = Vec2::ZERO;
            angular.0 = 0.0;
        }
    }

    fn gravity_scale(&self, body: Entity) -> Option<f32> {
        self.bodies.get(body).ok().map(|item| item.3.0)
    }

    fn set_gravity_scale(&mut self, body: Entity, scale: f32) {
        if let Ok((_, _, _, mut gravity, ..)) = self.bodies.get_mut(body) {
            gravity.0 = scale;
        }
    }

    fn collision_layers(&self, body: Entity) -> Option<CollisionLayers> {
        self.bodies.get(body).ok().map(|item| *item.4)
    }

    fn set_collision_layers(&mut self, body: Entity, layers: CollisionLayers) {
        if let Ok((_, _, _, _, mut current, ..)) = self.bodies.get_mut(body) {
            *current = layers;
        }
    }

    fn is_trigger(&self, body: Entity) -> Option<bool> {
        self.bodies.get(body).ok().map(|item| item.6)
    }

    fn set_trigger(&mut self, body: Entity, trigger: bool) {
        let Ok(mut entity) = self.commands.get_entity(body) else {
            return;
        };

        if trigger {
            entity.insert(Sensor);
        } else {
            entity.remove::<Sensor>();
        }
    }

    fn apply_damage(&mut self, source: Entity, target: Entity, amount: f32) {
        self.damage.write(DamageEvent {
            source,
            target,
            amount,
        });
    }

    fn apply_stun(&mut self, target: Entity, seconds: f32) {
        self.stun.write(StunEvent {
            target,
            duration: seconds,
        });
    }

    fn spawn_trail_marker(&mut self, mover: Entity, position: Vec2) {
        let Ok((spawner, facing)) = self.spawners.get(mover) else {
            return;
        };
        spawn_ghost(&mut self.commands, spawner, position, *facing);
    }
}
