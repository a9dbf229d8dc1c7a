//! Effects domain: fading after-images left behind by fast movement.

use bevy::color::Alpha;
use bevy::prelude::*;

use crate::movement::Facing;

/// Optional on a fighter: lets abilities leave after-images of it
#[derive(Component, Debug, Clone)]
pub struct GhostSpawner {
    pub color: Color,
    pub size: Vec2,
    /// Seconds an after-image takes to fade out
    pub lifetime: f32,
}

impl Default for GhostSpawner {
    fn default() -> Self {
        Self {
            color: Color::srgba(0.6, 0.8, 1.0, 0.6),
            size: Vec2::new(0.8, 1.6),
            lifetime: 0.25,
        }
    }
}

/// A single after-image fading out
#[derive(Component, Debug)]
pub struct GhostTrail {
    pub remaining: f32,
    pub lifetime: f32,
    pub base_alpha: f32,
}

impl GhostTrail {
    /// Alpha for the current point of the fade, linear down to zero.
    pub fn alpha(&self) -> f32 {
        if self.lifetime <= 0.0 {
            return 0.0;
        }
        self.base_alpha * (self.remaining / self.lifetime).clamp(0.0, 1.0)
    }
}

pub fn spawn_ghost(
    commands: &mut Commands,
    spawner: &GhostSpawner,
    position: Vec2,
    facing: Facing,
) {
    commands.spawn((
        GhostTrail {
            remaining: spawner.lifetime,
            lifetime: spawner.lifetime,
            base_alpha: spawner.color.alpha(),
        },
        Sprite {
            color: spawner.color,
            custom_size: Some(spawner.size),
            flip_x: facing == Facing::Left,
            ..default()
        },
        // Behind the fighters
        Transform::from_xyz(position.x, position.y, -0.5),
    ));
}

pub(crate) fn fade_ghost_trails(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut GhostTrail, &mut Sprite)>,
) {
    let dt = time.delta_secs();
    for (entity, mut ghost, mut sprite) in &mut query {
        ghost.remaining -= dt;
        if ghost.remaining <= 0.0 {
            commands.entity(entity).despawn();
            continue;
        }
        let alpha = ghost.alpha();
        sprite.color.set_alpha(alpha);
    }
}
