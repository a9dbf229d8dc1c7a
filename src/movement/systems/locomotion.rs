//! Movement domain: facing and walking for the local fighter.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::abilities::AbilityState;
use crate::combat::Stun;
use crate::movement::{Facing, MovementInput, Player};

/// Horizontal walking speed in world units per second
const WALK_SPEED: f32 = 4.0;

pub(crate) fn update_facing(
    input: Res<MovementInput>,
    mut query: Query<(&mut Facing, Option<&AbilityState>), With<Player>>,
) {
    for (mut facing, ability) in &mut query {
        // Direction is locked for the whole dash
        if ability.is_some_and(|a| a.is_dashing || a.is_performing_ability) {
            continue;
        }

        if let Some(next) = Facing::from_axis(input.axis.x) {
            if *facing != next {
                *facing = next;
            }
        }
    }
}

pub(crate) fn apply_walk(
    input: Res<MovementInput>,
    mut query: Query<
        (&mut LinearVelocity, Option<&AbilityState>, Option<&Stun>),
        With<Player>,
    >,
) {
    for (mut velocity, ability, stun) in &mut query {
        if ability.is_some_and(|a| a.is_performing_ability) {
            continue;
        }
        if stun.is_some_and(Stun::is_stunned) {
            velocity.x = 0.0;
            continue;
        }

        velocity.x = input.axis.x * WALK_SPEED;
    }
}

/// Mirror sprites to match facing
pub(crate) fn sync_facing_sprites(mut query: Query<(&Facing, &mut Sprite), Changed<Facing>>) {
    for (facing, mut sprite) in &mut query {
        sprite.flip_x = *facing == Facing::Left;
    }
}
