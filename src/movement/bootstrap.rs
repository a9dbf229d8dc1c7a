//! Movement domain: player bootstrap.

use bevy::prelude::*;

use crate::abilities::{AbilityState, DashPierce};
use crate::combat::FighterBundle;
use crate::effects::GhostSpawner;
use crate::movement::{Facing, Player};
use crate::stage::StageConfig;

const PLAYER_MAX_HEALTH: f32 = 100.0;

/// Spawn the locally controlled samurai standing on the stage floor.
pub(crate) fn spawn_player(
    mut commands: Commands,
    config: Res<StageConfig>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let position = Vec2::new(config.player_spawn_x, config.floor_top + 1.0);
    let entity = commands
        .spawn((
            FighterBundle::new(
                "Samurai",
                position,
                PLAYER_MAX_HEALTH,
                Color::srgb(0.85, 0.85, 0.95),
            )
            .facing(Facing::Right),
            Player,
            DashPierce,
            AbilityState::default(),
            GhostSpawner::default(),
            Name::new("Player"),
        ))
        .id();

    info!("Spawned player {:?} at {:?}", entity, position);
}
