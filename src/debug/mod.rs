//! Dev tools for iterating on the dash in a training room.
//!
//! Features:
//! - Seeded training dummies spread across the stage
//! - Sweep gizmos for the dash in flight (toggle with F1)

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::abilities::ActiveDash;
use crate::combat::FighterBundle;
use crate::movement::{Facing, Player};
use crate::stage::StageConfig;

const DUMMY_MAX_HEALTH: f32 = 50.0;
/// Dummies keep this far from the walls and from the player's spawn
const DUMMY_MARGIN: f32 = 1.5;

/// Resource tracking dev tool state
#[derive(Resource, Debug)]
pub struct DebugState {
    pub show_gizmos: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self { show_gizmos: true }
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_training_dummies)
            .add_systems(Update, (toggle_gizmos, draw_dash_gizmos).chain());
    }
}

/// X positions for the configured dummies, between the player's spawn and the right wall
/// (or the pillar, when one stands in between).
pub fn dummy_positions(config: &StageConfig) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.dummy_seed);
    let min_x = config.player_spawn_x + DUMMY_MARGIN;
    let mut max_x = config.half_width() - DUMMY_MARGIN;
    // Keep dummies on the spawn side of the pillar
    if let Some(obstacle_x) = config.obstacle_x.filter(|x| *x > config.player_spawn_x) {
        max_x = max_x.min(obstacle_x - DUMMY_MARGIN);
    }
    if min_x >= max_x {
        return Vec::new();
    }

    let mut positions: Vec<f32> = (0..config.dummy_count)
        .map(|_| rng.random_range(min_x..max_x))
        .collect();
    positions.sort_by(|a, b| a.total_cmp(b));
    positions
}

fn spawn_training_dummies(mut commands: Commands, config: Res<StageConfig>) {
    let positions = dummy_positions(&config);

    for (index, x) in positions.iter().enumerate() {
        commands.spawn((
            FighterBundle::new(
                format!("Dummy {}", index + 1),
                Vec2::new(*x, config.floor_top + 1.0),
                DUMMY_MAX_HEALTH,
                Color::srgb(0.8, 0.35, 0.3),
            )
            .facing(Facing::Left),
            Name::new(format!("Dummy {}", index + 1)),
        ));
    }

    info!(
        "Spawned {} training dummies (seed {})",
        positions.len(),
        config.dummy_seed
    );
}

fn toggle_gizmos(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F1) {
        state.show_gizmos = !state.show_gizmos;
        info!("Dash gizmos: {}", state.show_gizmos);
    }
}

/// Draw the path and the next step's latch sweep of every dash in flight.
fn draw_dash_gizmos(
    state: Res<DebugState>,
    fixed_time: Res<Time<Fixed>>,
    dashes: Query<(&ActiveDash, &Transform), With<Player>>,
    mut gizmos: Gizmos,
) {
    if !state.show_gizmos {
        return;
    }

    let dt = fixed_time.timestep().as_secs_f32();
    for (ActiveDash(session), transform) in &dashes {
        if session.is_spent() {
            continue;
        }
        let origin = transform.translation.truncate();
        let sweep_end = origin + *session.direction() * session.sweep_length(dt);

        gizmos.line_2d(session.start(), session.end_point(), Color::srgb(0.4, 0.4, 0.4));
        gizmos.line_2d(origin, sweep_end, Color::srgb(1.0, 0.9, 0.2));
        gizmos.circle_2d(origin, session.latch_radius(), Color::srgb(1.0, 0.9, 0.2));
        gizmos.circle_2d(sweep_end, session.latch_radius(), Color::srgb(1.0, 0.5, 0.1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dummy_positions_are_deterministic_per_seed() {
        let config = StageConfig::default();

        assert_eq!(dummy_positions(&config), dummy_positions(&config));

        let other = StageConfig {
            dummy_seed: config.dummy_seed + 1,
            ..config.clone()
        };
        assert_ne!(dummy_positions(&config), dummy_positions(&other));
    }

    #[test]
    fn test_dummy_positions_stay_between_spawn_and_wall() {
        let config = StageConfig {
            dummy_count: 16,
            ..default()
        };

        let positions = dummy_positions(&config);

        assert_eq!(positions.len(), 16);
        for x in positions {
            assert!(x >= config.player_spawn_x + DUMMY_MARGIN);
            assert!(x < config.half_width() - DUMMY_MARGIN);
        }
    }

    #[test]
    fn test_no_dummies_when_stage_too_narrow() {
        let config = StageConfig {
            width: 2.0,
            player_spawn_x: 0.0,
            ..default()
        };

        assert!(dummy_positions(&config).is_empty());
    }
}
