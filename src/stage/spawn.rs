//! Stage domain: floor, walls and obstacles of the training stage.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground};
use crate::stage::components::StageBoundary;
use crate::stage::resources::StageConfig;

const OBSTACLE_SIZE: Vec2 = Vec2::new(0.6, 2.5);

pub(crate) fn spawn_stage(mut commands: Commands, config: Res<StageConfig>) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let floor_color = Color::srgb(0.4, 0.5, 0.4);
    let obstacle_color = Color::srgb(0.5, 0.4, 0.3);

    let half_width = config.half_width();
    let thickness = config.wall_thickness;
    let floor_width = config.width + thickness * 2.0;
    let wall_center_y = config.floor_top + config.wall_height * 0.5;

    // Floor
    spawn_block(
        &mut commands,
        Some(StageBoundary::Floor),
        Vec2::new(0.0, config.floor_top - thickness * 0.5),
        Vec2::new(floor_width, thickness),
        floor_color,
    );

    // Left wall
    spawn_block(
        &mut commands,
        Some(StageBoundary::LeftWall),
        Vec2::new(-half_width - thickness * 0.5, wall_center_y),
        Vec2::new(thickness, config.wall_height),
        wall_color,
    );

    // Right wall
    spawn_block(
        &mut commands,
        Some(StageBoundary::RightWall),
        Vec2::new(half_width + thickness * 0.5, wall_center_y),
        Vec2::new(thickness, config.wall_height),
        wall_color,
    );

    if let Some(x) = config.obstacle_x {
        spawn_block(
            &mut commands,
            None,
            Vec2::new(x, config.floor_top + OBSTACLE_SIZE.y * 0.5),
            OBSTACLE_SIZE,
            obstacle_color,
        );
    }

    info!(
        "Stage ready: width={}, floor_top={}, obstacle={:?}",
        config.width, config.floor_top, config.obstacle_x
    );
}

fn spawn_block(
    commands: &mut Commands,
    boundary: Option<StageBoundary>,
    center: Vec2,
    size: Vec2,
    color: Color,
) {
    let mut block = commands.spawn((
        Ground,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        GameLayer::ground_layers(),
    ));

    if let Some(boundary) = boundary {
        block.insert((boundary, Name::new(boundary.label())));
    }
}
