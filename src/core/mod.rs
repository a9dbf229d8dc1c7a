//! Core domain: camera, fixed timestep and window clear color.

use bevy::prelude::*;

/// Rate of the fixed schedule the dash is stepped on
pub const FIXED_TICK_HZ: f64 = 60.0;

/// World units are meters; this many meters per screen pixel
const CAMERA_SCALE: f32 = 0.025;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_TICK_HZ))
            .insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.12)))
            .add_systems(Startup, setup_camera);
    }
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_scale(Vec3::splat(CAMERA_SCALE)),
    ));
}
