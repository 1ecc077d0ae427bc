//! Demo room plugin - a walled floor with crates and one controller.

use bevy::prelude::*;

use super::geometry::{spawn_crates, spawn_floor, spawn_walls};
use crate::config::ControllerConfig;
use crate::controller::spawn_controller;

/// Controller spawn height: capsule center sits one unit above the floor.
const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Demo room plugin - builds the room on startup.
pub struct DemoRoomPlugin;

impl Plugin for DemoRoomPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_room);
    }
}

/// Build the room and drop a controller in the middle.
///
/// No camera is spawned here; the controller creates its own on attach.
pub fn setup_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<ControllerConfig>,
) {
    let floor = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.37, 0.4),
        perceptual_roughness: 0.9,
        ..default()
    });
    let wall = materials.add(StandardMaterial {
        base_color: Color::srgb(0.6, 0.58, 0.55),
        ..default()
    });
    let crate_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.55, 0.38, 0.2),
        ..default()
    });

    spawn_floor(&mut commands, &mut meshes, floor);
    spawn_walls(&mut commands, &mut meshes, wall);
    spawn_crates(&mut commands, &mut meshes, crate_material);

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
    });
    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(6.0, 12.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let player = spawn_controller(&mut commands, SPAWN_POSITION, &config);
    info!("Demo room built, controller {:?} at {}", player, SPAWN_POSITION);
}
