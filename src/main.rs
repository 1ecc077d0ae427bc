//! First Person Controller - Demo Entry Point
//!
//! Walk around a small room full of crates.
//!
//! Controls:
//! - WASD / Arrow keys: Move
//! - Mouse: Look around

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "First Person Controller".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Physics, stepped alongside the controller's move step
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())

        // Controller
        .add_plugins(first_person_controller::FirstPersonPlugin)

        // Demo scene
        .add_plugins(first_person_controller::room::DemoRoomPlugin)

        .run();
}
