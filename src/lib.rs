//! First Person Controller - mouse look and kinematic walking for Bevy + Rapier.
//!
//! Attach [`controller::FirstPersonController`] to an entity and it becomes a
//! walkable body: a kinematic capsule with a camera parented at eye height.
//!
//! # Architecture
//!
//! - **Config**: tuning values loaded from `assets/config/controller.ron`
//! - **Input**: mouse and keyboard folded into four named axes each frame
//! - **Controller**: camera binding on attach, per-frame look, fixed-step movement
//! - **Room**: a small demo scene used by the binary

pub mod config;
pub mod controller;
pub mod input;
pub mod room;

use bevy::prelude::*;

use config::ControllerConfig;

/// Main plugin that adds config, input and controller systems.
///
/// Physics is not added here; the host app adds Rapier in the fixed schedule.
pub struct FirstPersonPlugin;

impl Plugin for FirstPersonPlugin {
    fn build(&self, app: &mut App) {
        let config = ControllerConfig::load();

        app
            // Movement runs on this tick, so it has to be known before startup
            .insert_resource(Time::<Fixed>::from_hz(config.fixed_timestep_hz))
            .insert_resource(config)

            // Axis sampling
            .add_plugins(input::InputAxesPlugin)

            // Setup, look and movement
            .add_plugins(controller::ControllerPlugin);
    }
}
