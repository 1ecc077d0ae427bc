//! Controller plugin - setup, look and movement systems.

use bevy::prelude::*;

use super::cursor::restore_cursor;
use super::events::ControllerAttached;
use super::look::look_step;
use super::movement::move_step;
use super::setup::attach_controllers;

/// Controller plugin - binds cameras and drives look and movement.
pub struct ControllerPlugin;

impl Plugin for ControllerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ControllerAttached>()
            .add_systems(Update, (attach_controllers, look_step, restore_cursor).chain())
            .add_systems(FixedUpdate, move_step);
    }
}
