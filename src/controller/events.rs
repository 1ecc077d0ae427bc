//! Controller lifecycle events.

use bevy::prelude::*;

/// Sent once per controller when it binds its camera.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerAttached {
    /// The controller body
    pub controller: Entity,
    /// Camera now parented to the controller
    pub camera: Entity,
    /// True if no main camera existed and one was spawned for this controller
    pub camera_created: bool,
}
