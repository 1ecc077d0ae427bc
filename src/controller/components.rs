//! Controller components.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::config::ControllerConfig;

/// First-person controller attached to a physics body.
///
/// Adding this component pulls in a kinematic rigid body, a capsule collider
/// and a character controller, so an entity can never carry a controller
/// without the physics it drives.
#[derive(Component, Debug, Clone)]
#[require(
    LookAngles,
    MovementState,
    Transform,
    Visibility,
    RigidBody(kinematic_body),
    Collider(default_capsule),
    KinematicCharacterController
)]
pub struct FirstPersonController {
    /// Movement speed in units per second
    pub move_speed: f32,
    /// Degrees of rotation per unit of mouse axis
    pub look_sensitivity: f32,
}

impl Default for FirstPersonController {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            look_sensitivity: 2.0,
        }
    }
}

impl FirstPersonController {
    pub fn from_config(config: &ControllerConfig) -> Self {
        Self {
            move_speed: config.move_speed,
            look_sensitivity: config.look_sensitivity,
        }
    }
}

fn kinematic_body() -> RigidBody {
    RigidBody::KinematicPositionBased
}

/// Capsule two units tall with a half-unit radius, centered on the origin.
fn default_capsule() -> Collider {
    Collider::capsule_y(0.5, 0.5)
}

/// Accumulated look angles in degrees.
///
/// Positive yaw turns right, positive pitch looks down.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct LookAngles {
    pub yaw: f32,
    pub pitch: f32,
}

impl LookAngles {
    /// Apply one frame of mouse axes. Pitch is clamped to `[-pitch_limit, pitch_limit]`.
    pub fn apply(&mut self, mouse_x: f32, mouse_y: f32, sensitivity: f32, pitch_limit: f32) {
        self.yaw += mouse_x * sensitivity;
        self.pitch -= mouse_y * sensitivity;
        self.pitch = self.pitch.clamp(-pitch_limit, pitch_limit);
    }

    /// Pure yaw rotation for the body.
    pub fn body_rotation(&self) -> Quat {
        Quat::from_rotation_y(-self.yaw.to_radians())
    }

    /// Pure pitch rotation for the camera, local to the body.
    pub fn camera_rotation(&self) -> Quat {
        Quat::from_rotation_x(-self.pitch.to_radians())
    }
}

/// Vertical motion carried between physics steps.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementState {
    /// Upward speed in units per second; negative while falling
    pub vertical_velocity: f32,
}

impl MovementState {
    /// Advance one step: reset on landing, otherwise accelerate downward.
    pub fn step(&mut self, grounded: bool, gravity: f32, dt: f32) {
        if grounded {
            if self.vertical_velocity < 0.0 {
                self.vertical_velocity = 0.0;
            }
        } else {
            self.vertical_velocity -= gravity * dt;
        }
    }
}

/// Links a controller to the camera it bound at attach time.
#[derive(Component, Debug, Clone, Copy)]
pub struct ControllerRig {
    pub camera: Entity,
}

/// Marks a camera as driven by a controller.
#[derive(Component, Debug, Clone, Copy)]
pub struct ControllerCamera {
    pub controller: Entity,
}

/// Marker for the primary camera.
#[derive(Component, Debug, Default)]
pub struct MainCamera;
