//! Per-frame mouse look.

use bevy::prelude::*;

use super::components::*;
use crate::config::ControllerConfig;
use crate::input::{InputAxes, InputAxis};

/// Rotate each controller body by yaw and its camera by pitch.
///
/// The camera is a child of the body, so it inherits the yaw and only
/// carries pitch locally. Both rotations are rebuilt from [`LookAngles`]
/// every frame rather than accumulated on the transforms.
pub fn look_step(
    axes: Res<InputAxes>,
    config: Res<ControllerConfig>,
    mut controllers: Query<
        (&FirstPersonController, &ControllerRig, &mut LookAngles, &mut Transform),
        Without<ControllerCamera>,
    >,
    mut cameras: Query<&mut Transform, (With<ControllerCamera>, Without<FirstPersonController>)>,
) {
    let mouse_x = axes.get(InputAxis::MouseX);
    let mouse_y = axes.get(InputAxis::MouseY);

    for (controller, rig, mut angles, mut body_transform) in controllers.iter_mut() {
        angles.apply(
            mouse_x,
            mouse_y,
            controller.look_sensitivity,
            config.pitch_limit,
        );

        body_transform.rotation = angles.body_rotation();

        if let Ok(mut camera_transform) = cameras.get_mut(rig.camera) {
            camera_transform.rotation = angles.camera_rotation();
        }
    }
}
