//! Controller spawning and first-activation setup.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_rapier3d::prelude::*;

use super::components::*;
use super::cursor::lock_cursor;
use super::events::ControllerAttached;
use crate::config::ControllerConfig;

/// Bind every controller that has not been set up yet.
///
/// Freezes physics rotation on the body, claims the main camera (spawning one
/// if there is none), parents it at eye height and locks the cursor.
pub fn attach_controllers(
    mut commands: Commands,
    config: Res<ControllerConfig>,
    controllers: Query<(Entity, &LookAngles), (With<FirstPersonController>, Without<ControllerRig>)>,
    main_cameras: Query<Entity, (With<Camera>, With<MainCamera>, Without<ControllerCamera>)>,
    mut attached: EventWriter<ControllerAttached>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if controllers.is_empty() {
        return;
    }

    let mut free_cameras = main_cameras.iter();

    for (controller, angles) in controllers.iter() {
        commands.entity(controller).insert(LockedAxes::ROTATION_LOCKED);

        let (camera, camera_created) = match free_cameras.next() {
            Some(camera) => (camera, false),
            None => {
                let camera = commands
                    .spawn((Name::new("Main Camera"), Camera3d::default(), MainCamera))
                    .id();
                debug!("No main camera found, spawned {:?}", camera);
                (camera, true)
            }
        };

        commands.entity(camera).insert((
            Transform::from_xyz(0.0, config.eye_height, 0.0).with_rotation(angles.camera_rotation()),
            ControllerCamera { controller },
        ));
        commands
            .entity(controller)
            .insert(ControllerRig { camera })
            .add_child(camera);

        attached.send(ControllerAttached {
            controller,
            camera,
            camera_created,
        });
        info!("First-person controller {:?} attached to camera {:?}", controller, camera);
    }

    lock_cursor(&mut windows);
}

/// Spawn a controller body at `position` tuned from `config`.
pub fn spawn_controller(commands: &mut Commands, position: Vec3, config: &ControllerConfig) -> Entity {
    commands
        .spawn((
            Name::new("Player"),
            FirstPersonController::from_config(config),
            Transform::from_translation(position),
            KinematicCharacterController {
                offset: CharacterLength::Absolute(0.01),
                autostep: Some(CharacterAutostep {
                    max_height: CharacterLength::Absolute(0.4),
                    min_width: CharacterLength::Absolute(0.3),
                    include_dynamic_bodies: false,
                }),
                max_slope_climb_angle: 45_f32.to_radians(),
                min_slope_slide_angle: 30_f32.to_radians(),
                snap_to_ground: Some(CharacterLength::Absolute(0.5)),
                ..default()
            },
        ))
        .id()
}
