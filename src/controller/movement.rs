//! Fixed-step kinematic movement.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::{FirstPersonController, MovementState};
use crate::config::ControllerConfig;
use crate::input::{InputAxes, InputAxis};

/// Horizontal displacement for one physics step.
///
/// `strafe` and `forward` are axis values in [-1, 1]. The direction is taken
/// from the body's own right and forward axes and is not normalized, so
/// diagonal input moves faster than a single axis.
pub fn step_displacement(
    body_rotation: Quat,
    strafe: f32,
    forward: f32,
    move_speed: f32,
    dt: f32,
) -> Vec3 {
    let right = body_rotation * Vec3::X;
    let ahead = body_rotation * Vec3::NEG_Z;
    (right * strafe + ahead * forward) * move_speed * dt
}

/// Request a kinematic move for each controller.
///
/// The horizontal part comes from the move axes; the vertical part is the
/// controller's fall speed. Rapier resolves the request against colliders
/// during its own fixed step and reports back whether the body is grounded.
pub fn move_step(
    axes: Res<InputAxes>,
    time: Res<Time<Fixed>>,
    config: Res<ControllerConfig>,
    mut controllers: Query<(
        &FirstPersonController,
        &Transform,
        &mut MovementState,
        &mut KinematicCharacterController,
        Option<&KinematicCharacterControllerOutput>,
    )>,
) {
    let dt = time.timestep().as_secs_f32();
    let strafe = axes.get(InputAxis::Horizontal);
    let forward = axes.get(InputAxis::Vertical);

    for (controller, transform, mut movement, mut character, output) in controllers.iter_mut() {
        // No output yet means Rapier hasn't moved the body, so treat it as airborne
        let grounded = output.is_some_and(|output| output.grounded);
        movement.step(grounded, config.gravity, dt);

        let horizontal = step_displacement(transform.rotation, strafe, forward, controller.move_speed, dt);
        let displacement = horizontal + Vec3::Y * movement.vertical_velocity * dt;

        character.translation = if displacement == Vec3::ZERO {
            None
        } else {
            Some(displacement)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    use crate::controller::LookAngles;

    fn app_with_input(horizontal: f32, vertical: f32) -> App {
        let mut app = App::new();
        app.insert_resource(InputAxes {
            horizontal,
            vertical,
            ..default()
        })
        .insert_resource(ControllerConfig::default())
        .insert_resource(Time::<Fixed>::from_seconds(0.02));
        app
    }

    fn grounded() -> KinematicCharacterControllerOutput {
        KinematicCharacterControllerOutput {
            grounded: true,
            ..default()
        }
    }

    #[test]
    fn zero_input_is_zero_displacement() {
        let rotation = LookAngles { yaw: 123.0, pitch: 0.0 }.body_rotation();
        assert_eq!(step_displacement(rotation, 0.0, 0.0, 5.0, 0.02), Vec3::ZERO);
    }

    #[test]
    fn forward_step_covers_speed_times_dt() {
        let displacement = step_displacement(Quat::IDENTITY, 0.0, 1.0, 5.0, 0.02);
        assert!(displacement.abs_diff_eq(Vec3::new(0.0, 0.0, -0.1), 1e-6));
        assert!((displacement.length() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn forward_follows_body_yaw() {
        let rotation = LookAngles { yaw: 90.0, pitch: 0.0 }.body_rotation();
        let displacement = step_displacement(rotation, 0.0, 1.0, 5.0, 0.02);
        assert!(displacement.abs_diff_eq(Vec3::new(0.1, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn strafe_uses_body_right() {
        let displacement = step_displacement(Quat::IDENTITY, -1.0, 0.0, 5.0, 0.02);
        assert!(displacement.abs_diff_eq(Vec3::new(-0.1, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn diagonal_is_not_normalized() {
        let displacement = step_displacement(Quat::IDENTITY, 1.0, 1.0, 5.0, 0.02);
        assert!((displacement.length() - 0.1 * 2_f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn falling_speed_resets_on_landing() {
        let mut movement = MovementState::default();
        movement.step(false, 10.0, 0.02);
        movement.step(false, 10.0, 0.02);
        assert!((movement.vertical_velocity + 0.4).abs() < 1e-6);

        movement.step(true, 10.0, 0.02);
        assert_eq!(movement.vertical_velocity, 0.0);
    }

    #[test]
    fn grounded_forward_step_is_purely_horizontal() {
        let mut app = app_with_input(0.0, 1.0);
        let controller = app
            .world_mut()
            .spawn((
                FirstPersonController::default(),
                Transform::from_xyz(2.0, 1.0, 2.0),
                grounded(),
            ))
            .id();

        app.world_mut().run_system_once(move_step).unwrap();

        let character = app.world().get::<KinematicCharacterController>(controller).unwrap();
        let translation = character.translation.unwrap();
        assert!(translation.abs_diff_eq(Vec3::new(0.0, 0.0, -0.1), 1e-6));
    }

    #[test]
    fn grounded_idle_steps_request_nothing() {
        let mut app = app_with_input(0.0, 0.0);
        let controller = app
            .world_mut()
            .spawn((
                FirstPersonController::default(),
                Transform::from_xyz(2.0, 1.0, 2.0),
                grounded(),
            ))
            .id();

        for _ in 0..10 {
            app.world_mut().run_system_once(move_step).unwrap();
            let character = app.world().get::<KinematicCharacterController>(controller).unwrap();
            assert_eq!(character.translation, None);
        }
        assert_eq!(
            app.world().get::<Transform>(controller).unwrap().translation,
            Vec3::new(2.0, 1.0, 2.0)
        );
    }

    #[test]
    fn airborne_controller_falls() {
        let mut app = app_with_input(0.0, 0.0);
        let controller = app
            .world_mut()
            .spawn((FirstPersonController::default(), Transform::from_xyz(0.0, 5.0, 0.0)))
            .id();

        app.world_mut().run_system_once(move_step).unwrap();
        let first = app
            .world()
            .get::<KinematicCharacterController>(controller)
            .unwrap()
            .translation
            .unwrap();

        app.world_mut().run_system_once(move_step).unwrap();
        let second = app
            .world()
            .get::<KinematicCharacterController>(controller)
            .unwrap()
            .translation
            .unwrap();

        assert_eq!(first.x, 0.0);
        assert_eq!(first.z, 0.0);
        assert!(first.y < 0.0);
        assert!(second.y < first.y, "fall should accelerate");
        assert!((second.y + 9.81 * 0.02 * 2.0 * 0.02).abs() < 1e-6);
    }

    #[test]
    fn airborne_forward_step_keeps_horizontal_part() {
        let mut app = app_with_input(0.0, 1.0);
        let controller = app
            .world_mut()
            .spawn(FirstPersonController::default())
            .id();

        app.world_mut().run_system_once(move_step).unwrap();

        let translation = app
            .world()
            .get::<KinematicCharacterController>(controller)
            .unwrap()
            .translation
            .unwrap();
        assert!(Vec2::new(translation.x, translation.z).abs_diff_eq(Vec2::new(0.0, -0.1), 1e-6));
        assert!(translation.y < 0.0);
    }

    #[test]
    fn zero_gravity_hovers() {
        let mut app = app_with_input(0.0, 0.0);
        app.insert_resource(ControllerConfig {
            gravity: 0.0,
            ..default()
        });
        let controller = app
            .world_mut()
            .spawn(FirstPersonController::default())
            .id();

        app.world_mut().run_system_once(move_step).unwrap();

        let character = app.world().get::<KinematicCharacterController>(controller).unwrap();
        assert_eq!(character.translation, None);
    }

    #[test]
    fn per_controller_speed_is_respected() {
        let mut app = app_with_input(1.0, 0.0);
        let controller = app
            .world_mut()
            .spawn((
                FirstPersonController {
                    move_speed: 10.0,
                    ..default()
                },
                grounded(),
            ))
            .id();

        app.world_mut().run_system_once(move_step).unwrap();

        let character = app.world().get::<KinematicCharacterController>(controller).unwrap();
        assert!(character.translation.unwrap().abs_diff_eq(Vec3::new(0.2, 0.0, 0.0), 1e-6));
    }
}
