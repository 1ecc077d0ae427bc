//! Named input axes sampled once per frame.
//!
//! Look and move code never touches raw devices; they read these four axes.

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use crate::config::ControllerConfig;

/// The axes the controller consumes, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAxis {
    MouseX,
    MouseY,
    Horizontal,
    Vertical,
}

impl InputAxis {
    pub fn name(self) -> &'static str {
        match self {
            InputAxis::MouseX => "Mouse X",
            InputAxis::MouseY => "Mouse Y",
            InputAxis::Horizontal => "Horizontal",
            InputAxis::Vertical => "Vertical",
        }
    }
}

/// Current value of every axis.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct InputAxes {
    /// Horizontal mouse delta this frame, positive to the right
    pub mouse_x: f32,
    /// Vertical mouse delta this frame, positive upward
    pub mouse_y: f32,
    /// Strafe axis in [-1, 1], positive to the right
    pub horizontal: f32,
    /// Forward/back axis in [-1, 1], positive forward
    pub vertical: f32,
}

impl InputAxes {
    pub fn get(&self, axis: InputAxis) -> f32 {
        match axis {
            InputAxis::MouseX => self.mouse_x,
            InputAxis::MouseY => self.mouse_y,
            InputAxis::Horizontal => self.horizontal,
            InputAxis::Vertical => self.vertical,
        }
    }
}

const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const LEFT_KEYS: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const FORWARD_KEYS: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];
const BACK_KEYS: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];

/// Digital axis from a pair of key groups. Opposing keys cancel out.
fn key_axis(keyboard: &ButtonInput<KeyCode>, positive: &[KeyCode], negative: &[KeyCode]) -> f32 {
    let mut value = 0.0;
    if keyboard.any_pressed(positive.iter().copied()) {
        value += 1.0;
    }
    if keyboard.any_pressed(negative.iter().copied()) {
        value -= 1.0;
    }
    value
}

/// Fold this frame's mouse motion and key state into [`InputAxes`].
pub fn sample_input_axes(
    mut mouse_motion: EventReader<MouseMotion>,
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<ControllerConfig>,
    mut axes: ResMut<InputAxes>,
) {
    let mut delta = Vec2::ZERO;
    for event in mouse_motion.read() {
        delta += event.delta;
    }

    // Screen-space y grows downward
    axes.mouse_x = delta.x * config.mouse_axis_scale;
    axes.mouse_y = -delta.y * config.mouse_axis_scale;
    axes.horizontal = key_axis(&keyboard, &RIGHT_KEYS, &LEFT_KEYS);
    axes.vertical = key_axis(&keyboard, &FORWARD_KEYS, &BACK_KEYS);
}
