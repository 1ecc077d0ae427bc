//! Input plugin - samples named axes before gameplay systems run.

use bevy::prelude::*;

use super::axes::{sample_input_axes, InputAxes};

/// Samples [`InputAxes`] every frame in `PreUpdate`, after Bevy's own input handling.
pub struct InputAxesPlugin;

impl Plugin for InputAxesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputAxes>().add_systems(
            PreUpdate,
            sample_input_axes.after(bevy::input::InputSystem),
        );
    }
}
