//! Controller module - first-person body, camera rig and the per-tick steps.

mod components;
mod cursor;
mod events;
mod look;
mod movement;
mod plugin;
mod setup;

pub use components::*;
pub use cursor::{restore_cursor, should_restore_cursor};
pub use events::ControllerAttached;
pub use look::look_step;
pub use movement::{move_step, step_displacement};
pub use plugin::ControllerPlugin;
pub use setup::{attach_controllers, spawn_controller};
