//! Input module - named axes sampled from mouse and keyboard.

mod axes;
mod plugin;

pub use axes::{sample_input_axes, InputAxes, InputAxis};
pub use plugin::InputAxesPlugin;
