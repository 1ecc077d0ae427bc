//! Room module - a small walkable test scene.

mod geometry;
mod plugin;

pub use geometry::{crate_layout, RoomGeometry, ROOM_SIZE};
pub use plugin::{setup_room, DemoRoomPlugin};
