//! Pointer lock for relative mouse look.

use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};

use super::components::FirstPersonController;
use crate::config::ControllerConfig;

/// Lock and hide the cursor on the primary window.
pub(super) fn lock_cursor(windows: &mut Query<&mut Window, With<PrimaryWindow>>) {
    let Ok(mut window) = windows.get_single_mut() else {
        debug!("No primary window; skipping cursor lock");
        return;
    };
    window.cursor_options.grab_mode = CursorGrabMode::Locked;
    window.cursor_options.visible = false;
    debug!("Cursor locked");
}

fn release_cursor(windows: &mut Query<&mut Window, With<PrimaryWindow>>) {
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };
    window.cursor_options.grab_mode = CursorGrabMode::None;
    window.cursor_options.visible = true;
    debug!("Cursor released");
}

/// Whether the cursor should be handed back after controllers were removed.
pub fn should_restore_cursor(removed_any: bool, remaining: usize, enabled: bool) -> bool {
    enabled && removed_any && remaining == 0
}

/// Give the cursor back once the last controller is gone.
pub fn restore_cursor(
    mut removed: RemovedComponents<FirstPersonController>,
    remaining: Query<(), With<FirstPersonController>>,
    config: Res<ControllerConfig>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let removed_any = removed.read().count() > 0;
    if should_restore_cursor(removed_any, remaining.iter().count(), config.restore_cursor_on_removal) {
        release_cursor(&mut windows);
    }
}
