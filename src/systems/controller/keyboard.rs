use bevy::prelude::*;

use super::adapter::{InputAdapter, KeyState};
use crate::components::{CameraMode, ControlInputState, PlayerAircraft};

impl KeyState {
    /// Reads the flight keys: W/S pitch, A/D yaw, Q/E roll, R/F throttle, Space gear,
    /// C camera, Shift brakes.
    pub fn from_keyboard(keyboard: &ButtonInput<KeyCode>) -> Self {
        Self {
            pitch_up: keyboard.pressed(KeyCode::KeyW),
            pitch_down: keyboard.pressed(KeyCode::KeyS),
            yaw_left: keyboard.pressed(KeyCode::KeyA),
            yaw_right: keyboard.pressed(KeyCode::KeyD),
            roll_left: keyboard.pressed(KeyCode::KeyQ),
            roll_right: keyboard.pressed(KeyCode::KeyE),
            throttle_up: keyboard.pressed(KeyCode::KeyR),
            throttle_down: keyboard.pressed(KeyCode::KeyF),
            gear: keyboard.pressed(KeyCode::Space),
            camera: keyboard.pressed(KeyCode::KeyC),
            brake: keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]),
        }
    }
}

/// System for flying the player aircraft from the keyboard.
///
/// Writes a complete [`ControlInputState`] to the player aircraft every frame. A gear press is
/// kept until the dynamics consume it, so a frame without ticks does not lose it. Does nothing
/// when no keyboard input is available (headless runs).
pub fn keyboard_input_system(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    time: Res<Time>,
    mut adapter: ResMut<InputAdapter>,
    mut camera: ResMut<CameraMode>,
    mut query: Query<&mut ControlInputState, With<PlayerAircraft>>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };

    let frame = adapter.update(&KeyState::from_keyboard(&keyboard), time.delta_secs_f64());

    if frame.camera_cycle {
        camera.cycle();
        debug!("Camera mode: {:?}", *camera);
    }

    if let Ok(mut controls) = query.get_single_mut() {
        let gear_toggle = controls.gear_toggle || frame.controls.gear_toggle;
        *controls = ControlInputState {
            gear_toggle,
            ..frame.controls
        };
    }
}
