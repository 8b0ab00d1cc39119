use bevy::prelude::*;

use crate::{components::ControlInputState, resources::InputConfig};

/// Axis values closer to neutral than this snap to zero once released.
const AXIS_DEADZONE: f64 = 1e-3;

/// Keys held down during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub roll_left: bool,
    pub roll_right: bool,
    pub throttle_up: bool,
    pub throttle_down: bool,
    pub gear: bool,
    pub camera: bool,
    pub brake: bool,
}

/// What the input layer hands over for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    pub controls: ControlInputState,
    pub camera_cycle: bool,
}

/// Turns held keys into smooth control axes.
///
/// Attitude axes ramp toward full deflection while their key is held and decay back to neutral
/// when released. Throttle is a direct request. Gear and camera report only the frame their key
/// goes down.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputAdapter {
    config: InputConfig,
    pitch: f64,
    yaw: f64,
    roll: f64,
    gear_held: bool,
    camera_held: bool,
}

impl InputAdapter {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn update(&mut self, keys: &KeyState, dt: f64) -> InputFrame {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.pitch = self.ramp(self.pitch, axis(keys.pitch_up, keys.pitch_down), dt);
        self.yaw = self.ramp(self.yaw, axis(keys.yaw_right, keys.yaw_left), dt);
        self.roll = self.ramp(self.roll, axis(keys.roll_right, keys.roll_left), dt);

        let gear_toggle = keys.gear && !self.gear_held;
        let camera_cycle = keys.camera && !self.camera_held;
        self.gear_held = keys.gear;
        self.camera_held = keys.camera;

        InputFrame {
            controls: ControlInputState {
                pitch: self.pitch,
                yaw: self.yaw,
                roll: self.roll,
                throttle_delta: axis(keys.throttle_up, keys.throttle_down),
                gear_toggle,
                brake: keys.brake,
            },
            camera_cycle,
        }
    }

    /// Drops held axes back to neutral, e.g. after the aircraft is replaced.
    pub fn reset(&mut self) {
        self.pitch = 0.0;
        self.yaw = 0.0;
        self.roll = 0.0;
    }

    fn ramp(&self, value: f64, direction: f64, dt: f64) -> f64 {
        if direction != 0.0 {
            return (value + direction * self.config.ramp_rate * dt).clamp(-1.0, 1.0);
        }
        let decayed = value * (-self.config.centering_rate * dt).exp();
        if decayed.abs() < AXIS_DEADZONE {
            0.0
        } else {
            decayed
        }
    }
}

fn axis(positive: bool, negative: bool) -> f64 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}
