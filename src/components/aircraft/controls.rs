use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Normalized pilot commands for one tick.
///
/// Produced by the input layer and handed to the dynamics step as a complete value. Axis values
/// outside `[-1, 1]` are clamped by [`ControlInputState::sanitized`], never rejected.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlInputState {
    /// Nose up positive.
    pub pitch: f64,
    /// Nose right positive.
    pub yaw: f64,
    /// Right wing down positive.
    pub roll: f64,
    /// Throttle rate request: -1 closes, +1 opens.
    pub throttle_delta: f64,
    /// Rising edge of the gear key.
    pub gear_toggle: bool,
    /// Wheel brakes held.
    pub brake: bool,
}

impl ControlInputState {
    pub fn throttle_up() -> Self {
        Self {
            throttle_delta: 1.0,
            ..Default::default()
        }
    }

    /// Copy with every axis clamped to `[-1, 1]`; non-finite values become neutral.
    pub fn sanitized(&self) -> Self {
        Self {
            pitch: clamp_axis(self.pitch),
            yaw: clamp_axis(self.yaw),
            roll: clamp_axis(self.roll),
            throttle_delta: clamp_axis(self.throttle_delta),
            ..*self
        }
    }
}

/// Marks the aircraft that receives keyboard input. Other aircraft keep whatever
/// `ControlInputState` their owner writes.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct PlayerAircraft;

fn clamp_axis(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}
