use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// How held keys are turned into analogue axis values.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Axis travel per second while a key is held.
    pub ramp_rate: f64,
    /// Exponential return-to-centre rate (1/s) once the key is released.
    pub centering_rate: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            // 0.02 per frame at 60 Hz
            ramp_rate: 1.2,
            // 0.95 decay per frame at 60 Hz
            centering_rate: -60.0 * 0.95f64.ln(),
        }
    }
}
