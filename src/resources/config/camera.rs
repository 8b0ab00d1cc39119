use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Geometry of the chase and front cameras.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraRig {
    /// Horizontal distance from the aircraft (scene units).
    pub distance: f64,
    /// Height above the aircraft (scene units).
    pub height: f64,
    /// Scene units per foot of altitude.
    pub vertical_scale: f64,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            distance: 150.0,
            height: 50.0,
            vertical_scale: 1.0,
        }
    }
}
