use bevy::prelude::*;
use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Represents the kinematic state of one aircraft.
///
/// World frame: `x` east and `y` north in ground units, `z` altitude in feet above ground level.
/// Heading is clockwise from north in `[0, 360)`, pitch and roll are clamped by the flight model.
/// The state is only ever replaced wholesale by the dynamics step, so readers always see a
/// consistent snapshot.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    /// Position: ground coordinates and altitude (ft).
    pub position: Vector3<f64>,
    /// Heading (degrees, 0 = north, 90 = east).
    pub heading: f64,
    /// Pitch (degrees, nose up positive).
    pub pitch: f64,
    /// Roll (degrees, right wing down positive).
    pub roll: f64,
    /// Airspeed (knots).
    pub speed: f64,
    /// Throttle setting (percent).
    pub throttle: f64,
    /// Fuel remaining as a fraction of the tank, `[0, 1]`. Thrust needs fuel.
    pub fuel: f64,
    /// Landing gear extended.
    pub gear_down: bool,
    /// Above the ground/air regime threshold after the last step.
    pub airborne: bool,
    /// Altitude rate applied on the last step (ft/s).
    pub vertical_speed: f64,
}

impl Default for AircraftState {
    /// At rest at the origin, heading north, gear down, tank full.
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            heading: 0.0,
            pitch: 0.0,
            roll: 0.0,
            speed: 0.0,
            throttle: 0.0,
            fuel: 1.0,
            gear_down: true,
            airborne: false,
            vertical_speed: 0.0,
        }
    }
}

impl AircraftState {
    /// An aircraft parked on the ground at `position`, facing `heading`.
    pub fn at_rest(position: Vector2<f64>, heading: f64) -> Self {
        Self {
            position: Vector3::new(position.x, position.y, 0.0),
            heading: heading.rem_euclid(360.0),
            ..Default::default()
        }
    }

    pub fn altitude(&self) -> f64 {
        self.position.z
    }

    pub fn ground_position(&self) -> Vector2<f64> {
        self.position.xy()
    }

    /// In contact with the ground.
    pub fn on_ground(&self) -> bool {
        self.position.z <= 0.0
    }

    /// Horizontal unit vector along the heading.
    pub fn forward(&self) -> Vector3<f64> {
        let heading = self.heading.to_radians();
        Vector3::new(heading.sin(), heading.cos(), 0.0)
    }
}
