use bevy::prelude::*;
use nalgebra::{Isometry3, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Selected viewpoint relative to the player aircraft.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraMode {
    /// Ahead of the nose, looking back at the aircraft.
    Front,
    /// Chase view from behind, looking along the heading.
    #[default]
    Back,
}

impl CameraMode {
    pub fn next(self) -> Self {
        match self {
            CameraMode::Front => CameraMode::Back,
            CameraMode::Back => CameraMode::Front,
        }
    }

    pub fn cycle(&mut self) {
        *self = self.next();
    }
}

/// Eye placement handed to the renderer. Scene frame: x east, y north, z up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub eye: Point3<f64>,
    pub target: Point3<f64>,
    pub up: Vector3<f64>,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            eye: Point3::new(0.0, -150.0, 50.0),
            target: Point3::origin(),
            up: Vector3::z(),
        }
    }
}

impl ViewTransform {
    /// World-to-camera transform (right-handed, camera looking down its -z).
    pub fn view_matrix(&self) -> Isometry3<f64> {
        Isometry3::look_at_rh(&self.eye, &self.target, &self.up)
    }

    /// Unit vector from the eye to the target.
    pub fn look_direction(&self) -> Vector3<f64> {
        (self.target - self.eye).normalize()
    }
}

/// Latest projected view, published once per frame after the dynamics step.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct ActiveView {
    pub mode: CameraMode,
    pub view: ViewTransform,
}

/// Marks a Bevy camera entity whose `Transform` follows the active view.
#[derive(Component, Debug, Default)]
pub struct FlightCamera;
