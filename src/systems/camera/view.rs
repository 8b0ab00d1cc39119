use bevy::prelude::*;
use nalgebra::{Point3, Vector3};

use crate::{
    components::{
        ActiveView, AircraftState, CameraMode, FlightCamera, PlayerAircraft, ViewTransform,
    },
    resources::CameraRig,
};

/// Places the camera for `mode` around the aircraft.
///
/// Only the heading orients the rig; pitch and roll do not move the camera. The result depends
/// on nothing but the arguments, so switching modes and back reproduces the same transform.
pub fn project(state: &AircraftState, mode: CameraMode, rig: &CameraRig) -> ViewTransform {
    let target = Point3::new(
        state.position.x,
        state.position.y,
        state.altitude() * rig.vertical_scale,
    );
    let along = match mode {
        CameraMode::Front => state.forward() * rig.distance,
        CameraMode::Back => -state.forward() * rig.distance,
    };

    ViewTransform {
        eye: target + along + Vector3::z() * rig.height,
        target,
        up: Vector3::z(),
    }
}

/// Publishes the player's view and moves any [`FlightCamera`] onto it.
pub fn camera_view_system(
    mode: Res<CameraMode>,
    rig: Res<CameraRig>,
    mut active: ResMut<ActiveView>,
    player: Query<&AircraftState, With<PlayerAircraft>>,
    mut cameras: Query<&mut Transform, With<FlightCamera>>,
) {
    let Ok(state) = player.get_single() else {
        return;
    };

    let view = project(state, *mode, &rig);
    *active = ActiveView { mode: *mode, view };

    for mut transform in cameras.iter_mut() {
        *transform = to_transform(&view);
    }
}

/// Converts a view into a Bevy transform looking from the eye at the target.
pub fn to_transform(view: &ViewTransform) -> Transform {
    let eye = Vec3::new(view.eye.x as f32, view.eye.y as f32, view.eye.z as f32);
    let target = Vec3::new(
        view.target.x as f32,
        view.target.y as f32,
        view.target.z as f32,
    );
    let up = Vec3::new(view.up.x as f32, view.up.y as f32, view.up.z as f32);
    Transform::from_translation(eye).looking_at(target, up)
}
