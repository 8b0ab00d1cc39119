use approx::assert_relative_eq;
use skyhop::{
    components::{AircraftSource, CameraMode, ControlInputState},
    resources::CameraRig,
    systems::project,
    FlightSession,
};

use crate::common::{assert_view_eq, create_in_flight_start, create_test_config};

fn turning_session() -> FlightSession {
    let mut session = FlightSession::from_sources(
        &AircraftSource::default(),
        &create_in_flight_start(6000.0, 280.0),
        &create_test_config(),
    )
    .unwrap();
    let bank = ControlInputState {
        roll: 0.6,
        pitch: 0.1,
        ..Default::default()
    };
    for _ in 0..120 {
        session.advance(1.0 / 60.0, &bank);
    }
    session
}

#[test]
fn test_front_back_front_is_bit_identical() {
    let mut session = turning_session();
    session.cycle_camera();
    assert_eq!(session.camera_mode(), CameraMode::Front);
    let front = session.view();

    session.cycle_camera();
    let back = session.view();
    session.cycle_camera();
    let front_again = session.view();

    assert_ne!(front, back);
    assert_eq!(front, front_again);
}

#[test]
fn test_camera_keeps_rig_distance() {
    let mut session = turning_session();
    let rig = CameraRig::default();
    let expected = (rig.distance.powi(2) + rig.height.powi(2)).sqrt();

    for _ in 0..10 {
        session.advance(0.1, &ControlInputState::default());
        let view = session.view();
        assert_relative_eq!((view.eye - view.target).norm(), expected, epsilon = 1e-6);
        assert_relative_eq!(view.target.z, session.state().altitude());
    }
}

#[test]
fn test_session_view_matches_projection() {
    let session = turning_session();
    let expected = project(session.state(), CameraMode::Back, &CameraRig::default());
    assert_view_eq(&session.view(), &expected, 1e-12);
}

#[test]
fn test_front_and_back_mirror_about_aircraft() {
    let session = turning_session();
    let rig = CameraRig::default();
    let front = project(session.state(), CameraMode::Front, &rig);
    let back = project(session.state(), CameraMode::Back, &rig);

    let midpoint = nalgebra::center(&front.eye, &back.eye);
    assert_relative_eq!(midpoint.x, front.target.x, epsilon = 1e-9);
    assert_relative_eq!(midpoint.y, front.target.y, epsilon = 1e-9);
    assert_relative_eq!(midpoint.z, front.target.z + rig.height, epsilon = 1e-9);
}
