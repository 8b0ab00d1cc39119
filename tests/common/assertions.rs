use approx::assert_relative_eq;
use nalgebra::Vector3;
use skyhop::{
    components::{AircraftSpec, AircraftState, ViewTransform},
    resources::FlightModelParams,
};

/// Assert that an aircraft state respects the flight model's limits
#[track_caller]
pub fn assert_state_valid(state: &AircraftState, spec: &AircraftSpec, params: &FlightModelParams) {
    assert!(
        state.position.iter().all(|x| x.is_finite()),
        "Position is not finite: {:?}",
        state.position
    );
    assert!(
        (0.0..360.0).contains(&state.heading),
        "Heading {} outside [0, 360)",
        state.heading
    );
    assert!(
        state.pitch.abs() <= params.max_pitch_deg,
        "Pitch {} beyond limit",
        state.pitch
    );
    assert!(
        state.roll.abs() <= params.max_roll_deg,
        "Roll {} beyond limit",
        state.roll
    );
    assert!(
        (0.0..=spec.max_speed).contains(&state.speed),
        "Speed {} outside [0, {}]",
        state.speed,
        spec.max_speed
    );
    assert!(
        (0.0..=100.0).contains(&state.throttle),
        "Throttle {} outside [0, 100]",
        state.throttle
    );
    assert!(
        (0.0..=1.0).contains(&state.fuel),
        "Fuel fraction {} outside [0, 1]",
        state.fuel
    );
    assert!(
        (0.0..=spec.service_ceiling).contains(&state.altitude()),
        "Altitude {} outside [0, {}]",
        state.altitude(),
        spec.service_ceiling
    );
}

/// Assert that two positions are approximately equal
#[track_caller]
pub fn assert_position_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

/// Assert that two views place the camera in the same spot
#[track_caller]
pub fn assert_view_eq(actual: &ViewTransform, expected: &ViewTransform, epsilon: f64) {
    assert_position_eq(&actual.eye.coords, &expected.eye.coords, epsilon);
    assert_position_eq(&actual.target.coords, &expected.target.coords, epsilon);
    assert_position_eq(&actual.up, &expected.up, epsilon);
}
