use bevy::prelude::*;
use nalgebra::Vector3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skyhop::{
    components::{
        ActiveView, AircraftSource, AircraftSpec, AircraftState, AircraftType, CameraMode,
        ControlInputState, FlightCamera, FlightPhase, StartConfig,
    },
    plugins::{FlightSimPlugin, SwapAircraft},
    resources::{CameraRig, ClockConfig, FlightModelParams, SimulationClock, SimulationConfig},
    systems::{project, FlightRegime},
    FlightSession,
};

use crate::common::{
    assert_position_eq, create_in_flight_start, create_test_config, player_state,
    random_controls, set_player_controls, simulate_duration, wait_for_condition, TestAppBuilder,
};

#[test]
fn test_player_spawns_on_runway() {
    let mut app = TestAppBuilder::new().build();

    let spec = app.query_single::<AircraftSpec>().cloned().unwrap();
    assert_eq!(spec.name, "Boeing 737-800");

    let state = *app.query_single::<AircraftState>().unwrap();
    assert!(state.on_ground());
    assert_eq!(state.heading, 40.0);
    assert_eq!(state.speed, 0.0);
    assert_eq!(app.query_single::<FlightPhase>(), Some(&FlightPhase::Ground));

    let view = *app.get_state::<ActiveView>().unwrap();
    assert_eq!(view.mode, CameraMode::Back);
    assert_eq!(
        view.view,
        project(&state, CameraMode::Back, &CameraRig::default())
    );
}

#[test]
fn test_takeoff_emits_regime_change() {
    let mut app = TestAppBuilder::new().build();
    set_player_controls(&mut app, ControlInputState::throttle_up());

    simulate_duration(&mut app, 25.0, 1.0 / 60.0);
    let rolling = player_state(&mut app.app).unwrap();
    assert!(rolling.on_ground(), "no rotation, no liftoff");
    assert!(rolling.speed > AircraftSpec::boeing_737().stall_speed);
    assert!(app.events().regime.is_empty());

    set_player_controls(
        &mut app,
        ControlInputState {
            pitch: 1.0,
            throttle_delta: 1.0,
            ..Default::default()
        },
    );
    let airborne = wait_for_condition(
        &mut app,
        |app| player_state(app).is_some_and(|state| state.airborne),
        600,
    );
    assert!(airborne, "aircraft never left the ground");

    let change = app.events().regime[0];
    assert_eq!(change.from, FlightRegime::Ground);
    assert_eq!(change.to, FlightRegime::Air);
    assert_ne!(app.query_single::<FlightPhase>(), Some(&FlightPhase::Ground));
}

#[test]
fn test_descent_ends_in_touchdown() {
    let mut app = TestAppBuilder::new()
        .with_start(create_in_flight_start(20.0, 140.0))
        .build();
    if let Some(mut state) = app.query_single_mut::<AircraftState>() {
        state.pitch = -2.0;
    }

    let landed = wait_for_condition(
        &mut app,
        |app| player_state(app).is_some_and(|state| state.on_ground()),
        600,
    );
    assert!(landed);
    app.run_frame();

    let events = app.events();
    assert_eq!(events.touchdowns.len(), 1);
    assert!(!events.touchdowns[0].hard);
    assert!(events.touchdowns[0].sink_rate > 0.0);
    assert!(events
        .regime
        .iter()
        .any(|change| change.from == FlightRegime::Air && change.to == FlightRegime::Ground));
}

#[test]
fn test_swap_aircraft_event() {
    let mut app = TestAppBuilder::new().build();
    let start = StartConfig::Runway {
        airport: "NRT".to_string(),
        runway: Some("34L".to_string()),
    };
    let cessna = AircraftSpec::cessna_172();
    let expected = start.initial_state(cessna.max_speed).unwrap();

    app.app.world_mut().send_event(SwapAircraft {
        spec: cessna.clone(),
        start,
    });
    app.run_frame();

    assert_eq!(app.query_single::<AircraftSpec>(), Some(&cessna));
    assert_eq!(app.query_single::<Name>().unwrap().as_str(), "Cessna 172");
    let state = player_state(&mut app.app).unwrap();
    assert_position_eq(&state.position, &expected.position, 1e-9);
    assert_eq!(state.heading, expected.heading);

    // An unknown airport leaves the current aircraft alone.
    app.app.world_mut().send_event(SwapAircraft {
        spec: AircraftSpec::boeing_777(),
        start: StartConfig::Runway {
            airport: "ZZZ".to_string(),
            runway: None,
        },
    });
    app.run_frame();
    assert_eq!(app.query_single::<AircraftSpec>(), Some(&cessna));
}

#[test]
fn test_flight_camera_follows_view() {
    let mut app = TestAppBuilder::new()
        .with_start(create_in_flight_start(3000.0, 250.0))
        .build();
    app.app
        .world_mut()
        .spawn((FlightCamera, Transform::default()));
    app.run_steps(30);

    let eye = app.get_state::<ActiveView>().unwrap().view.eye;
    let transform = *app.query_single::<Transform>().unwrap();
    let translation = Vector3::new(
        transform.translation.x as f64,
        transform.translation.y as f64,
        transform.translation.z as f64,
    );
    assert_position_eq(&translation, &eye.coords, 1e-2);
    assert!(transform.forward().z < 0.0, "camera looks down at the aircraft");
}

#[test]
fn test_app_matches_session() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(AircraftSource::Programmed(AircraftType::AirbusA320))
        .build();
    let mut session = FlightSession::from_sources(
        &AircraftSource::Programmed(AircraftType::AirbusA320),
        &StartConfig::default(),
        &create_test_config(),
    )
    .unwrap();

    let frame_dt = std::time::Duration::from_secs_f64(1.0 / 60.0).as_secs_f64();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for _ in 0..300 {
        let controls = random_controls(&mut rng);
        set_player_controls(&mut app, controls);
        app.run_frame();
        session.advance(frame_dt, &controls);
    }

    assert_eq!(player_state(&mut app.app).unwrap(), *session.state());
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let broken = SimulationConfig {
        flight_model: FlightModelParams {
            effectiveness_floor: -1.0,
            ..Default::default()
        },
        clock: ClockConfig::Fixed {
            timestep: 0.0,
            max_substeps: 4,
        },
        ..Default::default()
    };
    assert!(FlightSimPlugin::default()
        .try_with_config(broken.clone())
        .is_err());
    assert!(FlightSimPlugin::default()
        .try_with_config(create_test_config())
        .is_ok());

    let mut app = TestAppBuilder::new().with_config(broken).build();
    assert_eq!(
        app.get_state::<FlightModelParams>(),
        Some(&FlightModelParams::default())
    );
    assert_eq!(
        app.get_state::<SimulationClock>().map(|clock| clock.mode()),
        Some(ClockConfig::default())
    );

    set_player_controls(&mut app, ControlInputState::throttle_up());
    app.run_steps(60);
    assert!(player_state(&mut app.app).unwrap().speed > 0.0);
}
