use bevy::prelude::*;
use skyhop::components::{ActiveView, CameraMode};

use crate::common::{player_state, TestAppBuilder};

#[test]
fn test_throttle_keys() {
    let mut app = TestAppBuilder::new().with_keyboard().build();

    app.press(KeyCode::KeyR);
    app.run_steps(60);
    let opened = player_state(&mut app.app).unwrap().throttle;
    assert!(opened > 15.0 && opened < 25.0, "throttle {opened}");

    app.release(KeyCode::KeyR);
    app.run_steps(30);
    assert_eq!(player_state(&mut app.app).unwrap().throttle, opened);

    app.press(KeyCode::KeyF);
    app.run_steps(120);
    assert_eq!(player_state(&mut app.app).unwrap().throttle, 0.0);
}

#[test]
fn test_camera_key_cycles_once_per_press() {
    let mut app = TestAppBuilder::new().with_keyboard().build();
    assert_eq!(app.get_state::<CameraMode>(), Some(&CameraMode::Back));

    app.press(KeyCode::KeyC);
    app.run_steps(10);
    assert_eq!(app.get_state::<CameraMode>(), Some(&CameraMode::Front));
    assert_eq!(app.get_state::<ActiveView>().unwrap().mode, CameraMode::Front);

    app.release(KeyCode::KeyC);
    app.run_frame();
    app.press(KeyCode::KeyC);
    app.run_frame();
    assert_eq!(app.get_state::<CameraMode>(), Some(&CameraMode::Back));
}

#[test]
fn test_gear_key_toggles_once_while_held() {
    let mut app = TestAppBuilder::new().with_keyboard().build();
    assert!(player_state(&mut app.app).unwrap().gear_down);

    app.press(KeyCode::Space);
    app.run_steps(30);
    assert!(!player_state(&mut app.app).unwrap().gear_down);

    app.release(KeyCode::Space);
    app.run_frame();
    app.press(KeyCode::Space);
    app.run_frame();
    assert!(player_state(&mut app.app).unwrap().gear_down);
}

#[test]
fn test_rudder_steers_on_ground() {
    let mut app = TestAppBuilder::new().with_keyboard().build();
    let before = player_state(&mut app.app).unwrap().heading;

    app.press(KeyCode::KeyD);
    app.run_steps(60);
    let right = player_state(&mut app.app).unwrap().heading;
    assert!(right > before + 5.0, "heading {before} -> {right}");

    app.release(KeyCode::KeyD);
    app.press(KeyCode::KeyA);
    app.run_steps(120);
    assert!(player_state(&mut app.app).unwrap().heading < right);
}

#[test]
fn test_pitch_key_alone_never_lifts_off() {
    let mut app = TestAppBuilder::new().with_keyboard().build();
    app.press(KeyCode::KeyW);
    app.run_steps(240);

    let state = player_state(&mut app.app).unwrap();
    assert!(state.pitch > 0.0);
    assert_eq!(state.altitude(), 0.0);
    assert!(!state.airborne);
}
