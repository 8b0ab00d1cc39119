use bevy::prelude::*;
use skyhop::components::{AircraftState, ControlInputState, PlayerAircraft};

use super::test_app::TestApp;

/// Waits for a specific condition to be met within a maximum number of steps
pub fn wait_for_condition<F>(test_app: &mut TestApp, condition: F, max_steps: usize) -> bool
where
    F: Fn(&mut App) -> bool,
{
    for _ in 0..max_steps {
        if condition(&mut test_app.app) {
            return true;
        }
        test_app.run_frame();
    }
    false
}

/// Helper to run a simulation for a specific duration
pub fn simulate_duration(test_app: &mut TestApp, duration: f64, frame_time: f64) {
    let steps = (duration / frame_time).ceil() as usize;
    test_app.run_steps(steps);
}

/// Overwrites the player's controls; they persist until changed again.
pub fn set_player_controls(test_app: &mut TestApp, controls: ControlInputState) {
    let world = test_app.app.world_mut();
    let mut query = world.query_filtered::<&mut ControlInputState, With<PlayerAircraft>>();
    if let Ok(mut current) = query.get_single_mut(world) {
        *current = controls;
    }
}

pub fn player_state(app: &mut App) -> Option<AircraftState> {
    let world = app.world_mut();
    let mut query = world.query_filtered::<&AircraftState, With<PlayerAircraft>>();
    query.get_single(world).ok().copied()
}
