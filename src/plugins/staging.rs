use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    BuildAircraft,
    BuildCameras,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (StartupStage::BuildAircraft, StartupStage::BuildCameras).chain(),
        );
    }
}

/// Per-frame ordering: read input, integrate, then place the camera on the new state.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Input,
    Dynamics,
    View,
}
