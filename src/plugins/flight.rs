use bevy::prelude::*;

use crate::{
    components::{
        ActiveView, AircraftSource, AircraftSpec, AircraftState, CameraMode, ConfigError,
        ControlInputState, FlightPhase, PlayerAircraft, StartConfig,
    },
    plugins::{
        FlightSet, RegimeChanged, StartupSequencePlugin, StartupStage, SwapAircraft, Touchdown,
    },
    resources::{CameraRig, SimulationClock, SimulationConfig},
    systems::{
        camera_view_system, flight_dynamics_system, keyboard_input_system, project,
        swap_aircraft_system, InputAdapter,
    },
};

/// Flies one player aircraft: keyboard input, dynamics and the chase/front camera.
///
/// Everything runs in `Update`, ordered by [`FlightSet`]. The dynamics advance by the
/// [`SimulationClock`], not by the frame count, so frame rate does not change the flight.
#[derive(Clone, Default)]
pub struct FlightSimPlugin {
    pub aircraft: AircraftSource,
    pub start: StartConfig,
    pub config: SimulationConfig,
}

impl FlightSimPlugin {
    pub fn new(aircraft: AircraftSource, start: StartConfig) -> Self {
        Self {
            aircraft,
            start,
            config: SimulationConfig::default(),
        }
    }

    /// Replaces the configuration. An invalid one is rejected with an error when the plugin is
    /// built and the defaults are used instead; see [`Self::try_with_config`].
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the configuration after validating it.
    pub fn try_with_config(self, config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(self.with_config(config))
    }

    fn spawn_player(mut commands: Commands, aircraft: &AircraftSource, start: &StartConfig) {
        let spec = match AircraftSpec::new(aircraft) {
            Ok(spec) => spec,
            Err(e) => {
                error!("Failed to load aircraft {:?}: {}", aircraft, e);
                return;
            }
        };
        let state = match start.initial_state(spec.max_speed) {
            Ok(state) => state,
            Err(e) => {
                error!("Failed to place {}: {}", spec.name, e);
                return;
            }
        };

        info!(
            "Spawning {} at ({:.0}, {:.0}), {:.0} ft, heading {:.0}",
            spec.name,
            state.position.x,
            state.position.y,
            state.altitude(),
            state.heading
        );
        commands.spawn((
            Name::new(spec.name.clone()),
            FlightPhase::classify(&state),
            state,
            ControlInputState::default(),
            PlayerAircraft,
            spec,
        ));
    }

    fn initial_view(
        mode: Res<CameraMode>,
        rig: Res<CameraRig>,
        mut active: ResMut<ActiveView>,
        player: Query<&AircraftState, With<PlayerAircraft>>,
    ) {
        if let Ok(state) = player.get_single() {
            *active = ActiveView {
                mode: *mode,
                view: project(state, *mode, &rig),
            };
        } else {
            warn!("No player aircraft found when placing the camera");
        }
    }
}

impl Plugin for FlightSimPlugin {
    fn build(&self, app: &mut App) {
        let config = match self.config.validate() {
            Ok(()) => self.config.clone(),
            Err(e) => {
                error!("Invalid simulation config, using defaults: {}", e);
                SimulationConfig::default()
            }
        };

        if !app.is_plugin_added::<StartupSequencePlugin>() {
            app.add_plugins(StartupSequencePlugin);
        }

        let aircraft = self.aircraft.clone();
        let start = self.start.clone();

        app.insert_resource(config.flight_model)
            .insert_resource(SimulationClock::new(config.clock))
            .insert_resource(config.camera)
            .insert_resource(InputAdapter::new(config.input))
            .init_resource::<CameraMode>()
            .init_resource::<ActiveView>()
            .add_event::<RegimeChanged>()
            .add_event::<Touchdown>()
            .add_event::<SwapAircraft>()
            .configure_sets(
                Update,
                (FlightSet::Input, FlightSet::Dynamics, FlightSet::View).chain(),
            )
            .add_systems(
                Startup,
                (
                    (move |commands: Commands| Self::spawn_player(commands, &aircraft, &start))
                        .in_set(StartupStage::BuildAircraft),
                    Self::initial_view.in_set(StartupStage::BuildCameras),
                ),
            )
            .add_systems(
                Update,
                (
                    (swap_aircraft_system, keyboard_input_system)
                        .chain()
                        .in_set(FlightSet::Input),
                    flight_dynamics_system.in_set(FlightSet::Dynamics),
                    camera_view_system.in_set(FlightSet::View),
                ),
            );
    }
}
