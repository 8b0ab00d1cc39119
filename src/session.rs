use bevy::log::{debug, info, warn};

use crate::{
    components::{
        AircraftSource, AircraftSpec, AircraftState, CameraMode, ConfigError, ControlInputState,
        FlightInfo, StartConfig, ViewTransform,
    },
    resources::{CameraRig, FlightModelParams, SimulationClock, SimulationConfig},
    systems::{detect_touchdown, project, step, FlightRegime, TouchdownReport},
};

/// One aircraft flying outside of any Bevy `App`.
///
/// Owns the current state and everything needed to advance it. Used by the replay tool and by
/// tests that want the dynamics without a scheduler.
#[derive(Debug, Clone)]
pub struct FlightSession {
    spec: AircraftSpec,
    state: AircraftState,
    params: FlightModelParams,
    clock: SimulationClock,
    camera_mode: CameraMode,
    rig: CameraRig,
    pending_gear: bool,
    touchdowns: Vec<TouchdownReport>,
}

impl FlightSession {
    pub fn new(
        spec: AircraftSpec,
        state: AircraftState,
        config: &SimulationConfig,
    ) -> Result<Self, ConfigError> {
        spec.validate()?;
        config.validate()?;

        Ok(Self {
            spec,
            state,
            params: config.flight_model.clone(),
            clock: SimulationClock::new(config.clock),
            camera_mode: CameraMode::default(),
            rig: config.camera.clone(),
            pending_gear: false,
            touchdowns: Vec::new(),
        })
    }

    /// Resolves the aircraft and its start position, then builds the session.
    pub fn from_sources(
        aircraft: &AircraftSource,
        start: &StartConfig,
        config: &SimulationConfig,
    ) -> Result<Self, ConfigError> {
        let spec = AircraftSpec::new(aircraft)?;
        let state = start.initial_state(spec.max_speed)?;
        Self::new(spec, state, config)
    }

    /// Runs exactly one dynamics step of `dt` seconds.
    ///
    /// A gear toggle that could not be applied earlier (a frame without ticks, or a degenerate
    /// `dt`) is applied here.
    pub fn tick(&mut self, controls: &ControlInputState, dt: f64) -> &AircraftState {
        let gear_toggle = controls.gear_toggle || self.pending_gear;
        let controls = ControlInputState {
            gear_toggle,
            ..*controls
        };

        let next = step(&self.state, &self.spec, &controls, &self.params, dt);
        let applied = dt.is_finite() && dt > 0.0;
        self.pending_gear = gear_toggle && !applied;

        let from = FlightRegime::from_altitude(self.state.altitude(), &self.params);
        let to = FlightRegime::from_altitude(next.altitude(), &self.params);
        if from != to {
            debug!("{}: {:?} -> {:?}", self.spec.name, from, to);
        }

        if let Some(report) = detect_touchdown(&self.state, &next, &self.params) {
            if report.hard {
                warn!(
                    "{}: hard landing, sink rate {:.1} ft/s",
                    self.spec.name, report.sink_rate
                );
            } else {
                info!("{}: touchdown at {:.1} kt", self.spec.name, report.speed);
            }
            self.touchdowns.push(report);
        }

        self.state = next;
        &self.state
    }

    /// Feeds one frame of wall-clock time through the clock and runs the resulting ticks.
    ///
    /// Returns the number of ticks run. The gear toggle in `controls` is applied on the first of
    /// them, or held until a later frame if this one produced none.
    pub fn advance(&mut self, frame_dt: f64, controls: &ControlInputState) -> u32 {
        let ticks = self.clock.advance(frame_dt);
        if ticks.is_empty() {
            self.pending_gear |= controls.gear_toggle;
            return 0;
        }

        let held = ControlInputState {
            gear_toggle: false,
            ..*controls
        };
        for (i, dt) in ticks.enumerate() {
            self.tick(if i == 0 { controls } else { &held }, dt);
        }
        ticks.count
    }

    pub fn view(&self) -> ViewTransform {
        project(&self.state, self.camera_mode, &self.rig)
    }

    pub fn cycle_camera(&mut self) -> CameraMode {
        self.camera_mode.cycle();
        self.camera_mode
    }

    pub fn camera_mode(&self) -> CameraMode {
        self.camera_mode
    }

    /// Replaces the aircraft and its state. Touchdown history and the clock carry over.
    pub fn swap_aircraft(
        &mut self,
        spec: AircraftSpec,
        state: AircraftState,
    ) -> Result<(), ConfigError> {
        spec.validate()?;
        info!("Swapping {} for {}", self.spec.name, spec.name);
        self.spec = spec;
        self.state = state;
        self.pending_gear = false;
        Ok(())
    }

    pub fn flight_info(&self) -> FlightInfo {
        FlightInfo::from_state(&self.state, &self.spec)
    }

    pub fn regime(&self) -> FlightRegime {
        FlightRegime::from_altitude(self.state.altitude(), &self.params)
    }

    pub fn touchdowns(&self) -> &[TouchdownReport] {
        &self.touchdowns
    }

    pub fn state(&self) -> &AircraftState {
        &self.state
    }

    pub fn spec(&self) -> &AircraftSpec {
        &self.spec
    }

    pub fn params(&self) -> &FlightModelParams {
        &self.params
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut SimulationClock {
        &mut self.clock
    }
}
