use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    components::{AircraftSource, ConfigError, ControlInputState, FlightInfo, StartConfig},
    resources::SimulationConfig,
    session::FlightSession,
};

fn default_frame_rate() -> f64 {
    60.0
}

/// Controls held for a stretch of frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSegment {
    /// Seconds of wall-clock time.
    pub duration: f64,
    #[serde(default)]
    pub controls: ControlInputState,
    /// Switch camera at the start of the segment.
    #[serde(default)]
    pub camera_cycle: bool,
}

/// A scripted flight: aircraft, start position and a sequence of control segments.
///
/// Gear toggles and camera switches in a segment fire on its first frame only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub aircraft: AircraftSource,
    #[serde(default)]
    pub start: StartConfig,
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,
    pub segments: Vec<ControlSegment>,
}

impl Scenario {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let scenario: Self = serde_yaml::from_reader(file)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let scenario: Self = serde_yaml::from_str(yaml)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "frame_rate must be positive, got {}",
                self.frame_rate
            )));
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if !(segment.duration.is_finite() && segment.duration >= 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "segment {} has invalid duration {}",
                    i, segment.duration
                )));
            }
        }
        Ok(())
    }

    pub fn frame_count(&self) -> usize {
        self.segments
            .iter()
            .map(|segment| self.segment_frames(segment))
            .sum()
    }

    fn segment_frames(&self, segment: &ControlSegment) -> usize {
        (segment.duration * self.frame_rate).round() as usize
    }

    /// Flies the scenario and returns one [`FlightInfo`] per frame.
    pub fn run(&self, config: &SimulationConfig) -> Result<Vec<FlightInfo>, ConfigError> {
        let mut session = FlightSession::from_sources(&self.aircraft, &self.start, config)?;
        let frame_dt = 1.0 / self.frame_rate;
        let mut frames = Vec::with_capacity(self.frame_count());

        for segment in &self.segments {
            let held = ControlInputState {
                gear_toggle: false,
                ..segment.controls
            };
            for frame in 0..self.segment_frames(segment) {
                if frame == 0 && segment.camera_cycle {
                    session.cycle_camera();
                }
                let controls = if frame == 0 { &segment.controls } else { &held };
                session.advance(frame_dt, controls);
                frames.push(session.flight_info());
            }
        }

        Ok(frames)
    }
}
