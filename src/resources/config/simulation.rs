use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{CameraRig, ClockConfig, FlightModelParams, InputConfig};
use crate::components::ConfigError;

/// Everything tunable about a simulation run, loadable from a single YAML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub flight_model: FlightModelParams,
    pub clock: ClockConfig,
    pub input: InputConfig,
    pub camera: CameraRig,
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.flight_model.validate()?;

        match self.clock {
            ClockConfig::Fixed {
                timestep,
                max_substeps,
            } => {
                if !(timestep.is_finite() && timestep > 0.0) {
                    return Err(ConfigError::ValidationError(format!(
                        "clock timestep must be positive, got {timestep}"
                    )));
                }
                if max_substeps == 0 {
                    return Err(ConfigError::ValidationError(
                        "clock max_substeps must be at least 1".to_string(),
                    ));
                }
            }
            ClockConfig::Variable { max_dt } => {
                if !(max_dt.is_finite() && max_dt > 0.0) {
                    return Err(ConfigError::ValidationError(format!(
                        "clock max_dt must be positive, got {max_dt}"
                    )));
                }
            }
        }

        if !(self.input.ramp_rate.is_finite() && self.input.ramp_rate > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "input ramp_rate must be positive, got {}",
                self.input.ramp_rate
            )));
        }
        if !(self.input.centering_rate.is_finite() && self.input.centering_rate >= 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "input centering_rate must not be negative, got {}",
                self.input.centering_rate
            )));
        }

        let camera = [
            ("camera distance", self.camera.distance),
            ("camera height", self.camera.height),
            ("camera vertical_scale", self.camera.vertical_scale),
        ];
        for (name, value) in camera {
            if !value.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be finite"
                )));
            }
        }

        Ok(())
    }
}
