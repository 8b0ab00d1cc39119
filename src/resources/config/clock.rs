use serde::{Deserialize, Serialize};

/// Tick policy for the simulation clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ClockConfig {
    /// Whole ticks of `timestep` seconds, at most `max_substeps` per frame.
    Fixed { timestep: f64, max_substeps: u32 },
    /// One tick per frame, never longer than `max_dt` seconds.
    Variable { max_dt: f64 },
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig::Fixed {
            timestep: 1.0 / 60.0,
            max_substeps: 4,
        }
    }
}
