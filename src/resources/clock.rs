use bevy::prelude::*;

use crate::resources::config::ClockConfig;

/// Turns wall-clock frame times into dynamics ticks.
///
/// In fixed mode frame time is accumulated and drained in whole timesteps; anything beyond
/// `max_substeps` ticks in one frame is dropped rather than carried forward, so a long stall
/// (debugger, window drag) does not make the simulation sprint to catch up.
#[derive(Resource, Debug, Clone)]
pub struct SimulationClock {
    mode: ClockConfig,
    accumulator: f64,
    time_scale: f64,
    paused: bool,
    elapsed: f64,
    tick_count: u64,
}

/// The ticks produced for one frame: `count` ticks of `dt` seconds each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ticks {
    pub count: u32,
    pub dt: f64,
}

impl Ticks {
    pub fn none() -> Self {
        Self { count: 0, dt: 0.0 }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn total(&self) -> f64 {
        self.count as f64 * self.dt
    }
}

impl Iterator for Ticks {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        self.count -= 1;
        Some(self.dt)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.count as usize, Some(self.count as usize))
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(ClockConfig::default())
    }
}

impl SimulationClock {
    pub fn new(mode: ClockConfig) -> Self {
        Self {
            mode,
            accumulator: 0.0,
            time_scale: 1.0,
            paused: false,
            elapsed: 0.0,
            tick_count: 0,
        }
    }

    pub fn fixed(timestep: f64, max_substeps: u32) -> Self {
        Self::new(ClockConfig::Fixed {
            timestep,
            max_substeps,
        })
    }

    pub fn variable(max_dt: f64) -> Self {
        Self::new(ClockConfig::Variable { max_dt })
    }

    /// Consumes one frame of wall-clock time and returns the ticks to run.
    ///
    /// Non-positive or non-finite frame times, and a paused clock, produce no ticks.
    pub fn advance(&mut self, frame_dt: f64) -> Ticks {
        if self.paused || !frame_dt.is_finite() || frame_dt <= 0.0 {
            return Ticks::none();
        }
        let scaled = frame_dt * self.time_scale;
        if scaled <= 0.0 {
            return Ticks::none();
        }

        let ticks = match self.mode {
            ClockConfig::Fixed {
                timestep,
                max_substeps,
            } => {
                self.accumulator += scaled;
                let due = (self.accumulator / timestep).floor();
                let count = if due > max_substeps as f64 {
                    warn!(
                        "Simulation falling behind: dropping {:.3}s ({} ticks due, {} allowed)",
                        self.accumulator - max_substeps as f64 * timestep,
                        due,
                        max_substeps
                    );
                    self.accumulator = 0.0;
                    max_substeps
                } else {
                    self.accumulator -= due * timestep;
                    due as u32
                };
                Ticks {
                    count,
                    dt: timestep,
                }
            }
            ClockConfig::Variable { max_dt } => Ticks {
                count: 1,
                dt: scaled.min(max_dt),
            },
        };

        self.elapsed += ticks.total();
        self.tick_count += ticks.count as u64;
        ticks
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Negative scales are clamped to zero, which freezes the simulation.
    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = if scale.is_finite() { scale.max(0.0) } else { 1.0 };
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Simulated seconds so far.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn mode(&self) -> ClockConfig {
        self.mode
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.elapsed = 0.0;
        self.tick_count = 0;
    }
}
