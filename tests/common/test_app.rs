use bevy::{prelude::*, time::TimeUpdateStrategy};
use skyhop::{
    components::{AircraftSource, StartConfig},
    plugins::{FlightSet, FlightSimPlugin, RegimeChanged, Touchdown},
    resources::SimulationConfig,
};
use std::time::Duration;

use super::fixtures::create_test_config;

/// Events captured across frames; Bevy drops unread events after two updates.
#[derive(Resource, Default, Debug)]
pub struct EventLog {
    pub regime: Vec<RegimeChanged>,
    pub touchdowns: Vec<Touchdown>,
}

fn record_events(
    mut log: ResMut<EventLog>,
    mut regime: EventReader<RegimeChanged>,
    mut touchdowns: EventReader<Touchdown>,
) {
    log.regime.extend(regime.read().copied());
    log.touchdowns.extend(touchdowns.read().copied());
}

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    aircraft: AircraftSource,
    start: StartConfig,
    config: SimulationConfig,
    frame_time: f64,
    keyboard: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            aircraft: AircraftSource::default(),
            start: StartConfig::default(),
            config: create_test_config(),
            frame_time: 1.0 / 60.0,
            keyboard: false,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aircraft(mut self, aircraft: AircraftSource) -> Self {
        self.aircraft = aircraft;
        self
    }

    pub fn with_start(mut self, start: StartConfig) -> Self {
        self.start = start;
        self
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_frame_time(mut self, seconds: f64) -> Self {
        self.frame_time = seconds;
        self
    }

    /// Provides a `ButtonInput<KeyCode>` resource the test can press keys on.
    pub fn with_keyboard(mut self) -> Self {
        self.keyboard = true;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
                self.frame_time,
            )))
            .add_plugins(FlightSimPlugin {
                aircraft: self.aircraft,
                start: self.start,
                config: self.config,
            })
            .init_resource::<EventLog>()
            .add_systems(Update, record_events.after(FlightSet::Dynamics));

        if self.keyboard {
            app.init_resource::<ButtonInput<KeyCode>>();
        }

        // Run startup and the first (zero-length) frame.
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn get_state_mut<T: Resource>(&mut self) -> Option<Mut<T>> {
        self.app.world_mut().get_resource_mut::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn press(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(key);
    }

    pub fn events(&self) -> &EventLog {
        self.app.world().resource::<EventLog>()
    }
}
