use bevy::prelude::*;

use super::{
    model::{detect_touchdown, step},
    regime::FlightRegime,
};
use crate::{
    components::{AircraftSpec, AircraftState, ControlInputState, FlightPhase, PlayerAircraft},
    plugins::{RegimeChanged, SwapAircraft, Touchdown},
    resources::{FlightModelParams, SimulationClock},
    systems::controller::InputAdapter,
};

/// Runs the dynamics step for every aircraft.
///
/// Frame time is turned into ticks by the [`SimulationClock`]; every aircraft runs the same
/// ticks. A gear toggle in an aircraft's controls is consumed by the first tick it sees, so the
/// gear moves once per key press however many ticks a frame holds.
pub fn flight_dynamics_system(
    time: Res<Time>,
    mut clock: ResMut<SimulationClock>,
    params: Res<FlightModelParams>,
    mut query: Query<(
        Entity,
        &AircraftSpec,
        &mut AircraftState,
        &mut ControlInputState,
        Option<&mut FlightPhase>,
    )>,
    mut regime_events: EventWriter<RegimeChanged>,
    mut touchdown_events: EventWriter<Touchdown>,
) {
    let ticks = clock.advance(time.delta_secs_f64());
    if ticks.is_empty() {
        return;
    }

    for (entity, spec, mut state, mut controls, phase) in query.iter_mut() {
        let mut current = *state;

        for dt in ticks {
            let next = step(&current, spec, &controls, &params, dt);
            if controls.gear_toggle {
                controls.gear_toggle = false;
                debug!("{}: gear {}", spec.name, if next.gear_down { "down" } else { "up" });
            }

            let from = FlightRegime::from_altitude(current.altitude(), &params);
            let to = FlightRegime::from_altitude(next.altitude(), &params);
            if from != to {
                debug!(
                    "{}: {:?} -> {:?} at {:.1} ft, {:.1} kt",
                    spec.name,
                    from,
                    to,
                    next.altitude(),
                    next.speed
                );
                regime_events.send(RegimeChanged { entity, from, to });
            }

            if let Some(report) = detect_touchdown(&current, &next, &params) {
                if report.hard {
                    warn!(
                        "{}: hard landing, sink rate {:.1} ft/s",
                        spec.name, report.sink_rate
                    );
                } else {
                    info!(
                        "{}: touchdown at {:.1} kt, sink rate {:.1} ft/s",
                        spec.name, report.speed, report.sink_rate
                    );
                }
                touchdown_events.send(Touchdown {
                    entity,
                    sink_rate: report.sink_rate,
                    speed: report.speed,
                    hard: report.hard,
                });
            }

            current = next;
        }

        *state = current;

        if let Some(mut phase) = phase {
            let classified = FlightPhase::classify(&current);
            if *phase != classified {
                debug!("{}: phase {} -> {}", spec.name, phase.label(), classified.label());
                *phase = classified;
            }
        }
    }
}

/// Applies [`SwapAircraft`] requests to the player aircraft.
///
/// The new aircraft starts from its own start configuration with neutral controls. Requests
/// whose start cannot be resolved are logged and ignored.
pub fn swap_aircraft_system(
    mut requests: EventReader<SwapAircraft>,
    mut query: Query<
        (
            &mut AircraftSpec,
            &mut AircraftState,
            &mut ControlInputState,
            &mut Name,
        ),
        With<PlayerAircraft>,
    >,
    mut adapter: Option<ResMut<InputAdapter>>,
) {
    for request in requests.read() {
        let Ok((mut spec, mut state, mut controls, mut name)) = query.get_single_mut() else {
            warn!("No player aircraft to swap for {}", request.spec.name);
            continue;
        };

        if let Err(e) = request.spec.validate() {
            warn!("Rejected aircraft swap to {}: {}", request.spec.name, e);
            continue;
        }
        match request.start.initial_state(request.spec.max_speed) {
            Ok(initial) => {
                info!("Swapping {} for {}", spec.name, request.spec.name);
                *spec = request.spec.clone();
                *state = initial;
                *controls = ControlInputState::default();
                name.set(request.spec.name.clone());
                if let Some(adapter) = adapter.as_mut() {
                    adapter.reset();
                }
            }
            Err(e) => warn!("Rejected aircraft swap to {}: {}", request.spec.name, e),
        }
    }
}
