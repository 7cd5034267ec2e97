use bevy::log::{debug, info};
use nalgebra::Vector2;

use super::{FlightConfig, FlightPhase, FlightSnapshot, FlightState};
use crate::resources::InputSnapshot;
use crate::utils::{approach, shortest_angle_correction};

/// Owns the flight state and advances it one tick at a time.
///
/// Each tick dispatches on the current [`FlightPhase`]: the takeoff ramp,
/// manual flight, or the landing sequence. Offsets are clamped to the map
/// bounds after every tick.
#[derive(Debug, Clone)]
pub struct FlightModel {
    state: FlightState,
    config: FlightConfig,
    ticks: u64,
}

impl Default for FlightModel {
    fn default() -> Self {
        Self::new(FlightConfig::default())
    }
}

impl FlightModel {
    pub fn new(config: FlightConfig) -> Self {
        Self {
            state: FlightState::from_config(&config.start),
            config,
            ticks: 0,
        }
    }

    /// Start from an explicit state instead of the configured start.
    pub fn with_state(mut self, state: FlightState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    pub fn phase(&self) -> FlightPhase {
        self.state.phase
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn snapshot(&self) -> FlightSnapshot {
        FlightSnapshot::capture(&self.state, self.ticks)
    }

    /// Advance `dt_ticks` ticks with the same input held for all of them.
    pub fn tick(&mut self, dt_ticks: u32, input: &InputSnapshot) -> FlightSnapshot {
        for _ in 0..dt_ticks {
            self.step(input);
        }
        self.snapshot()
    }

    /// Enter the landing sequence. Only valid while airborne.
    pub fn begin_landing(&mut self) -> bool {
        self.transition(FlightPhase::Landing)
    }

    fn step(&mut self, input: &InputSnapshot) {
        let phase = self.state.phase;
        if phase.accepts_manual_input() {
            self.manual_step(input);
        }
        match phase {
            FlightPhase::TakingOff => self.takeoff_step(),
            FlightPhase::Landing => self.landing_step(),
            FlightPhase::Airborne | FlightPhase::Landed => {}
        }

        if self.state.phase.integrates_position() {
            self.integrate();
        }
        self.clamp_offset();
        self.ticks += 1;
    }

    fn takeoff_step(&mut self) {
        let takeoff = &self.config.takeoff;
        let state = &mut self.state;

        if state.takeoff_tick < takeoff.ticks {
            state.takeoff_tick += 1;
            state.speed += takeoff.speed_step();

            if state.takeoff_tick > takeoff.zoom_start_tick && state.zoom < takeoff.zoom_cap {
                state.zoom += takeoff.zoom_step();
            }
            if state.takeoff_tick > takeoff.turn_start_tick {
                state.heading -= takeoff.turn_step();
            }
        }

        if self.state.takeoff_tick >= takeoff.ticks {
            self.transition(FlightPhase::Airborne);
        }
    }

    fn manual_step(&mut self, input: &InputSnapshot) {
        let control = &self.config.control;
        let state = &mut self.state;

        if input.turn_left {
            state.heading += control.turn_step;
        }
        if input.turn_right {
            state.heading -= control.turn_step;
        }
        if input.accelerate {
            state.speed = (state.speed + control.speed_step).min(control.max_speed);
        }
        if input.decelerate {
            state.speed = (state.speed - control.speed_step).max(control.min_speed);
        }
        if input.zoom_in {
            state.zoom = (state.zoom * control.zoom_factor).min(control.max_zoom);
        }
        if input.zoom_out {
            state.zoom = (state.zoom / control.zoom_factor).max(control.min_zoom);
        }
    }

    fn landing_step(&mut self) {
        let landing = &self.config.landing;
        let state = &mut self.state;

        let target = Vector2::new(landing.spot[0] - 0.5, landing.spot[1] - 0.5);
        state.offset.x = approach(state.offset.x, target.x, landing.rate);
        state.offset.y = approach(state.offset.y, target.y, landing.rate);

        state.zoom = (state.zoom - landing.zoom_step).max(landing.ground_zoom);
        state.heading +=
            shortest_angle_correction(state.heading, landing.heading) * landing.rate;

        if state.zoom <= landing.ground_zoom {
            state.speed = 0.0;
            self.transition(FlightPhase::Landed);
        }
    }

    fn integrate(&mut self) {
        let state = &mut self.state;
        state.offset.x -= state.heading.sin() * state.speed;
        state.offset.y += state.heading.cos() * state.speed;
    }

    fn clamp_offset(&mut self) {
        let limit = self.config.offset_limit;
        self.state.offset.x = self.state.offset.x.clamp(-limit, limit);
        self.state.offset.y = self.state.offset.y.clamp(-limit, limit);
    }

    fn transition(&mut self, next: FlightPhase) -> bool {
        if !self.state.phase.can_transition_to(next) {
            debug!("Ignoring phase transition {:?} -> {:?}", self.state.phase, next);
            return false;
        }
        info!(
            "Flight phase {} -> {} at tick {}",
            self.state.phase, next, self.ticks
        );
        self.state.phase = next;
        true
    }
}
