//! Telemetry simulation.
//!
//! Advances each vehicle's kinematic, battery, and signal state by one
//! tick. Randomness is injected so output is reproducible in tests.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::models::{Vehicle, VehicleStatus};

/// Per-tick perturbation bounds.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Maximum magnitude of the per-tick lat/lng shift, degrees
    pub position_jitter_deg: f64,
    /// Maximum per-tick battery drain, percentage points
    pub battery_drain_max: f64,
    /// Maximum magnitude of the per-tick altitude delta, meters
    pub altitude_jitter_m: f64,
    /// Maximum magnitude of the per-tick speed delta, m/s
    pub speed_jitter_mps: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            position_jitter_deg: 0.005,
            battery_drain_max: 0.2,
            altitude_jitter_m: 2.5,
            speed_jitter_mps: 1.0,
        }
    }
}

/// Advances vehicle telemetry by one tick.
#[derive(Debug, Clone, Default)]
pub struct TelemetrySimulator {
    config: SimulatorConfig,
}

impl TelemetrySimulator {
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Advance every vehicle by one tick.
    ///
    /// Inactive vehicles pass through untouched, including their
    /// `last_updated` time. Total for well-formed input.
    pub fn advance<R: Rng + ?Sized>(
        &self,
        vehicles: &[Vehicle],
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Vec<Vehicle> {
        vehicles
            .iter()
            .map(|vehicle| self.advance_one(vehicle, rng, now))
            .collect()
    }

    fn advance_one<R: Rng + ?Sized>(
        &self,
        vehicle: &Vehicle,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Vehicle {
        if vehicle.status == VehicleStatus::Inactive {
            return vehicle.clone();
        }

        let c = &self.config;
        let mut next = vehicle.clone();
        next.position.lat += rng.random_range(-c.position_jitter_deg..=c.position_jitter_deg);
        next.position.lng += rng.random_range(-c.position_jitter_deg..=c.position_jitter_deg);
        next.battery = (next.battery - rng.random_range(0.0..=c.battery_drain_max)).clamp(0.0, 100.0);
        next.altitude_m =
            (next.altitude_m + rng.random_range(-c.altitude_jitter_m..=c.altitude_jitter_m)).max(0.0);
        next.speed_mps =
            (next.speed_mps + rng.random_range(-c.speed_jitter_mps..=c.speed_jitter_mps)).max(0.0);
        next.last_updated = now;
        next
    }
}
