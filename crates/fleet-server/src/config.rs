//! Server configuration from environment.

use std::env;

use fleet_core::geometry::Containment;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    /// Tick period for the simulation loop, milliseconds
    pub tick_interval_ms: u64,
    /// Containment strategy for geofence checks
    pub containment: Containment,
    /// Emit each alert condition once until it clears, instead of
    /// re-emitting on every tick
    pub suppress_repeat_alerts: bool,
    /// Seed for the telemetry RNG; OS-seeded when unset
    pub sim_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("FLEET_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            tick_interval_ms: env::var("FLEET_TICK_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5000),
            containment: match env::var("FLEET_CONTAINMENT").as_deref() {
                Ok("ray_cast") => Containment::RayCast,
                _ => Containment::BoundingBox,
            },
            suppress_repeat_alerts: env::var("FLEET_SUPPRESS_REPEAT_ALERTS")
                .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            sim_seed: env::var("FLEET_SIM_SEED").ok().and_then(|s| s.parse().ok()),
        }
    }
}
