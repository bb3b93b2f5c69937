pub mod error;
pub mod geometry;
pub mod models;
pub mod rules;
pub mod sim;

pub use error::FleetError;
pub use geometry::{zone_contains, BoundingBox, Containment};
pub use models::{
    ActivityLogEntry, Alert, AlertSeverity, CreateZoneRequest, Position, Vehicle, VehicleStatus,
    Zone, ZoneKind,
};
pub use rules::{AlertRuleEngine, RuleThresholds};
pub use sim::{SimulatorConfig, TelemetrySimulator};
