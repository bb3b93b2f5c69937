//! Core data models for the fleet console.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    /// Normal operation
    #[default]
    Active,
    /// Landed/parked; telemetry frozen
    Inactive,
    /// Operating with a degraded condition (e.g. low battery)
    Warning,
    /// Fault condition
    Error,
}

/// Telemetry state of a monitored aerial vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub model: String,
    pub status: VehicleStatus,
    /// Battery level, 0-100
    pub battery: f64,
    /// Signal strength, 0-100
    pub signal: f64,
    pub altitude_m: f64,
    pub speed_mps: f64,
    pub position: Position,
    pub last_updated: DateTime<Utc>,
    /// Opaque reference to the vehicle's live video feed
    pub video_feed: String,
}

/// Enforcement kind of a geofence zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    /// Entering triggers an error alert
    Restricted,
    /// Designated operating area (not enforced)
    Operational,
    /// Operator-defined, advisory only
    Custom,
}

impl ZoneKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneKind::Restricted => "restricted",
            ZoneKind::Operational => "operational",
            ZoneKind::Custom => "custom",
        }
    }

    /// Display color used by the console map legend.
    pub fn default_color(&self) -> &'static str {
        match self {
            ZoneKind::Restricted => "#F85149",
            ZoneKind::Operational => "#3FB950",
            ZoneKind::Custom => "#58A6FF",
        }
    }
}

/// A named polygonal geofence. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub kind: ZoneKind,
    /// Polygon vertices as [lat, lng] pairs (implicitly closed)
    pub vertices: Vec<[f64; 2]>,
    pub created_at: DateTime<Utc>,
    pub color: String,
}

impl Zone {
    /// Validate zone configuration.
    /// Returns list of validation errors (empty = valid).
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.vertices.len() < 3 {
            errors.push("Polygon must have at least 3 vertices".to_string());
        }

        for [lat, lng] in &self.vertices {
            if !lat.is_finite() || !lng.is_finite() {
                errors.push("Vertex coordinates must be finite".to_string());
                break;
            }
            if !(-90.0..=90.0).contains(lat) || !(-180.0..=180.0).contains(lng) {
                errors.push(format!("Vertex out of range: [{lat}, {lng}]"));
                break;
            }
        }

        errors
    }

    /// Check if the zone is valid.
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Request to create a new zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateZoneRequest {
    pub name: String,
    pub kind: ZoneKind,
    pub vertices: Vec<[f64; 2]>,
    /// Defaults to the kind's legend color when omitted
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Error,
}

impl AlertSeverity {
    /// Activity-log action tag synthesized for an alert of this severity.
    pub fn log_action(&self) -> &'static str {
        match self {
            AlertSeverity::Error => "ERROR",
            AlertSeverity::Warning | AlertSeverity::Info => "WARNING",
        }
    }
}

/// A generated notification of a threshold or containment violation.
///
/// Only `acknowledged` may change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    #[serde(default)]
    pub vehicle_id: Option<String>,
    pub severity: AlertSeverity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub acknowledged: bool,
}

impl Alert {
    /// Create an unacknowledged alert with a fresh id.
    pub fn new(
        vehicle_id: Option<String>,
        severity: AlertSeverity,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            vehicle_id,
            severity,
            message: message.into(),
            timestamp,
            acknowledged: false,
        }
    }
}

/// Immutable audit record of a system or operator event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub id: String,
    pub vehicle_id: String,
    /// Free-form action tag (TAKEOFF, BATTERY_WARNING, ALERT_ACKNOWLEDGED, ...)
    pub action: String,
    pub details: String,
    #[serde(default)]
    pub position: Option<Position>,
    pub timestamp: DateTime<Utc>,
}

impl ActivityLogEntry {
    pub fn new(
        vehicle_id: impl Into<String>,
        action: impl Into<String>,
        details: impl Into<String>,
        position: Option<Position>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            vehicle_id: vehicle_id.into(),
            action: action.into(),
            details: details.into(),
            position,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(vertices: Vec<[f64; 2]>) -> Zone {
        Zone {
            id: "z1".to_string(),
            name: "Test Zone".to_string(),
            kind: ZoneKind::Restricted,
            vertices,
            created_at: Utc::now(),
            color: ZoneKind::Restricted.default_color().to_string(),
        }
    }

    #[test]
    fn zone_with_three_vertices_is_valid() {
        let z = zone(vec![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0]]);
        assert!(z.is_valid());
    }

    #[test]
    fn degenerate_zone_is_rejected() {
        let z = zone(vec![[0.0, 0.0], [1.0, 1.0]]);
        let errors = z.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("at least 3"));
    }

    #[test]
    fn out_of_range_vertex_is_rejected() {
        let z = zone(vec![[0.0, 0.0], [95.0, 1.0], [1.0, 0.0]]);
        assert!(!z.is_valid());
    }
}
