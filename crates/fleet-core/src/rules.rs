//! Alert rules evaluated against the live vehicle and zone sets.
//!
//! Two rules run independently per vehicle each tick: low battery
//! (status-guarded) and restricted-zone containment (deliberately not
//! status-guarded, matching the reference console). By default a
//! condition re-emits an alert on every tick while it holds;
//! `suppress_repeats` turns that into emit-once-until-cleared.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::geometry::{zone_contains, Containment};
use crate::models::{Alert, AlertSeverity, Vehicle, VehicleStatus, Zone, ZoneKind};

/// Thresholds for rule evaluation.
#[derive(Debug, Clone)]
pub struct RuleThresholds {
    /// Battery level below which a low-battery warning fires
    pub low_battery_pct: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            low_battery_pct: 20.0,
        }
    }
}

/// Evaluates alert rules once per tick.
#[derive(Debug, Clone, Default)]
pub struct AlertRuleEngine {
    thresholds: RuleThresholds,
    containment: Containment,
    suppress_repeats: bool,
    /// Condition keys that held on the previous evaluation
    active: HashSet<String>,
}

impl AlertRuleEngine {
    pub fn new(thresholds: RuleThresholds, containment: Containment, suppress_repeats: bool) -> Self {
        Self {
            thresholds,
            containment,
            suppress_repeats,
            active: HashSet::new(),
        }
    }

    /// Evaluate all rules against the current snapshot.
    ///
    /// Every returned alert is unacknowledged and stamped with `now`.
    /// Alert ids are freshly generated, so repeated conditions never
    /// collide within or across ticks.
    pub fn evaluate(&mut self, vehicles: &[Vehicle], zones: &[Zone], now: DateTime<Utc>) -> Vec<Alert> {
        let mut alerts = Vec::new();
        let mut holding = HashSet::new();

        for vehicle in vehicles {
            if vehicle.status != VehicleStatus::Inactive
                && vehicle.battery < self.thresholds.low_battery_pct
            {
                let key = format!("battery:{}", vehicle.id);
                if self.should_emit(&key, &mut holding) {
                    alerts.push(Alert::new(
                        Some(vehicle.id.clone()),
                        AlertSeverity::Warning,
                        format!("Low battery alert: {} at {:.0}%", vehicle.name, vehicle.battery),
                        now,
                    ));
                }
            }

            // No status guard here: the reference console flags inactive
            // vehicles inside restricted zones too.
            for zone in zones.iter().filter(|z| z.kind == ZoneKind::Restricted) {
                if zone_contains(zone, vehicle.position, self.containment) {
                    let key = format!("geofence:{}:{}", vehicle.id, zone.id);
                    if self.should_emit(&key, &mut holding) {
                        alerts.push(Alert::new(
                            Some(vehicle.id.clone()),
                            AlertSeverity::Error,
                            format!("Geofence violation: {} entered {}", vehicle.name, zone.name),
                            now,
                        ));
                    }
                }
            }
        }

        // A condition stays suppressed while it holds and re-arms once it clears.
        self.active = holding;
        alerts
    }

    fn should_emit(&self, key: &str, holding: &mut HashSet<String>) -> bool {
        holding.insert(key.to_string());
        !self.suppress_repeats || !self.active.contains(key)
    }
}
