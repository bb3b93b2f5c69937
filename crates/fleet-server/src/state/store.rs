//! In-memory state for the operator console.
//!
//! The tick loop is the sole writer of vehicle state. Alerts and the
//! activity log live behind a single mutex so a tick's alert batch and
//! its derived log entries append as one unit, and acknowledgement
//! cannot interleave with an in-flight append.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock};

use tokio::sync::broadcast;

use fleet_core::models::{ActivityLogEntry, Alert, Vehicle, Zone};
use fleet_core::FleetError;

const SNAPSHOT_CHANNEL_CAPACITY: usize = 16;

/// Application state shared between the tick loop and the API.
pub struct AppState {
    vehicles: RwLock<Vec<Vehicle>>,
    zones: RwLock<Vec<Zone>>,
    feed: Mutex<Feed>,
    /// Latest vehicle snapshot, published after every tick
    snapshots: broadcast::Sender<Vec<Vehicle>>,
}

/// Alert and activity-log collections, newest-first.
#[derive(Default)]
struct Feed {
    alerts: VecDeque<Alert>,
    logs: VecDeque<ActivityLogEntry>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let (snapshots, _) = broadcast::channel(SNAPSHOT_CHANNEL_CAPACITY);
        Self {
            vehicles: RwLock::new(Vec::new()),
            zones: RwLock::new(Vec::new()),
            feed: Mutex::new(Feed::default()),
            snapshots,
        }
    }

    /// Install the initial session state.
    pub fn load(
        &self,
        vehicles: Vec<Vehicle>,
        zones: Vec<Zone>,
        alerts: Vec<Alert>,
        logs: Vec<ActivityLogEntry>,
    ) {
        *self.vehicles_mut() = vehicles;
        *self.zones_mut() = zones;
        let mut feed = self.feed();
        feed.alerts = alerts.into();
        feed.logs = logs.into();
    }

    /// Current vehicle snapshot.
    pub fn vehicles(&self) -> Vec<Vehicle> {
        self.vehicles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the vehicle snapshot and notify stream subscribers.
    pub fn publish_vehicles(&self, vehicles: Vec<Vehicle>) {
        *self.vehicles_mut() = vehicles.clone();
        // Nobody listening is fine
        let _ = self.snapshots.send(vehicles);
    }

    pub fn subscribe_snapshots(&self) -> broadcast::Receiver<Vec<Vehicle>> {
        self.snapshots.subscribe()
    }

    pub fn zones(&self) -> Vec<Zone> {
        self.zones
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn add_zone(&self, zone: Zone) {
        self.zones_mut().push(zone);
    }

    /// Alerts, newest first.
    pub fn alerts(&self) -> Vec<Alert> {
        self.feed().alerts.iter().cloned().collect()
    }

    pub fn unacknowledged_alerts(&self) -> usize {
        self.feed().alerts.iter().filter(|a| !a.acknowledged).count()
    }

    /// Activity log, newest first. Entries sharing a timestamp keep
    /// their insertion order.
    pub fn logs(&self) -> Vec<ActivityLogEntry> {
        self.feed().logs.iter().cloned().collect()
    }

    /// Append a tick's alert batch and its derived log entries as one
    /// unit. Both land at the head of their collections with batch
    /// order preserved.
    pub fn append_tick_results(&self, alerts: Vec<Alert>, logs: Vec<ActivityLogEntry>) {
        let mut feed = self.feed();
        for alert in alerts.into_iter().rev() {
            feed.alerts.push_front(alert);
        }
        for entry in logs.into_iter().rev() {
            feed.logs.push_front(entry);
        }
    }

    /// Append a single operator-action log entry.
    pub fn append_log(&self, entry: ActivityLogEntry) {
        self.feed().logs.push_front(entry);
    }

    /// Mark an alert acknowledged and return its updated copy.
    ///
    /// Idempotent on the flag; no other field changes. The caller is
    /// responsible for recording the matching ALERT_ACKNOWLEDGED
    /// activity entry.
    pub fn acknowledge(&self, alert_id: &str) -> Result<Alert, FleetError> {
        let mut feed = self.feed();
        match feed.alerts.iter_mut().find(|a| a.id == alert_id) {
            Some(alert) => {
                alert.acknowledged = true;
                Ok(alert.clone())
            }
            None => Err(FleetError::AlertNotFound(alert_id.to_string())),
        }
    }

    fn feed(&self) -> MutexGuard<'_, Feed> {
        self.feed.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn vehicles_mut(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Vehicle>> {
        self.vehicles.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn zones_mut(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Zone>> {
        self.zones.write().unwrap_or_else(PoisonError::into_inner)
    }
}
