//! Simulation tick loop.
//!
//! Drives the pipeline at a fixed period: advance telemetry, evaluate
//! alert rules, append the results to the feed, publish the snapshot.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::broadcast;
use tokio::time::interval;

use fleet_core::models::ActivityLogEntry;
use fleet_core::rules::{AlertRuleEngine, RuleThresholds};
use fleet_core::sim::TelemetrySimulator;

use crate::config::Config;
use crate::state::AppState;

/// Handle for the running tick loop.
///
/// Holds nothing beyond the shutdown channel: all simulation state
/// lives in `AppState` and the spawned task.
pub struct TickScheduler {
    shutdown: Option<broadcast::Sender<()>>,
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TickScheduler {
    pub fn new() -> Self {
        Self { shutdown: None }
    }

    /// Spawn the tick loop. Starting an already-running scheduler is a
    /// caller error.
    pub fn start(&mut self, state: Arc<AppState>, config: &Config) -> Result<()> {
        if self.shutdown.is_some() {
            bail!("tick scheduler already running");
        }
        let (tx, rx) = broadcast::channel(1);
        tokio::spawn(run_tick_loop(state, config.clone(), rx));
        self.shutdown = Some(tx);
        Ok(())
    }

    /// Stop the loop. Completed ticks stay applied; no tick runs after
    /// the shutdown signal is observed, and a tick can never be torn
    /// mid-append (see `run_tick`).
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }

    pub fn is_running(&self) -> bool {
        self.shutdown.is_some()
    }
}

pub async fn run_tick_loop(
    state: Arc<AppState>,
    config: Config,
    mut shutdown: broadcast::Receiver<()>,
) {
    let mut ticker = interval(Duration::from_millis(config.tick_interval_ms));
    let simulator = TelemetrySimulator::default();
    let mut engine = AlertRuleEngine::new(
        RuleThresholds::default(),
        config.containment,
        config.suppress_repeat_alerts,
    );
    let mut rng: StdRng = match config.sim_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    loop {
        tokio::select! {
            _ = shutdown.recv() => {
                tracing::info!("Tick loop shutting down");
                break;
            }
            _ = ticker.tick() => {
                run_tick(&state, &simulator, &mut engine, &mut rng);
            }
        }
    }
}

/// One tick: simulate, evaluate, append, publish.
///
/// Synchronous with no await point, so a cancelled task can never
/// leave a half-applied tick.
pub fn run_tick<R: Rng>(
    state: &AppState,
    simulator: &TelemetrySimulator,
    engine: &mut AlertRuleEngine,
    rng: &mut R,
) {
    let now = Utc::now();
    let vehicles = simulator.advance(&state.vehicles(), rng, now);
    let zones = state.zones();
    let alerts = engine.evaluate(&vehicles, &zones, now);

    if !alerts.is_empty() {
        tracing::warn!("Tick raised {} alert(s)", alerts.len());
        let logs: Vec<ActivityLogEntry> = alerts
            .iter()
            .map(|alert| {
                let position = alert
                    .vehicle_id
                    .as_deref()
                    .and_then(|id| vehicles.iter().find(|v| v.id == id))
                    .map(|v| v.position);
                ActivityLogEntry::new(
                    alert.vehicle_id.clone().unwrap_or_default(),
                    alert.severity.log_action(),
                    alert.message.clone(),
                    position,
                    now,
                )
            })
            .collect();
        state.append_tick_results(alerts, logs);
    }

    state.publish_vehicles(vehicles);
}
