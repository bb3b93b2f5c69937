//! Alert feed endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use fleet_core::models::{ActivityLogEntry, Alert};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AlertListResponse {
    /// Newest first
    pub alerts: Vec<Alert>,
    /// Count shown on the console's alert badge
    pub unacknowledged: usize,
}

pub async fn list_alerts(State(state): State<Arc<AppState>>) -> Json<AlertListResponse> {
    Json(AlertListResponse {
        unacknowledged: state.unacknowledged_alerts(),
        alerts: state.alerts(),
    })
}

/// Acknowledge an alert and record the operator action.
pub async fn acknowledge_alert(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Alert>, StatusCode> {
    let alert = state.acknowledge(&id).map_err(|_| StatusCode::NOT_FOUND)?;

    // The store does not link these itself; the acknowledged alert and
    // its audit entry are coordinated here.
    state.append_log(ActivityLogEntry::new(
        alert.vehicle_id.clone().unwrap_or_default(),
        "ALERT_ACKNOWLEDGED",
        format!("Alert acknowledged: {}", alert.message),
        None,
        Utc::now(),
    ));
    tracing::info!("Alert {} acknowledged", alert.id);

    Ok(Json(alert))
}
