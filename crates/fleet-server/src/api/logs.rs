//! Activity log endpoint.

use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use fleet_core::models::ActivityLogEntry;

use crate::state::AppState;

/// List the activity log, newest first.
pub async fn list_logs(State(state): State<Arc<AppState>>) -> Json<Vec<ActivityLogEntry>> {
    Json(state.logs())
}
