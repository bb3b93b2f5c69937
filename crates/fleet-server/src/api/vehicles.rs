//! Vehicle snapshot endpoint.

use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use fleet_core::models::Vehicle;

use crate::state::AppState;

/// List the current vehicle snapshot.
pub async fn list_vehicles(State(state): State<Arc<AppState>>) -> Json<Vec<Vehicle>> {
    Json(state.vehicles())
}
