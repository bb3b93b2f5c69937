//! API routes for the fleet console server.
//!
//! This is the presentation boundary: the console UI reads vehicle,
//! alert, zone, and log snapshots here and sends back the two operator
//! actions the core accepts (acknowledge alert, create zone).

pub mod alerts;
pub mod logs;
pub mod vehicles;
pub mod ws;
pub mod zones;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// Create the API router.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/vehicles", get(vehicles::list_vehicles))
        .route("/v1/alerts", get(alerts::list_alerts))
        .route("/v1/alerts/:id/acknowledge", post(alerts::acknowledge_alert))
        .route("/v1/logs", get(logs::list_logs))
        .route("/v1/zones", get(zones::list_zones).post(zones::create_zone))
}
