//! Zone authoring endpoints.
//!
//! Zones are validated here so the containment check never sees a
//! degenerate polygon.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use fleet_core::models::{ActivityLogEntry, CreateZoneRequest, Zone};

use crate::state::AppState;

/// List all zones.
pub async fn list_zones(State(state): State<Arc<AppState>>) -> Json<Vec<Zone>> {
    Json(state.zones())
}

/// Create a new zone.
pub async fn create_zone(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateZoneRequest>,
) -> Result<(StatusCode, Json<Zone>), (StatusCode, Json<serde_json::Value>)> {
    let zone = Zone {
        id: Uuid::new_v4().to_string(),
        name: req.name,
        kind: req.kind,
        vertices: req.vertices,
        created_at: Utc::now(),
        color: req
            .color
            .unwrap_or_else(|| req.kind.default_color().to_string()),
    };

    let errors = zone.validate();
    if !errors.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "errors": errors })),
        ));
    }

    state.append_log(ActivityLogEntry::new(
        String::new(),
        "GEO_FENCE_CREATED",
        format!(
            "New {} geo-fence created: {}",
            zone.kind.as_str(),
            zone.name
        ),
        None,
        Utc::now(),
    ));
    state.add_zone(zone.clone());
    tracing::info!("Created zone '{}' ({})", zone.name, zone.id);

    Ok((StatusCode::CREATED, Json(zone)))
}
