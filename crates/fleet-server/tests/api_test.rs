//! In-process API tests against the seeded demo fleet.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use fleet_server::state::AppState;
use fleet_server::{api, seed};

fn setup_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new());
    seed::load_demo_fleet(&state);
    let app = api::routes().with_state(state.clone());
    (app, state)
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("parse json")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn lists_the_seeded_fleet() {
    let (app, _state) = setup_app();

    let res = app.oneshot(get("/v1/vehicles")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let vehicles = read_json(res).await;
    assert_eq!(vehicles.as_array().unwrap().len(), 4);
    let names: Vec<_> = vehicles
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap().to_string())
        .collect();
    assert!(names.contains(&"DEPTEL 295".to_string()));
}

#[tokio::test]
async fn alert_listing_reports_unacknowledged_count() {
    let (app, _state) = setup_app();

    let res = app.oneshot(get("/v1/alerts")).await.unwrap();
    let body = read_json(res).await;
    assert_eq!(body["alerts"].as_array().unwrap().len(), 4);
    // Only alert-01 starts unacknowledged in the demo feed
    assert_eq!(body["unacknowledged"].as_u64(), Some(1));
    assert_eq!(body["alerts"][0]["id"].as_str(), Some("alert-01"));
}

#[tokio::test]
async fn acknowledging_an_alert_records_an_audit_entry() {
    let (app, state) = setup_app();
    let logs_before = state.logs().len();

    let res = app
        .clone()
        .oneshot(post_empty("/v1/alerts/alert-01/acknowledge"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let alert = read_json(res).await;
    assert_eq!(alert["acknowledged"].as_bool(), Some(true));

    let logs = state.logs();
    assert_eq!(logs.len(), logs_before + 1);
    assert_eq!(logs[0].action, "ALERT_ACKNOWLEDGED");
    assert!(logs[0].details.contains("Approaching restricted area"));

    // Second acknowledge keeps the flag set and everything else intact
    let res = app
        .oneshot(post_empty("/v1/alerts/alert-01/acknowledge"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let again = read_json(res).await;
    assert_eq!(again["acknowledged"].as_bool(), Some(true));
    assert_eq!(again["message"], alert["message"]);
    assert_eq!(again["timestamp"], alert["timestamp"]);
}

#[tokio::test]
async fn acknowledging_an_unknown_alert_is_not_found() {
    let (app, _state) = setup_app();

    let res = app
        .oneshot(post_empty("/v1/alerts/no-such-alert/acknowledge"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn creates_a_zone_and_logs_the_action() {
    let (app, state) = setup_app();

    let res = app
        .clone()
        .oneshot(post_json(
            "/v1/zones",
            json!({
                "name": "Surabaya Harbor Exclusion",
                "kind": "restricted",
                "vertices": [
                    [-7.19, 112.72],
                    [-7.21, 112.74],
                    [-7.18, 112.76]
                ]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let zone = read_json(res).await;
    assert_eq!(zone["kind"].as_str(), Some("restricted"));
    // Default legend color for restricted zones
    assert_eq!(zone["color"].as_str(), Some("#F85149"));

    assert_eq!(state.zones().len(), 4);
    let logs = state.logs();
    assert_eq!(logs[0].action, "GEO_FENCE_CREATED");
    assert!(logs[0].details.contains("Surabaya Harbor Exclusion"));

    let res = app.oneshot(get("/v1/zones")).await.unwrap();
    let zones = read_json(res).await;
    assert_eq!(zones.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn rejects_a_degenerate_zone() {
    let (app, state) = setup_app();

    let res = app
        .oneshot(post_json(
            "/v1/zones",
            json!({
                "name": "Too Thin",
                "kind": "custom",
                "vertices": [[-7.19, 112.72], [-7.21, 112.74]]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json(res).await;
    assert!(body["errors"][0]
        .as_str()
        .unwrap()
        .contains("at least 3 vertices"));
    assert_eq!(state.zones().len(), 3);
}
