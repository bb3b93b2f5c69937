//! Demo fleet loaded at startup.
//!
//! The console has no real telemetry source; the session starts from
//! this fixed fleet over Indonesia and the tick loop takes over from
//! there. Feed collections are ordered newest-first.

use chrono::{Duration, Utc};

use fleet_core::models::{
    ActivityLogEntry, Alert, AlertSeverity, Position, Vehicle, VehicleStatus, Zone, ZoneKind,
};

use crate::state::AppState;

pub fn load_demo_fleet(state: &AppState) {
    state.load(demo_vehicles(), demo_zones(), demo_alerts(), demo_logs());
}

pub fn demo_vehicles() -> Vec<Vehicle> {
    let now = Utc::now();
    vec![
        Vehicle {
            id: "01SUAV".to_string(),
            name: "DEPTEL 295".to_string(),
            model: "DJI Mavic 3".to_string(),
            status: VehicleStatus::Active,
            battery: 78.0,
            signal: 92.0,
            altitude_m: 120.0,
            speed_mps: 15.0,
            // Jakarta
            position: Position {
                lat: -6.1751,
                lng: 106.8650,
            },
            last_updated: now,
            video_feed: "https://feeds.example.com/01suav/live.mp4".to_string(),
        },
        Vehicle {
            id: "UAV-3023PM02".to_string(),
            name: "Elang Hitam".to_string(),
            model: "Autel EVO II".to_string(),
            status: VehicleStatus::Warning,
            battery: 32.0,
            signal: 85.0,
            altitude_m: 85.0,
            speed_mps: 12.0,
            // Yogyakarta
            position: Position {
                lat: -7.7956,
                lng: 110.3695,
            },
            last_updated: now,
            video_feed: "https://feeds.example.com/elang-hitam/live.mp4".to_string(),
        },
        Vehicle {
            id: "UAV-0SB94ZA81".to_string(),
            name: "UAV DID 3.11".to_string(),
            model: "Skydio 2".to_string(),
            status: VehicleStatus::Active,
            battery: 91.0,
            signal: 94.0,
            altitude_m: 150.0,
            speed_mps: 18.0,
            // Bali
            position: Position {
                lat: -8.6705,
                lng: 115.2126,
            },
            last_updated: now,
            video_feed: "https://feeds.example.com/did-311/live.mp4".to_string(),
        },
        Vehicle {
            id: "UAV-LS03210169".to_string(),
            name: "LAPAN LSU-03".to_string(),
            model: "Parrot Anafi".to_string(),
            status: VehicleStatus::Inactive,
            battery: 0.0,
            signal: 0.0,
            altitude_m: 0.0,
            speed_mps: 0.0,
            // Palembang
            position: Position {
                lat: -2.9901,
                lng: 104.7575,
            },
            last_updated: now - Duration::days(1),
            video_feed: "https://feeds.example.com/lsu-03/live.mp4".to_string(),
        },
    ]
}

pub fn demo_zones() -> Vec<Zone> {
    let now = Utc::now();
    vec![
        Zone {
            id: "fence-01".to_string(),
            name: "Jakarta No-Fly Zone".to_string(),
            kind: ZoneKind::Restricted,
            vertices: vec![
                [-6.1854, 106.8243],
                [-6.1954, 106.8443],
                [-6.1754, 106.8543],
                [-6.1654, 106.8343],
                [-6.1854, 106.8243],
            ],
            created_at: now - Duration::days(7),
            color: ZoneKind::Restricted.default_color().to_string(),
        },
        Zone {
            id: "fence-02".to_string(),
            name: "Yogyakarta Operational Area".to_string(),
            kind: ZoneKind::Operational,
            vertices: vec![
                [-7.7856, 110.3595],
                [-7.7956, 110.3795],
                [-7.7756, 110.3895],
                [-7.7656, 110.3695],
                [-7.7856, 110.3595],
            ],
            created_at: now - Duration::days(3),
            color: ZoneKind::Operational.default_color().to_string(),
        },
        Zone {
            id: "fence-03".to_string(),
            name: "Bali Tourism Zone".to_string(),
            kind: ZoneKind::Custom,
            vertices: vec![
                [-8.6605, 115.2026],
                [-8.6705, 115.2226],
                [-8.6505, 115.2326],
                [-8.6405, 115.2126],
                [-8.6605, 115.2026],
            ],
            created_at: now - Duration::days(1),
            color: ZoneKind::Custom.default_color().to_string(),
        },
    ]
}

fn demo_alerts() -> Vec<Alert> {
    let now = Utc::now();
    vec![
        Alert {
            id: "alert-01".to_string(),
            vehicle_id: Some("01SUAV".to_string()),
            severity: AlertSeverity::Warning,
            message: "Approaching restricted area: Jakarta No-Fly Zone".to_string(),
            timestamp: now - Duration::minutes(5),
            acknowledged: false,
        },
        Alert {
            id: "alert-02".to_string(),
            vehicle_id: Some("UAV-3023PM02".to_string()),
            severity: AlertSeverity::Error,
            message: "Critical battery level: 15% remaining".to_string(),
            timestamp: now - Duration::minutes(10),
            acknowledged: true,
        },
        Alert {
            id: "alert-03".to_string(),
            vehicle_id: Some("UAV-0SB94ZA81".to_string()),
            severity: AlertSeverity::Info,
            message: "Surveillance operation completed".to_string(),
            timestamp: now - Duration::minutes(30),
            acknowledged: true,
        },
        Alert {
            id: "alert-04".to_string(),
            vehicle_id: Some("UAV-LS03210169".to_string()),
            severity: AlertSeverity::Error,
            message: "Connection lost with LAPAN LSU-03".to_string(),
            timestamp: now - Duration::days(1),
            acknowledged: true,
        },
    ]
}

fn demo_logs() -> Vec<ActivityLogEntry> {
    let now = Utc::now();
    vec![
        ActivityLogEntry::new(
            "UAV-3023PM02",
            "BATTERY_WARNING",
            "Battery level reached 32%",
            Some(Position {
                lat: -7.7956,
                lng: 110.3695,
            }),
            now - Duration::minutes(30),
        ),
        ActivityLogEntry::new(
            "UAV-0SB94ZA81",
            "AREA_CHANGE",
            "Entered Bali Tourism Zone",
            Some(Position {
                lat: -8.6705,
                lng: 115.2126,
            }),
            now - Duration::minutes(45),
        ),
        ActivityLogEntry::new(
            "01SUAV",
            "ALTITUDE_CHANGE",
            "Ascended to 120m",
            Some(Position {
                lat: -6.1751,
                lng: 106.8650,
            }),
            now - Duration::minutes(55),
        ),
        ActivityLogEntry::new(
            "01SUAV",
            "TAKEOFF",
            "Initiated from Jakarta Control Center",
            Some(Position {
                lat: -6.1751,
                lng: 106.8650,
            }),
            now - Duration::hours(1),
        ),
        ActivityLogEntry::new(
            "UAV-LS03210169",
            "CONNECTION_LOST",
            "Signal lost near Palembang",
            Some(Position {
                lat: -2.9901,
                lng: 104.7575,
            }),
            now - Duration::days(1),
        ),
    ]
}
