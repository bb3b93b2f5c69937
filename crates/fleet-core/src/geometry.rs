//! Containment tests for vehicle positions against zone polygons.
//!
//! The console's reference behavior approximates containment with the
//! polygon's axis-aligned bounding rectangle. Ray casting is available
//! behind the same call for exact point-in-polygon checks.

use serde::{Deserialize, Serialize};

use crate::models::{Position, Zone};

/// Containment strategy for zone checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Containment {
    /// Axis-aligned bounding rectangle of the vertices (default)
    #[default]
    BoundingBox,
    /// Exact point-in-polygon via ray casting
    RayCast,
}

/// Axis-aligned bounding rectangle of a polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Compute the bounding rectangle of a vertex list.
    pub fn of(vertices: &[[f64; 2]]) -> Self {
        vertices.iter().fold(
            Self {
                min_lat: 90.0,
                max_lat: -90.0,
                min_lng: 180.0,
                max_lng: -180.0,
            },
            |acc, [lat, lng]| Self {
                min_lat: acc.min_lat.min(*lat),
                max_lat: acc.max_lat.max(*lat),
                min_lng: acc.min_lng.min(*lng),
                max_lng: acc.max_lng.max(*lng),
            },
        )
    }

    /// Closed-interval containment test.
    pub fn contains(&self, p: Position) -> bool {
        p.lat >= self.min_lat && p.lat <= self.max_lat && p.lng >= self.min_lng && p.lng <= self.max_lng
    }
}

/// Check whether a position falls inside a zone under the given strategy.
///
/// Zones with fewer than 3 vertices are rejected at creation time and
/// never reach this check.
pub fn zone_contains(zone: &Zone, position: Position, strategy: Containment) -> bool {
    match strategy {
        Containment::BoundingBox => BoundingBox::of(&zone.vertices).contains(position),
        Containment::RayCast => ray_cast_contains(&zone.vertices, position),
    }
}

/// Ray casting: count intersections with polygon edges.
fn ray_cast_contains(vertices: &[[f64; 2]], p: Position) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let yi = vertices[i][0];
        let xi = vertices[i][1];
        let yj = vertices[j][0];
        let xj = vertices[j][1];

        if ((yi > p.lat) != (yj > p.lat)) && (p.lng < (xj - xi) * (p.lat - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ZoneKind;
    use chrono::Utc;

    fn diamond() -> Vec<[f64; 2]> {
        // Diamond centered on (0, 0) with "radius" 1 degree
        vec![[1.0, 0.0], [0.0, 1.0], [-1.0, 0.0], [0.0, -1.0]]
    }

    fn zone(vertices: Vec<[f64; 2]>) -> Zone {
        Zone {
            id: "z1".to_string(),
            name: "Test Zone".to_string(),
            kind: ZoneKind::Restricted,
            vertices,
            created_at: Utc::now(),
            color: "#F85149".to_string(),
        }
    }

    #[test]
    fn bounding_box_contains_center_and_edges() {
        let bbox = BoundingBox::of(&diamond());
        assert!(bbox.contains(Position { lat: 0.0, lng: 0.0 }));
        // Closed comparison: the boundary counts as inside
        assert!(bbox.contains(Position { lat: 1.0, lng: 1.0 }));
        assert!(!bbox.contains(Position { lat: 1.0001, lng: 0.0 }));
    }

    #[test]
    fn bounding_box_is_vertex_order_independent() {
        let mut reordered = diamond();
        reordered.rotate_left(2);
        reordered.swap(0, 1);
        assert_eq!(BoundingBox::of(&diamond()), BoundingBox::of(&reordered));
    }

    #[test]
    fn ray_cast_excludes_bounding_box_corners() {
        let z = zone(diamond());
        let corner = Position { lat: 0.9, lng: 0.9 };
        // Inside the rectangle but outside the diamond
        assert!(zone_contains(&z, corner, Containment::BoundingBox));
        assert!(!zone_contains(&z, corner, Containment::RayCast));
        // Center is inside under both strategies
        let center = Position { lat: 0.0, lng: 0.0 };
        assert!(zone_contains(&z, center, Containment::BoundingBox));
        assert!(zone_contains(&z, center, Containment::RayCast));
    }

    #[test]
    fn closed_ring_matches_open_ring() {
        let mut closed = diamond();
        closed.push(closed[0]);
        let p = Position { lat: 0.2, lng: -0.3 };
        assert_eq!(
            zone_contains(&zone(diamond()), p, Containment::RayCast),
            zone_contains(&zone(closed.clone()), p, Containment::RayCast),
        );
        assert_eq!(BoundingBox::of(&diamond()), BoundingBox::of(&closed));
    }
}
