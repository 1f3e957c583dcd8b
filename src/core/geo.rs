//! Geographic primitives for routeguard
//!
//! Provides the point and polyline types shared across the crate and the
//! great-circle distance used for proximity checks.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters (spherical model).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both coordinates are finite and inside the valid
    /// latitude/longitude ranges.
    ///
    /// Distance math performs no validation of its own; input boundaries
    /// (CLI parsing, provider responses) are expected to check this and
    /// report `Error::InvalidCoordinate`.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Ordered sequence of points approximating a route path, in traversal
/// order. Read-only once produced by the routing provider.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePolyline {
    points: Vec<GeoPoint>,
}

impl RoutePolyline {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A usable route needs at least two vertices.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }
}

/// Great-circle distance in meters between two points, via the haversine
/// formula on a spherical Earth.
///
/// Adequate for thresholds on the order of meters to kilometers; not
/// suitable for geodetic survey precision.
pub fn haversine_distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}
