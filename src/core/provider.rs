//! Routing provider integration
//!
//! The core only consumes the polyline of a successful response; travel
//! times, turn instructions and anything else the provider returns are
//! ignored.

use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;

use crate::core::error::{Error, Result};
use crate::core::geo::{GeoPoint, RoutePolyline};

/// Public demo endpoint. Override for self-hosted deployments and tests.
pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";

/// Global HTTP client shared by all providers
static GLOBAL_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .tcp_keepalive(Duration::from_secs(60))
        .pool_idle_timeout(Duration::from_secs(90))
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(format!("routeguard/{}", env!("ROUTEGUARD_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

/// Travel mode requested from the routing provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TravelProfile {
    #[default]
    Walking,
    Driving,
}

impl TravelProfile {
    /// OSRM profile path segment.
    pub fn as_osrm_profile(&self) -> &'static str {
        match self {
            TravelProfile::Walking => "walking",
            TravelProfile::Driving => "driving",
        }
    }
}

/// An external collaborator that turns two waypoints into a path.
pub trait RouteProvider: Send + Sync {
    /// Request a route from `start` to `end` and return its polyline.
    fn route(&self, start: GeoPoint, end: GeoPoint) -> BoxFuture<'_, Result<RoutePolyline>>;
}

#[derive(Deserialize)]
struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
}

#[derive(Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

/// OSRM HTTP routing provider.
#[derive(Debug, Clone)]
pub struct OsrmProvider {
    base_url: String,
    profile: TravelProfile,
}

impl Default for OsrmProvider {
    fn default() -> Self {
        Self::new(DEFAULT_OSRM_URL, TravelProfile::default())
    }
}

impl OsrmProvider {
    pub fn new(base_url: impl Into<String>, profile: TravelProfile) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, profile }
    }

    fn route_url(&self, start: GeoPoint, end: GeoPoint) -> String {
        // OSRM takes lon,lat pairs; the GeoJSON it returns is lon,lat too.
        format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?overview=full&geometries=geojson&alternatives=false&steps=false",
            self.base_url,
            self.profile.as_osrm_profile(),
            start.longitude,
            start.latitude,
            end.longitude,
            end.latitude,
        )
    }

    async fn request_route(&self, start: GeoPoint, end: GeoPoint) -> Result<RoutePolyline> {
        let url = self.route_url(start, end);
        log::debug!("requesting route: {url}");

        let response = GLOBAL_CLIENT.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            return Err(Error::HttpError(format!("route request failed: {status}")));
        }

        let body: OsrmRouteResponse = response.json().await?;
        if body.code != "Ok" {
            let reason = body.message.unwrap_or(body.code);
            return Err(Error::RouteUnavailable(reason));
        }

        let route = body
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| Error::RouteUnavailable("provider returned no routes".to_string()))?;

        let points: Vec<GeoPoint> = route
            .geometry
            .coordinates
            .iter()
            .map(|&[lon, lat]| GeoPoint::new(lat, lon))
            .collect();

        if points.len() < 2 {
            return Err(Error::DegenerateRoute(points.len()));
        }

        Ok(RoutePolyline::new(points))
    }
}

impl RouteProvider for OsrmProvider {
    fn route(&self, start: GeoPoint, end: GeoPoint) -> BoxFuture<'_, Result<RoutePolyline>> {
        self.request_route(start, end).boxed()
    }
}
