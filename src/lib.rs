//! # Routeguard
//!
//! Route-hazard correlation engine: computes a walking or driving route
//! between two points through an external routing provider and flags
//! user-reported hazards that lie close to the returned path, so the
//! traveler is warned before departure.
//!
//! The crate exposes two entry points:
//!
//! - [`check_route`] / [`check_route_with_options`] for a one-shot
//!   request-and-correlate call;
//! - [`RouteSession`] for the event-driven flow a UI needs, with endpoint
//!   slots, lifecycle states and stale-response suppression when endpoints
//!   change mid-request.
//!
//! ```no_run
//! use routeguard::{check_route, GeoPoint};
//!
//! # async fn example() -> routeguard::Result<()> {
//! let start = GeoPoint::new(52.5200, 13.4050);
//! let end = GeoPoint::new(52.5300, 13.4200);
//! let alerts = check_route(start, end, &[]).await?;
//! for alert in alerts {
//!     eprintln!("{} near the route", alert.hazard.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;

pub use crate::core::error::{Error, Result};
pub use crate::core::geo::{haversine_distance_m, GeoPoint, RoutePolyline, EARTH_RADIUS_M};
pub use crate::core::hazard::{HazardKind, HazardReport, Severity};
pub use crate::core::matcher::{
    find_hazards_near_route, MatchResult, DEFAULT_PROXIMITY_THRESHOLD_M,
};
pub use crate::core::provider::{OsrmProvider, RouteProvider, TravelProfile, DEFAULT_OSRM_URL};
pub use crate::core::selection::{NamedLocation, SelectionFlow};
pub use crate::core::session::{RouteEvent, RouteSession, SessionOptions, SessionState};

/// Options for [`check_route_with_options`].
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Distance below which a hazard counts as "on" the route, in meters.
    pub threshold_m: f64,

    /// Travel mode requested from the provider.
    pub profile: TravelProfile,

    /// Base URL of the OSRM routing service.
    pub osrm_url: String,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            threshold_m: DEFAULT_PROXIMITY_THRESHOLD_M,
            profile: TravelProfile::default(),
            osrm_url: DEFAULT_OSRM_URL.to_string(),
        }
    }
}

/// One-shot convenience: request a route and correlate it against
/// `hazards` with the default threshold, profile and provider endpoint.
pub async fn check_route(
    start: GeoPoint,
    end: GeoPoint,
    hazards: &[HazardReport],
) -> Result<Vec<MatchResult>> {
    check_route_with_options(start, end, hazards, &CheckOptions::default()).await
}

/// One-shot route check with custom options.
pub async fn check_route_with_options(
    start: GeoPoint,
    end: GeoPoint,
    hazards: &[HazardReport],
    options: &CheckOptions,
) -> Result<Vec<MatchResult>> {
    let provider = OsrmProvider::new(options.osrm_url.clone(), options.profile);
    let route = provider.route(start, end).await?;
    Ok(find_hazards_near_route(&route, hazards, options.threshold_m))
}
