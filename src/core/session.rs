//! Route session orchestration
//!
//! One session drives one "route + detect" cycle: collect both endpoints,
//! request a path from the routing provider, correlate the returned
//! polyline against the current hazard snapshot and emit the outcome as an
//! event. Endpoint changes while a request is in flight invalidate the
//! older request's result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::core::error::Result;
use crate::core::geo::{GeoPoint, RoutePolyline};
use crate::core::hazard::HazardReport;
use crate::core::matcher::{find_hazards_near_route, MatchResult, DEFAULT_PROXIMITY_THRESHOLD_M};
use crate::core::provider::RouteProvider;

/// Lifecycle of a routing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No active route; endpoints incomplete.
    Idle,
    /// Both endpoints set, provider call in flight.
    Requesting,
    /// A route was computed and matched.
    Ready,
    /// The last provider call failed.
    Error,
}

/// Notifications emitted by a session toward the presentation layer.
#[derive(Debug, Clone)]
pub enum RouteEvent {
    /// A route was computed; `alerts` holds every hazard near it, batched
    /// per computation.
    RouteReady {
        route: RoutePolyline,
        alerts: Vec<MatchResult>,
    },
    /// The provider could not produce a usable route.
    RouteFailed { reason: String },
}

/// Session tuning knobs.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Distance below which a hazard counts as "on" the route, in meters.
    pub proximity_threshold_m: f64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            proximity_threshold_m: DEFAULT_PROXIMITY_THRESHOLD_M,
        }
    }
}

struct SessionCore {
    state: SessionState,
    start: Option<GeoPoint>,
    end: Option<GeoPoint>,
    hazards: Arc<[HazardReport]>,
    route: Option<RoutePolyline>,
    closed: bool,
}

struct SessionShared<P> {
    provider: P,
    options: SessionOptions,
    events: mpsc::UnboundedSender<RouteEvent>,
    /// Bumped on every new request, endpoint clear and teardown; a
    /// response tagged with an older value is stale and dropped.
    generation: AtomicU64,
    core: Mutex<SessionCore>,
}

impl<P> SessionShared<P> {
    fn complete(&self, generation: u64, result: Result<RoutePolyline>) {
        let mut core = self.core.lock().unwrap();
        if core.closed || self.generation.load(Ordering::SeqCst) != generation {
            log::debug!("dropping stale route response (generation {generation})");
            return;
        }

        match result {
            Ok(route) => {
                let alerts = find_hazards_near_route(
                    &route,
                    &core.hazards,
                    self.options.proximity_threshold_m,
                );
                core.state = SessionState::Ready;
                core.route = Some(route.clone());
                // The receiver may already be gone (view torn down);
                // nothing left to notify then.
                let _ = self.events.send(RouteEvent::RouteReady { route, alerts });
            }
            Err(err) => {
                log::warn!("route request failed: {err}");
                core.state = SessionState::Error;
                core.route = None;
                let _ = self.events.send(RouteEvent::RouteFailed {
                    reason: err.to_string(),
                });
            }
        }
    }
}

/// Orchestrates route requests and hazard correlation for one traveler.
///
/// Owns its polyline and match results exclusively; hazard input is a
/// shared read-only snapshot. Multiple sessions never share mutable state.
pub struct RouteSession<P> {
    shared: Arc<SessionShared<P>>,
}

impl<P: RouteProvider + 'static> RouteSession<P> {
    /// Create a session and the receiving end of its event stream.
    pub fn new(
        provider: P,
        options: SessionOptions,
    ) -> (Self, mpsc::UnboundedReceiver<RouteEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let shared = Arc::new(SessionShared {
            provider,
            options,
            events,
            generation: AtomicU64::new(0),
            core: Mutex::new(SessionCore {
                state: SessionState::Idle,
                start: None,
                end: None,
                hazards: Vec::new().into(),
                route: None,
                closed: false,
            }),
        });
        (Self { shared }, receiver)
    }

    /// Replace the hazard snapshot used by the next matcher run. Does not
    /// cancel or re-run an in-flight request.
    pub fn set_hazards(&self, hazards: Vec<HazardReport>) {
        let mut core = self.shared.core.lock().unwrap();
        core.hazards = hazards.into();
    }

    /// Set or clear the start endpoint. A request is issued as soon as
    /// both endpoints are present.
    pub fn set_start(&self, point: Option<GeoPoint>) {
        self.update_endpoint(|core| core.start = point);
    }

    /// Set or clear the end endpoint. A request is issued as soon as both
    /// endpoints are present.
    pub fn set_end(&self, point: Option<GeoPoint>) {
        self.update_endpoint(|core| core.end = point);
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.shared.core.lock().unwrap().state
    }

    /// Polyline of the last completed computation, if any.
    pub fn route(&self) -> Option<RoutePolyline> {
        self.shared.core.lock().unwrap().route.clone()
    }

    /// Tear the session down: invalidate any in-flight request and drop
    /// the owned polyline. Safe to call more than once; no events are
    /// emitted afterwards.
    pub fn close(&self) {
        let mut core = self.shared.core.lock().unwrap();
        if core.closed {
            return;
        }
        core.closed = true;
        core.state = SessionState::Idle;
        core.start = None;
        core.end = None;
        core.route = None;
        self.shared.generation.fetch_add(1, Ordering::SeqCst);
    }

    fn update_endpoint(&self, apply: impl FnOnce(&mut SessionCore)) {
        let request = {
            let mut core = self.shared.core.lock().unwrap();
            if core.closed {
                return;
            }
            apply(&mut core);
            // Any endpoint change invalidates interest in an in-flight
            // result, whether or not a new request follows.
            let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
            core.route = None;
            match (core.start, core.end) {
                (Some(start), Some(end)) => {
                    core.state = SessionState::Requesting;
                    Some((start, end, generation))
                }
                _ => {
                    core.state = SessionState::Idle;
                    None
                }
            }
        };

        if let Some((start, end, generation)) = request {
            let shared = Arc::clone(&self.shared);
            tokio::spawn(async move {
                let result = shared.provider.route(start, end).await;
                shared.complete(generation, result);
            });
        }
    }
}
