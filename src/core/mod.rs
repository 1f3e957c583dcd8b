//! Core library modules for routeguard
//!
//! This module contains the internal implementation details of the
//! routeguard library.

pub mod error;
pub mod geo;
pub mod hazard;
pub mod matcher;
pub mod provider;
pub mod selection;
pub mod session;

// Re-export main types for internal use
pub use matcher::find_hazards_near_route;
pub use session::RouteSession;
