//! Error types for the routeguard library
//!
//! All failures are local and reported upward as signals; none are fatal
//! to the hosting process.

use std::fmt;

/// Main error type for routeguard operations
#[derive(Debug)]
pub enum Error {
    /// Provider could not produce a path between the given endpoints
    RouteUnavailable(String),

    /// Provider returned fewer than two points
    DegenerateRoute(usize),

    /// Latitude or longitude outside valid ranges at an input boundary
    InvalidCoordinate(String),

    /// Connectivity-level failure while talking to the routing provider
    NetworkError(String),

    /// Non-connectivity HTTP failure
    HttpError(String),

    /// File I/O error
    IoError(std::io::Error),

    /// Malformed input such as a hazard file or CLI argument
    InvalidInput(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RouteUnavailable(reason) => {
                write!(f, "Route unavailable: {}", reason)
            }
            Error::DegenerateRoute(count) => {
                write!(f, "Degenerate route: provider returned {} point(s)", count)
            }
            Error::InvalidCoordinate(msg) => {
                write!(f, "Invalid coordinate: {}", msg)
            }
            Error::NetworkError(msg) => {
                write!(f, "Network error: {}", msg)
            }
            Error::HttpError(msg) => {
                write!(f, "HTTP error: {}", msg)
            }
            Error::IoError(err) => {
                write!(f, "I/O error: {}", err)
            }
            Error::InvalidInput(msg) => {
                write!(f, "Invalid input: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Error::NetworkError(err.to_string())
        } else {
            Error::HttpError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidInput(format!("invalid hazard data: {}", err))
    }
}

/// Convenience result type for routeguard operations
pub type Result<T> = std::result::Result<T, Error>;
