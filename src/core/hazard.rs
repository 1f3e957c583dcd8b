//! Hazard report data model
//!
//! Reports are supplied externally (a moderation backend in the original
//! deployment) and are read-only inputs here: never mutated, never
//! persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::geo::GeoPoint;

/// Category of a reported accessibility obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardKind {
    Stairs,
    DamagedPath,
    MissingTrafficLight,
    Obstacle,
    NoRamp,
    Other,
}

impl fmt::Display for HazardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HazardKind::Stairs => "stairs",
            HazardKind::DamagedPath => "damaged path",
            HazardKind::MissingTrafficLight => "missing traffic light",
            HazardKind::Obstacle => "obstacle",
            HazardKind::NoRamp => "no ramp",
            HazardKind::Other => "other",
        };
        write!(f, "{label}")
    }
}

/// Reported impact of a hazard, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        };
        write!(f, "{label}")
    }
}

/// A user-submitted record of an obstacle at a fixed location.
///
/// The wire format keeps latitude/longitude as flat fields, matching the
/// report backend's JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardReport {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: HazardKind,
    pub severity: Severity,
    #[serde(flatten)]
    pub location: GeoPoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_deserializes_from_backend_json() {
        let raw = r#"{
            "id": "rep-17",
            "name": "Broken curb ramp",
            "description": "Curb cut is crumbling on the north side",
            "type": "damaged_path",
            "severity": "high",
            "latitude": 48.2082,
            "longitude": 16.3738
        }"#;

        let report: HazardReport = serde_json::from_str(raw).unwrap();
        assert_eq!(report.id, "rep-17");
        assert_eq!(report.kind, HazardKind::DamagedPath);
        assert_eq!(report.severity, Severity::High);
        assert_eq!(report.location, GeoPoint::new(48.2082, 16.3738));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let raw = r#"{
            "id": "rep-18",
            "name": "x",
            "description": "y",
            "type": "volcano",
            "severity": "low",
            "latitude": 0.0,
            "longitude": 0.0
        }"#;

        assert!(serde_json::from_str::<HazardReport>(raw).is_err());
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(HazardKind::MissingTrafficLight.to_string(), "missing traffic light");
        assert_eq!(HazardKind::NoRamp.to_string(), "no ramp");
        assert_eq!(Severity::Medium.to_string(), "medium");
    }
}
