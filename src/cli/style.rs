//! Marker styling for hazard display
//!
//! Presentation-only mapping from hazard attributes to marker colours,
//! consumed by frontends that render the alert payload. The correlation
//! core knows nothing about it.

use routeguard::{HazardKind, Severity};

/// Marker colour for a hazard pin.
///
/// Total over both enums; the `Other` arm doubles as the fallback shade
/// for anything a frontend cannot classify.
pub fn marker_color(kind: HazardKind, severity: Severity) -> &'static str {
    match kind {
        HazardKind::Stairs | HazardKind::DamagedPath => match severity {
            Severity::High => "#d32f2f",
            Severity::Medium => "#f57c00",
            Severity::Low => "#ffb74d",
        },
        HazardKind::MissingTrafficLight => match severity {
            Severity::High => "#d32f2f",
            Severity::Medium | Severity::Low => "#f57c00",
        },
        HazardKind::Obstacle => match severity {
            Severity::High => "#7b1fa2",
            Severity::Medium => "#9c27b0",
            Severity::Low => "#ba68c8",
        },
        HazardKind::NoRamp => "#5d4037",
        HazardKind::Other => "#616161",
    }
}

/// Chip colour for a severity badge.
pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "#c62828",
        Severity::Medium => "#e65100",
        Severity::Low => "#2e7d32",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_drives_shade_for_path_hazards() {
        assert_eq!(marker_color(HazardKind::Stairs, Severity::High), "#d32f2f");
        assert_eq!(marker_color(HazardKind::Stairs, Severity::Low), "#ffb74d");
        assert_eq!(
            marker_color(HazardKind::DamagedPath, Severity::Medium),
            "#f57c00"
        );
    }

    #[test]
    fn test_fixed_color_kinds_ignore_severity() {
        for severity in [Severity::Low, Severity::Medium, Severity::High] {
            assert_eq!(marker_color(HazardKind::NoRamp, severity), "#5d4037");
            assert_eq!(marker_color(HazardKind::Other, severity), "#616161");
        }
    }

    #[test]
    fn test_severity_chip_colors() {
        assert_eq!(severity_color(Severity::High), "#c62828");
        assert_eq!(severity_color(Severity::Medium), "#e65100");
        assert_eq!(severity_color(Severity::Low), "#2e7d32");
    }
}
