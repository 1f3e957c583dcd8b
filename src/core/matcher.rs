//! Route-hazard proximity correlation
//!
//! Scans a route polyline against a set of hazard reports and collects the
//! hazards that lie close to the path.

use crate::core::geo::{haversine_distance_m, GeoPoint, RoutePolyline};
use crate::core::hazard::HazardReport;

/// Distance in meters below which a hazard counts as "on" the route.
pub const DEFAULT_PROXIMITY_THRESHOLD_M: f64 = 50.0;

/// A hazard confirmed near the route, with the polyline vertex that
/// matched it.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub hazard: HazardReport,
    pub matched_point: GeoPoint,
}

/// Collect every hazard with any polyline vertex strictly closer than
/// `threshold_m`.
///
/// The first vertex within the threshold wins and scanning stops for that
/// hazard, so each hazard yields at most one result and the matched vertex
/// is not necessarily the nearest one. Only provider-returned vertices are
/// tested; segments between them are not interpolated, so match density is
/// bounded by the provider's sampling.
//
// O(vertices x hazards); both inputs are tens to low hundreds of points in
// practice. An R-tree over hazard locations is the upgrade path if that
// stops being true, keeping the same threshold predicate.
pub fn find_hazards_near_route(
    polyline: &RoutePolyline,
    hazards: &[HazardReport],
    threshold_m: f64,
) -> Vec<MatchResult> {
    let mut matches = Vec::new();

    for hazard in hazards {
        let hit = polyline
            .points()
            .iter()
            .find(|vertex| haversine_distance_m(**vertex, hazard.location) < threshold_m);

        if let Some(vertex) = hit {
            matches.push(MatchResult {
                hazard: hazard.clone(),
                matched_point: *vertex,
            });
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hazard::{HazardKind, Severity};

    fn report(id: &str, location: GeoPoint) -> HazardReport {
        HazardReport {
            id: id.to_string(),
            name: format!("hazard {id}"),
            description: String::new(),
            kind: HazardKind::Obstacle,
            severity: Severity::Medium,
            location,
        }
    }

    fn straight_line() -> RoutePolyline {
        RoutePolyline::new(vec![
            GeoPoint::new(52.5200, 13.4050),
            GeoPoint::new(52.5210, 13.4060),
            GeoPoint::new(52.5220, 13.4070),
        ])
    }

    #[test]
    fn test_hazard_at_vertex_matches_any_positive_threshold() {
        let polyline = straight_line();
        let on_vertex = report("r1", GeoPoint::new(52.5210, 13.4060));

        let matches = find_hazards_near_route(&polyline, &[on_vertex], 0.001);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].matched_point, GeoPoint::new(52.5210, 13.4060));
    }

    #[test]
    fn test_distance_exactly_at_threshold_does_not_match() {
        // Strict less-than: a hazard sitting precisely on the threshold
        // circle stays out.
        let vertex = GeoPoint::new(52.5200, 13.4050);
        let hazard_location = GeoPoint::new(52.5205, 13.4050);
        let polyline = RoutePolyline::new(vec![vertex, GeoPoint::new(52.5300, 13.4050)]);

        let exact = haversine_distance_m(vertex, hazard_location);
        let matches =
            find_hazards_near_route(&polyline, &[report("r1", hazard_location)], exact);
        assert!(matches.is_empty());

        // Nudging the threshold up brings it in.
        let matches =
            find_hazards_near_route(&polyline, &[report("r1", hazard_location)], exact + 0.01);
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_far_hazard_yields_no_match() {
        let polyline = straight_line();
        // Roughly 10 km east of the route.
        let far = report("r1", GeoPoint::new(52.5210, 13.5530));

        let matches = find_hazards_near_route(&polyline, &[far], 50.0);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_at_most_one_match_per_hazard() {
        // Five vertices packed within a couple of meters of the hazard.
        let hazard_location = GeoPoint::new(52.5200, 13.4050);
        let polyline = RoutePolyline::new(vec![
            GeoPoint::new(52.520000, 13.405000),
            GeoPoint::new(52.520005, 13.405005),
            GeoPoint::new(52.520010, 13.405010),
            GeoPoint::new(52.520015, 13.405015),
            GeoPoint::new(52.520020, 13.405020),
        ]);

        let matches =
            find_hazards_near_route(&polyline, &[report("r1", hazard_location)], 50.0);
        assert_eq!(matches.len(), 1);
        // First vertex wins, even though later ones are also in range.
        assert_eq!(matches[0].matched_point, GeoPoint::new(52.520000, 13.405000));
    }

    #[test]
    fn test_empty_hazard_set() {
        let matches = find_hazards_near_route(&straight_line(), &[], 50.0);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_multiple_hazards_each_reported_once() {
        let polyline = straight_line();
        let near_first = report("a", GeoPoint::new(52.5200, 13.4050));
        let near_last = report("b", GeoPoint::new(52.5220, 13.4070));
        let far = report("c", GeoPoint::new(53.0, 14.0));

        let matches =
            find_hazards_near_route(&polyline, &[near_first, near_last, far], 50.0);
        let ids: Vec<&str> = matches.iter().map(|m| m.hazard.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
