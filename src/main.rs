//! # Routeguard CLI
//!
//! Command-line interface for the routeguard library.
//! Computes a route between two points and warns about reported hazards
//! near it.

use clap::Parser;
use log::error;
use routeguard::{
    Error, GeoPoint, HazardReport, MatchResult, OsrmProvider, Result, RouteEvent, RouteSession,
    SelectionFlow, SessionOptions, TravelProfile, DEFAULT_OSRM_URL, DEFAULT_PROXIMITY_THRESHOLD_M,
};

mod cli;

/// Command-line interface for routeguard
#[derive(Parser)]
#[command(name = "routeguard")]
#[command(about = "Route hazard checker - warns about reported hazards along a route")]
#[command(long_about = "Computes a route between two points and flags reported hazards near it:
  routeguard --from 51.5074,-0.1278 --to 51.5155,-0.1410 --hazards reports.json
  routeguard --from ... --to ... --profile driving --threshold 100
  routeguard --from ... --to ... --hazards reports.json --json > alerts.json

Hazard reports are a JSON array of objects with id, name, description,
type, severity, latitude and longitude fields.")]
#[command(version = env!("ROUTEGUARD_VERSION"))]
struct Cli {
    /// Start of the route as "lat,lon"
    #[arg(long)]
    from: String,

    /// End of the route as "lat,lon"
    #[arg(long)]
    to: String,

    /// Path to a JSON file with hazard reports
    #[arg(long)]
    hazards: String,

    /// Proximity threshold in meters
    #[arg(long, default_value_t = DEFAULT_PROXIMITY_THRESHOLD_M)]
    threshold: f64,

    /// Routing profile: "walking" or "driving"
    #[arg(long, default_value = "walking")]
    profile: String,

    /// Base URL of the OSRM routing service
    #[arg(long, default_value = DEFAULT_OSRM_URL)]
    osrm_url: String,

    /// Print alerts as a JSON marker payload on stdout
    #[arg(long)]
    json: bool,

    /// Show what would be requested without any network traffic
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Parse "lat,lon" into a validated point.
fn parse_point(raw: &str) -> Result<GeoPoint> {
    let (lat, lon) = raw
        .split_once(',')
        .ok_or_else(|| Error::InvalidInput(format!("expected \"lat,lon\", got \"{raw}\"")))?;

    let latitude: f64 = lat
        .trim()
        .parse()
        .map_err(|_| Error::InvalidInput(format!("invalid latitude: \"{lat}\"")))?;
    let longitude: f64 = lon
        .trim()
        .parse()
        .map_err(|_| Error::InvalidInput(format!("invalid longitude: \"{lon}\"")))?;

    let point = GeoPoint::new(latitude, longitude);
    if !point.is_valid() {
        return Err(Error::InvalidCoordinate(format!(
            "coordinates out of range: {raw}"
        )));
    }
    Ok(point)
}

fn parse_profile(raw: &str) -> Result<TravelProfile> {
    match raw {
        "walking" | "foot" => Ok(TravelProfile::Walking),
        "driving" | "car" => Ok(TravelProfile::Driving),
        other => Err(Error::InvalidInput(format!(
            "unknown profile \"{other}\" (expected walking or driving)"
        ))),
    }
}

/// Load a JSON array of hazard reports from disk.
fn load_hazards(path: &str) -> Result<Vec<HazardReport>> {
    let raw = std::fs::read_to_string(path)?;
    let reports: Vec<HazardReport> = serde_json::from_str(&raw)?;
    Ok(reports)
}

/// Marker payload for one alert, as the map frontend consumes it.
fn alert_payload(alert: &MatchResult) -> serde_json::Value {
    let hazard = &alert.hazard;
    serde_json::json!({
        "id": hazard.id,
        "name": hazard.name,
        "description": hazard.description,
        "type": hazard.kind,
        "severity": hazard.severity,
        "latitude": hazard.location.latitude,
        "longitude": hazard.location.longitude,
        "matched_latitude": alert.matched_point.latitude,
        "matched_longitude": alert.matched_point.longitude,
        "marker_color": cli::style::marker_color(hazard.kind, hazard.severity),
        "severity_color": cli::style::severity_color(hazard.severity),
    })
}

fn print_alerts(mut alerts: Vec<MatchResult>, threshold: f64, as_json: bool) -> Result<()> {
    // Most severe first.
    alerts.sort_by(|a, b| b.hazard.severity.cmp(&a.hazard.severity));

    if as_json {
        let payload: Vec<serde_json::Value> = alerts.iter().map(alert_payload).collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if alerts.is_empty() {
        eprintln!("✅ No reported hazards within {threshold}m of the route");
        return Ok(());
    }

    eprintln!("⚠️  {} hazard(s) near the route:", alerts.len());
    for alert in &alerts {
        let hazard = &alert.hazard;
        eprintln!(
            "  ⚠️  [{}] {} ({}) at {:.5},{:.5}: {}",
            hazard.severity,
            hazard.name,
            hazard.kind,
            hazard.location.latitude,
            hazard.location.longitude,
            hazard.description,
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("❌ Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    if cli.verbose {
        eprintln!("🧭 Routeguard v{} starting...", env!("ROUTEGUARD_VERSION"));
    }

    let profile = parse_profile(&cli.profile)?;

    // Same fill-start-then-end flow the map sidebar drives with its
    // search box.
    let mut selection = SelectionFlow::new();
    selection.submit(parse_point(&cli.from)?, cli.from.clone());
    selection.submit(parse_point(&cli.to)?, cli.to.clone());

    let (start, end) = match (selection.start(), selection.end()) {
        (Some(start), Some(end)) => (start.point, end.point),
        _ => {
            return Err(Error::InvalidInput(
                "both --from and --to are required".to_string(),
            ))
        }
    };

    let hazards = load_hazards(&cli.hazards)?;
    if cli.verbose {
        eprintln!("⚠️  Loaded {} hazard report(s) from {}", hazards.len(), cli.hazards);
    }

    if cli.dry_run {
        let profile = &cli.profile;
        let osrm_url = &cli.osrm_url;
        eprintln!(
            "🔍 [DRY RUN] Would request {profile} route {} -> {} via {osrm_url} and check {} hazard(s) within {}m",
            cli.from,
            cli.to,
            hazards.len(),
            cli.threshold
        );
        return Ok(());
    }

    let provider = OsrmProvider::new(cli.osrm_url.clone(), profile);
    let (session, mut events) = RouteSession::new(
        provider,
        SessionOptions {
            proximity_threshold_m: cli.threshold,
        },
    );
    session.set_hazards(hazards);

    let spinner = cli::create_route_spinner(&format!("🗺️  Computing {} route...", cli.profile));
    session.set_start(Some(start));
    session.set_end(Some(end));

    let event = events.recv().await.ok_or_else(|| {
        Error::RouteUnavailable("session closed before a result arrived".to_string())
    })?;
    spinner.finish_and_clear();

    let outcome = match event {
        RouteEvent::RouteReady { route, alerts } => {
            if cli.verbose {
                eprintln!("✅ Route found with {} points", route.len());
            }
            print_alerts(alerts, cli.threshold, cli.json)
        }
        RouteEvent::RouteFailed { reason } => Err(Error::RouteUnavailable(reason)),
    };

    session.close();
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_point_valid() {
        let p = parse_point("51.5074,-0.1278").unwrap();
        assert_eq!(p, GeoPoint::new(51.5074, -0.1278));

        // Whitespace around the comma is tolerated.
        let p = parse_point(" 48.2082 , 16.3738 ").unwrap();
        assert_eq!(p, GeoPoint::new(48.2082, 16.3738));
    }

    #[test]
    fn test_parse_point_rejects_malformed_input() {
        assert!(matches!(parse_point("51.5074"), Err(Error::InvalidInput(_))));
        assert!(matches!(parse_point("abc,def"), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_parse_point_rejects_out_of_range() {
        assert!(matches!(
            parse_point("91.0,0.0"),
            Err(Error::InvalidCoordinate(_))
        ));
        assert!(matches!(
            parse_point("0.0,181.0"),
            Err(Error::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_parse_profile() {
        assert_eq!(parse_profile("walking").unwrap(), TravelProfile::Walking);
        assert_eq!(parse_profile("foot").unwrap(), TravelProfile::Walking);
        assert_eq!(parse_profile("driving").unwrap(), TravelProfile::Driving);
        assert!(parse_profile("submarine").is_err());
    }

    #[test]
    fn test_load_hazards_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "id": "rep-1",
                "name": "Stairs without ramp",
                "description": "Six steps, no alternative",
                "type": "stairs",
                "severity": "high",
                "latitude": 51.5,
                "longitude": -0.12
            }}]"#
        )
        .unwrap();

        let reports = load_hazards(file.path().to_str().unwrap()).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id, "rep-1");
    }

    #[test]
    fn test_load_hazards_missing_file() {
        assert!(matches!(
            load_hazards("/nonexistent/reports.json"),
            Err(Error::IoError(_))
        ));
    }

    #[test]
    fn test_alert_payload_includes_marker_style() {
        use routeguard::{HazardKind, Severity};

        let alert = MatchResult {
            hazard: HazardReport {
                id: "rep-9".to_string(),
                name: "Blocked sidewalk".to_string(),
                description: "Construction fence".to_string(),
                kind: HazardKind::Obstacle,
                severity: Severity::High,
                location: GeoPoint::new(51.5, -0.12),
            },
            matched_point: GeoPoint::new(51.5001, -0.1201),
        };

        let payload = alert_payload(&alert);
        assert_eq!(payload["type"], "obstacle");
        assert_eq!(payload["marker_color"], "#7b1fa2");
        assert_eq!(payload["severity_color"], "#c62828");
        assert_eq!(payload["matched_latitude"], 51.5001);
    }
}
