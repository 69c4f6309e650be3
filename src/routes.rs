mod error;
mod routes_api_types;
pub(crate) mod units;

use chrono::{SecondsFormat, Utc};
use log::{debug, info};
use std::time::Duration;

pub use error::{Error, ErrorKind};
use routes_api_types::{ComputeRoutesRequest, ComputeRoutesResponse, Waypoint};

const ROUTES_API_URL: &'static str = "https://routes.googleapis.com/directions/v2:computeRoutes";
const FIELD_MASK: &'static str =
    "routes.duration,routes.distanceMeters,routes.staticDuration,routes.description";
const TRAVEL_MODE: &'static str = "DRIVE";
const ROUTING_PREFERENCE: &'static str = "TRAFFIC_AWARE_OPTIMAL";

// The API rejects departure times in the past, so the request names a
// departure slightly ahead of now.
const DEPARTURE_OFFSET_SECONDS: i64 = 30;

/// The fields of the first returned route, with durations already parsed
/// into whole seconds.
#[derive(Debug)]
pub struct RouteResult {
    pub eta_seconds: u64,
    pub freeflow_seconds: u64,
    pub distance_meters: f64,
    pub description: String,
}

pub fn compute_route(
    api_key: &str,
    origin: &str,
    destination: &str,
    timeout: Duration,
) -> Result<RouteResult, Error> {
    let departure_time = (Utc::now() + chrono::Duration::seconds(DEPARTURE_OFFSET_SECONDS))
        .to_rfc3339_opts(SecondsFormat::Secs, true);

    let request = ComputeRoutesRequest {
        origin: Waypoint {
            address: origin.to_owned(),
        },
        destination: Waypoint {
            address: destination.to_owned(),
        },
        travel_mode: TRAVEL_MODE.to_owned(),
        routing_preference: ROUTING_PREFERENCE.to_owned(),
        departure_time,
    };

    debug!(
        "requesting route from {:?} to {:?}, departing {}",
        origin, destination, request.departure_time
    );

    let response = ureq::post(ROUTES_API_URL)
        .timeout(timeout)
        .set("Content-Type", "application/json")
        .set("X-Goog-Api-Key", api_key)
        .set("X-Goog-FieldMask", FIELD_MASK)
        .send_json(serde_json::to_value(&request)?)?;

    let decoded = response.into_json::<ComputeRoutesResponse>()?;

    route_result(decoded)
}

/// Selects the first returned route and parses its duration fields. An
/// empty route list is an error, so the caller aborts before any log write.
fn route_result(decoded: ComputeRoutesResponse) -> Result<RouteResult, Error> {
    let route = decoded
        .routes
        .into_iter()
        .next()
        .ok_or_else(Error::no_routes)?;

    info!("received route: {:?}", route.description);

    Ok(RouteResult {
        eta_seconds: units::parse_duration_secs(&route.duration)?,
        freeflow_seconds: units::parse_duration_secs(&route.static_duration)?,
        distance_meters: route.distance_meters,
        description: route.description,
    })
}

#[cfg(test)]
mod tests {
    use super::routes_api_types::Route;
    use super::*;

    fn sample_route(duration: &str, description: &str) -> Route {
        Route {
            duration: duration.to_owned(),
            static_duration: "500s".to_owned(),
            distance_meters: 16093.4,
            description: description.to_owned(),
        }
    }

    #[test]
    fn test_route_result_takes_first_route() {
        let decoded = ComputeRoutesResponse {
            routes: vec![
                sample_route("600s", "I-95 N"),
                sample_route("900s", "US-1 N"),
            ],
        };

        let result = route_result(decoded).unwrap();
        assert_eq!(result.eta_seconds, 600);
        assert_eq!(result.freeflow_seconds, 500);
        assert_eq!(result.distance_meters, 16093.4);
        assert_eq!(result.description, "I-95 N");
    }

    #[test]
    fn test_route_result_empty_routes() {
        let err = route_result(ComputeRoutesResponse::default()).unwrap_err();
        match err.kind() {
            ErrorKind::NoRoutes => {}
            other => panic!("unexpected error kind: {:?}", other),
        }
    }

    #[test]
    fn test_route_result_malformed_duration() {
        let decoded = ComputeRoutesResponse {
            routes: vec![sample_route("", "I-95 N")],
        };

        let err = route_result(decoded).unwrap_err();
        match err.kind() {
            ErrorKind::DurationParse(raw) => assert_eq!(raw, ""),
            other => panic!("unexpected error kind: {:?}", other),
        }
    }

    #[test]
    fn test_http_status_error_mapping() -> Result<(), Box<dyn std::error::Error>> {
        let response = ureq::Response::new(403, "Forbidden", "PERMISSION_DENIED")?;
        let err = Error::from(ureq::Error::Status(403, response));
        match err.kind() {
            ErrorKind::Http { status, body } => {
                assert_eq!(*status, 403);
                assert_eq!(body, "PERMISSION_DENIED");
            }
            other => panic!("unexpected error kind: {:?}", other),
        }

        Ok(())
    }
}
