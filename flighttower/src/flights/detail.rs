//! Normalized flight detail records.
//!
//! The upstream detail record is a deep, sparsely populated JSON tree. This
//! module flattens the parts clients care about into [`FlightDetail`] and
//! models the resolver's outcomes as [`FlightDetailResult`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::nested;

/// Message returned when a flight cannot be located.
pub const NOT_FOUND_MESSAGE: &str =
    "The requested flight could not be found. Please try again or check the flight ID.";

/// Message returned when the detail fetch fails.
pub const UPSTREAM_ERROR_MESSAGE: &str = "Failed to fetch flight details. Please try again later.";

const NOT_FOUND_TAG: &str = "Flight not found";
const UPSTREAM_ERROR_TAG: &str = "API Error";
const UPSTREAM_ERROR_AIRLINE: &str = "Data unavailable";
const NOT_AVAILABLE: &str = "N/A";

/// Origin and destination labels, `"Name (IATA)"` where both are known.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Scheduled times as Unix epochs plus a readable block time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightTimes {
    pub scheduled_departure: Option<i64>,
    pub scheduled_arrival: Option<i64>,
    pub duration_readable: Option<String>,
}

/// Normalized flight detail.
///
/// The `Default` value (every field null) is what a malformed upstream
/// record degrades to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightDetail {
    pub airline: Option<String>,
    pub aircraft_code: Option<String>,
    pub route: Route,
    pub times: FlightTimes,
    pub origin_country: Option<String>,
    pub destination_country: Option<String>,
}

impl FlightDetail {
    /// Extract a detail from an upstream record, tolerating any gap.
    pub fn from_record(record: &Value) -> Self {
        let departure = nested::i64_at(record, &["time", "scheduled", "departure"]);
        let arrival = nested::i64_at(record, &["time", "scheduled", "arrival"]);

        Self {
            airline: nested::str_at(record, &["airline", "name"]),
            aircraft_code: nested::str_at(record, &["aircraft", "code", "text"]),
            route: Route {
                from: airport_label(record, "origin"),
                to: airport_label(record, "destination"),
            },
            times: FlightTimes {
                scheduled_departure: departure,
                scheduled_arrival: arrival,
                duration_readable: Some(format_duration(departure, arrival)),
            },
            origin_country: nested::str_at(
                record,
                &["airport", "origin", "position", "country", "name"],
            ),
            destination_country: nested::str_at(
                record,
                &["airport", "destination", "position", "country", "name"],
            ),
        }
    }

    /// Neutral record used by the error placeholders.
    fn placeholder(airline: &str) -> Self {
        let na = || Some(NOT_AVAILABLE.to_string());
        Self {
            airline: Some(airline.to_string()),
            aircraft_code: na(),
            route: Route {
                from: na(),
                to: na(),
            },
            times: FlightTimes {
                scheduled_departure: None,
                scheduled_arrival: None,
                duration_readable: na(),
            },
            origin_country: na(),
            destination_country: na(),
        }
    }
}

fn airport_label(record: &Value, side: &str) -> Option<String> {
    let name = nested::str_at(record, &["airport", side, "name"]).filter(|s| !s.is_empty());
    let iata = nested::str_at(record, &["airport", side, "code", "iata"]).filter(|s| !s.is_empty());
    route_label(name, iata)
}

/// `"Name (IATA)"` when both parts exist, otherwise whichever exists.
pub fn route_label(name: Option<String>, iata: Option<String>) -> Option<String> {
    match (name, iata) {
        (Some(name), Some(iata)) => Some(format!("{} ({})", name, iata)),
        (name, iata) => name.or(iata),
    }
}

/// Block time as `"{h}h {m}m"`, or `"N/A"` when either end is unknown.
///
/// An arrival before departure, or a span too large for an `i64`, is
/// treated as bad data and also yields `"N/A"`.
///
/// ```
/// use flighttower::flights::format_duration;
///
/// assert_eq!(format_duration(Some(0), Some(5400)), "1h 30m");
/// assert_eq!(format_duration(None, Some(5400)), "N/A");
/// ```
pub fn format_duration(departure: Option<i64>, arrival: Option<i64>) -> String {
    let (Some(departure), Some(arrival)) = (departure, arrival) else {
        return NOT_AVAILABLE.to_string();
    };

    let seconds = match arrival.checked_sub(departure) {
        Some(seconds) if seconds >= 0 => seconds,
        Some(_) => {
            tracing::warn!(departure, arrival, "Scheduled arrival precedes departure");
            return NOT_AVAILABLE.to_string();
        }
        None => {
            tracing::warn!(departure, arrival, "Scheduled times out of range");
            return NOT_AVAILABLE.to_string();
        }
    };

    format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
}

/// Outcome of a detail lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum FlightDetailResult {
    /// Flight located and its record normalized
    Found(FlightDetail),
    /// Flight not in cache nor in any rescan
    NotFound(String),
    /// Flight located but the detail fetch failed
    UpstreamError(String),
    /// Detail fetch returned something other than a JSON object
    Malformed,
}

impl FlightDetailResult {
    pub fn not_found() -> Self {
        FlightDetailResult::NotFound(NOT_FOUND_MESSAGE.to_string())
    }

    pub fn upstream_error() -> Self {
        FlightDetailResult::UpstreamError(UPSTREAM_ERROR_MESSAGE.to_string())
    }

    pub fn is_found(&self) -> bool {
        matches!(self, FlightDetailResult::Found(_))
    }

    /// Error tag carried by the wire response, if any.
    pub fn error_tag(&self) -> Option<&'static str> {
        match self {
            FlightDetailResult::NotFound(_) => Some(NOT_FOUND_TAG),
            FlightDetailResult::UpstreamError(_) => Some(UPSTREAM_ERROR_TAG),
            FlightDetailResult::Found(_) | FlightDetailResult::Malformed => None,
        }
    }

    /// Flatten into the client-facing response shape.
    pub fn to_response(&self) -> FlightDetailResponse {
        let error = self.error_tag().map(str::to_string);
        match self {
            FlightDetailResult::Found(detail) => FlightDetailResponse {
                error,
                message: None,
                detail: detail.clone(),
            },
            FlightDetailResult::NotFound(message) => FlightDetailResponse {
                error,
                message: Some(message.clone()),
                detail: FlightDetail::placeholder(NOT_FOUND_TAG),
            },
            FlightDetailResult::UpstreamError(message) => FlightDetailResponse {
                error,
                message: Some(message.clone()),
                detail: FlightDetail::placeholder(UPSTREAM_ERROR_AIRLINE),
            },
            FlightDetailResult::Malformed => FlightDetailResponse {
                error,
                message: None,
                detail: FlightDetail::default(),
            },
        }
    }
}

/// Wire shape of a detail lookup: the detail fields, plus an error tag and
/// message for the placeholder outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightDetailResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub detail: FlightDetail,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_record() -> Value {
        json!({
            "identification": {"id": "2f1e8a3b"},
            "airline": {"name": "LOT Polish Airlines"},
            "aircraft": {"code": {"text": "B738", "iata": "738"}},
            "airport": {
                "origin": {
                    "name": "Warsaw Chopin Airport",
                    "code": {"iata": "WAW"},
                    "position": {"country": {"name": "Poland"}}
                },
                "destination": {
                    "name": "London Heathrow Airport",
                    "code": {"iata": "LHR"},
                    "position": {"country": {"name": "United Kingdom"}}
                }
            },
            "time": {"scheduled": {"departure": 1718040000, "arrival": 1718049900}}
        })
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Some(0), Some(5400)), "1h 30m");
        assert_eq!(format_duration(Some(100), Some(100)), "0h 0m");
        assert_eq!(format_duration(Some(0), Some(3599)), "0h 59m");
        assert_eq!(format_duration(Some(0), Some(36000 + 120)), "10h 2m");
    }

    #[test]
    fn test_format_duration_missing_end() {
        assert_eq!(format_duration(None, None), "N/A");
        assert_eq!(format_duration(Some(0), None), "N/A");
        assert_eq!(format_duration(None, Some(5400)), "N/A");
    }

    #[test]
    fn test_format_duration_negative_is_unavailable() {
        assert_eq!(format_duration(Some(5400), Some(0)), "N/A");
    }

    #[test]
    fn test_format_duration_overflow_is_unavailable() {
        assert_eq!(format_duration(Some(i64::MIN), Some(i64::MAX)), "N/A");
        assert_eq!(format_duration(Some(i64::MAX), Some(i64::MIN)), "N/A");
        let far = 9_000_000_000_000_000_000;
        assert_eq!(format_duration(Some(-far), Some(far)), "N/A");
    }

    #[test]
    fn test_from_record_extreme_epochs() {
        let record = json!({
            "time": {"scheduled": {"departure": i64::MIN, "arrival": i64::MAX}}
        });
        let detail = FlightDetail::from_record(&record);

        assert_eq!(detail.times.scheduled_departure, Some(i64::MIN));
        assert_eq!(detail.times.duration_readable.as_deref(), Some("N/A"));
    }

    #[test]
    fn test_route_label() {
        assert_eq!(
            route_label(Some("Warsaw Chopin".into()), Some("WAW".into())).as_deref(),
            Some("Warsaw Chopin (WAW)")
        );
        assert_eq!(route_label(None, Some("JFK".into())).as_deref(), Some("JFK"));
        assert_eq!(route_label(Some("Okecie".into()), None).as_deref(), Some("Okecie"));
        assert_eq!(route_label(None, None), None);
    }

    #[test]
    fn test_from_record_full() {
        let detail = FlightDetail::from_record(&full_record());

        assert_eq!(detail.airline.as_deref(), Some("LOT Polish Airlines"));
        assert_eq!(detail.aircraft_code.as_deref(), Some("B738"));
        assert_eq!(detail.route.from.as_deref(), Some("Warsaw Chopin Airport (WAW)"));
        assert_eq!(detail.route.to.as_deref(), Some("London Heathrow Airport (LHR)"));
        assert_eq!(detail.times.scheduled_departure, Some(1718040000));
        assert_eq!(detail.times.duration_readable.as_deref(), Some("2h 45m"));
        assert_eq!(detail.origin_country.as_deref(), Some("Poland"));
        assert_eq!(detail.destination_country.as_deref(), Some("United Kingdom"));
    }

    #[test]
    fn test_from_record_mixed_route() {
        let record = json!({
            "airport": {
                "origin": {"name": "Warsaw Chopin", "code": {"iata": "WAW"}},
                "destination": {"name": null, "code": {"iata": "JFK"}}
            }
        });
        let detail = FlightDetail::from_record(&record);

        assert_eq!(detail.route.from.as_deref(), Some("Warsaw Chopin (WAW)"));
        assert_eq!(detail.route.to.as_deref(), Some("JFK"));
    }

    #[test]
    fn test_from_record_empty_object() {
        let detail = FlightDetail::from_record(&json!({}));

        assert_eq!(detail.airline, None);
        assert_eq!(detail.route, Route::default());
        assert_eq!(detail.times.duration_readable.as_deref(), Some("N/A"));
        assert_eq!(detail.origin_country, None);
    }

    #[test]
    fn test_not_found_response() {
        let response = FlightDetailResult::not_found().to_response();

        assert_eq!(response.error.as_deref(), Some("Flight not found"));
        assert_eq!(response.message.as_deref(), Some(NOT_FOUND_MESSAGE));
        assert_eq!(response.detail.airline.as_deref(), Some("Flight not found"));
        assert_eq!(response.detail.aircraft_code.as_deref(), Some("N/A"));
        assert_eq!(response.detail.route.from.as_deref(), Some("N/A"));
        assert_eq!(response.detail.route.to.as_deref(), Some("N/A"));
        assert_eq!(response.detail.times.scheduled_departure, None);
        assert_eq!(response.detail.times.duration_readable.as_deref(), Some("N/A"));
        assert_eq!(response.detail.origin_country.as_deref(), Some("N/A"));
        assert_eq!(response.detail.destination_country.as_deref(), Some("N/A"));
    }

    #[test]
    fn test_upstream_error_response() {
        let response = FlightDetailResult::upstream_error().to_response();

        assert_eq!(response.error.as_deref(), Some("API Error"));
        assert_eq!(response.message.as_deref(), Some(UPSTREAM_ERROR_MESSAGE));
        assert_eq!(response.detail.airline.as_deref(), Some("Data unavailable"));
        assert_eq!(response.detail.route.to.as_deref(), Some("N/A"));
    }

    #[test]
    fn test_malformed_response_is_all_null() {
        let json = serde_json::to_value(FlightDetailResult::Malformed.to_response()).unwrap();

        assert_eq!(
            json,
            json!({
                "airline": null,
                "aircraft_code": null,
                "route": {"from": null, "to": null},
                "times": {
                    "scheduled_departure": null,
                    "scheduled_arrival": null,
                    "duration_readable": null
                },
                "origin_country": null,
                "destination_country": null
            })
        );
    }

    #[test]
    fn test_found_response_has_no_error_keys() {
        let detail = FlightDetail::from_record(&full_record());
        let json = serde_json::to_value(FlightDetailResult::Found(detail).to_response()).unwrap();

        assert!(json.get("error").is_none());
        assert!(json.get("message").is_none());
        assert_eq!(json["route"]["from"], "Warsaw Chopin Airport (WAW)");
    }
}
