// Module containing response data structures for the sun times payload
mod response;

use crate::clock::Clock;
use crate::error::AppError;
use chrono::{DateTime, FixedOffset, TimeDelta};
use serde_json::Value;
use tracing::{debug, info, warn};

// API endpoint for the sunrise-sunset.org service
const SUN_API_ENDPOINT: &str = "https://api.sunrise-sunset.org/json";

// Coordinate watched by the reference deployment
const DEFAULT_LATITUDE: f64 = 48.74496406744937;
const DEFAULT_LONGITUDE: f64 = -0.9630006440686582;

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Where and what to query.
///
/// `Default` carries the fixed deployment coordinate and the public
/// endpoint; tests substitute a local endpoint.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    pub endpoint: String,
    pub coordinate: Coordinate,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            endpoint: SUN_API_ENDPOINT.to_string(),
            coordinate: Coordinate {
                latitude: DEFAULT_LATITUDE,
                longitude: DEFAULT_LONGITUDE,
            },
        }
    }
}

/// Outcome of a query the provider accepted.
#[derive(Debug)]
pub struct SunReport {
    /// Compact re-serialization of the full payload, printed verbatim.
    pub raw_json: String,
    /// The sunset instant, with the offset the provider sent.
    pub sunset: DateTime<FixedOffset>,
}

fn query_url(config: &QueryConfig) -> String {
    // formatted=0 selects ISO-8601 timestamps over human-readable strings
    format!(
        "{}?lat={}&lng={}&formatted=0",
        config.endpoint, config.coordinate.latitude, config.coordinate.longitude
    )
}

/// Fetches today's sun times for the configured coordinate.
///
/// # Returns
/// * `Ok(Some(report))` when the provider accepted the request
/// * `Ok(None)` when the HTTP status was not a success or the provider
///   rejected the request via its `status` envelope; the caller prints
///   nothing in that case
/// * `Err` when the request failed or the payload could not be parsed
pub async fn fetch_sun_report(
    client: &reqwest::Client,
    config: &QueryConfig,
) -> Result<Option<SunReport>, AppError> {
    let Coordinate { latitude, longitude } = config.coordinate;
    info!("Fetching sun times for {latitude},{longitude}");

    let response = client.get(query_url(config)).send().await?;

    if !response.status().is_success() {
        warn!("Failed to fetch sun times: {}", response.status());
        return Ok(None);
    }

    let body = response.text().await?;
    decode_report(&body)
}

/// Decodes a provider payload into a [`SunReport`].
///
/// The `status` envelope is checked before anything printable is produced,
/// so a rejected request yields `Ok(None)` with no payload to print. A body
/// that is not JSON, or an accepted payload whose `results.sunset` is
/// missing or does not parse, is an error.
pub fn decode_report(body: &str) -> Result<Option<SunReport>, AppError> {
    let payload: Value = serde_json::from_str(body)?;

    match payload.get("status").and_then(Value::as_str) {
        Some("OK") => {}
        status => {
            warn!("Provider rejected the request: status {status:?}");
            return Ok(None);
        }
    }

    let raw_json = serde_json::to_string(&payload)?;
    let decoded: response::SunApiResponse = serde_json::from_value(payload)?;
    debug!("Sun times fetched successfully: {:?}", decoded);

    Ok(Some(SunReport {
        raw_json,
        sunset: decoded.results.sunset,
    }))
}

/// Signed time remaining until sunset: positive while the reported instant
/// is still ahead, negative once it has passed.
pub fn time_until_sunset(report: &SunReport, clock: &dyn Clock) -> TimeDelta {
    report.sunset.signed_duration_since(clock.now())
}
