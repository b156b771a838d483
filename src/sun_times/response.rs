use chrono::{DateTime, FixedOffset};

/// Response structure for the sunrise-sunset.org JSON endpoint
/// Represents the payload returned by api.sunrise-sunset.org/json with formatted=0
#[derive(serde::Deserialize, Debug)]
pub struct SunApiResponse {
    /// Sun event times for the requested coordinate and day
    pub results: SunResults,
    /// Request envelope; "OK" when the request was semantically valid
    pub status: String,
}

/// Sun event timestamps, ISO-8601 with the provider's UTC offset
#[derive(serde::Deserialize, Debug)]
pub struct SunResults {
    /// Sunrise instant
    pub sunrise: DateTime<FixedOffset>,
    /// Sunset instant
    pub sunset: DateTime<FixedOffset>,
    /// Moment the sun crosses the local meridian
    pub solar_noon: DateTime<FixedOffset>,
    /// Length of the day in seconds
    pub day_length: i64,
    /// Start of civil twilight (sun 6 degrees below the horizon)
    pub civil_twilight_begin: DateTime<FixedOffset>,
    /// End of civil twilight
    pub civil_twilight_end: DateTime<FixedOffset>,
    /// Start of nautical twilight (sun 12 degrees below the horizon)
    pub nautical_twilight_begin: DateTime<FixedOffset>,
    /// End of nautical twilight
    pub nautical_twilight_end: DateTime<FixedOffset>,
    /// Start of astronomical twilight (sun 18 degrees below the horizon)
    pub astronomical_twilight_begin: DateTime<FixedOffset>,
    /// End of astronomical twilight
    pub astronomical_twilight_end: DateTime<FixedOffset>,
}
