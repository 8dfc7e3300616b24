//! Flight records and per-flight domain calculations

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Fluent construction of flights for tests and benchmarks
pub mod builder;
/// Decoding of JSONL lines into flights
pub mod decode;

pub use builder::FlightBuilder;
pub use decode::FlightDecoder;

/// Timestamp with the UTC offset it was recorded in
pub type Timestamp = DateTime<FixedOffset>;

/// Arrival delay, in whole minutes, above which a landing counts as missed
pub const LANDING_THRESHOLD_MINUTES: i64 = 5;

/// Wire format for timestamps: `YYYY-MM-DDTHH:MM:SS+HH:MM`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

// ISO-8601 shapes outside RFC 3339: basic or hour-only offsets, no seconds
const ISO_8601_FALLBACKS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// Parse an ISO-8601 timestamp that carries a UTC offset.
///
/// RFC 3339 is tried first; on failure its error is reported.
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, chrono::ParseError> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw).or_else(|err| {
        ISO_8601_FALLBACKS
            .iter()
            .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
            .ok_or(err)
    })
}

/// Operating airline
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Airline {
    name: String,
}

impl Airline {
    /// Create an airline with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Airline name
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Aircraft identified by its registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airplane {
    registration: String,
    airline: Airline,
}

impl Airplane {
    /// Create an airplane operated by `airline`
    pub fn new(registration: impl Into<String>, airline: Airline) -> Self {
        Self {
            registration: registration.into(),
            airline,
        }
    }

    /// Aircraft registration
    pub fn registration(&self) -> &str {
        &self.registration
    }

    /// Operating airline
    pub fn airline(&self) -> &Airline {
        &self.airline
    }
}

/// One completed flight.
///
/// `actual_end >= actual_start` and `scheduled_end >= scheduled_start` are
/// expected of well-formed input but not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    airplane: Airplane,
    from: String,
    to: String,
    scheduled_start: Timestamp,
    scheduled_end: Timestamp,
    actual_start: Timestamp,
    actual_end: Timestamp,
}

/// Serialized shape of a flight, one per JSONL line.
///
/// Every field is optional on the way in so that an absent field can be
/// reported by name instead of as a generic serde failure.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct FlightRecord {
    #[serde(default)]
    pub registration: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub scheduled_start: Option<String>,
    #[serde(default)]
    pub scheduled_end: Option<String>,
    #[serde(default)]
    pub actual_start: Option<String>,
    #[serde(default)]
    pub actual_end: Option<String>,
}

impl Flight {
    /// Create a flight from its parts
    pub fn new(
        airplane: Airplane,
        from: impl Into<String>,
        to: impl Into<String>,
        scheduled_start: Timestamp,
        scheduled_end: Timestamp,
        actual_start: Timestamp,
        actual_end: Timestamp,
    ) -> Self {
        Self {
            airplane,
            from: from.into(),
            to: to.into(),
            scheduled_start,
            scheduled_end,
            actual_start,
            actual_end,
        }
    }

    /// Aircraft that flew the flight
    pub fn airplane(&self) -> &Airplane {
        &self.airplane
    }

    /// Aircraft registration
    pub fn registration(&self) -> &str {
        self.airplane.registration()
    }

    /// Name of the operating airline
    pub fn airline_name(&self) -> &str {
        self.airplane.airline().name()
    }

    /// Origin code
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Destination code
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Scheduled departure
    pub fn scheduled_start(&self) -> Timestamp {
        self.scheduled_start
    }

    /// Scheduled arrival
    pub fn scheduled_end(&self) -> Timestamp {
        self.scheduled_end
    }

    /// Actual departure
    pub fn actual_start(&self) -> Timestamp {
        self.actual_start
    }

    /// Actual arrival
    pub fn actual_end(&self) -> Timestamp {
        self.actual_end
    }

    /// Whole minutes between actual departure and actual arrival.
    ///
    /// This is the total elapsed time, so a flight of 1h05 yields 65, not 5.
    pub fn actual_duration_minutes(&self) -> i64 {
        (self.actual_end - self.actual_start).num_minutes()
    }

    /// Signed arrival delay in whole minutes; negative for early arrivals
    pub fn arrival_delay_minutes(&self) -> i64 {
        (self.actual_end - self.scheduled_end).num_minutes()
    }

    /// True when the flight landed more than [`LANDING_THRESHOLD_MINUTES`] late.
    ///
    /// Exactly five minutes late is not a miss; early arrivals never are.
    pub fn is_landing_missed(&self) -> bool {
        self.arrival_delay_minutes() > LANDING_THRESHOLD_MINUTES
    }

    /// True when the actual arrival falls on a later calendar date than the
    /// scheduled arrival, each read in its own UTC offset.
    pub fn has_overnight_stay(&self) -> bool {
        self.actual_end.date_naive() > self.scheduled_end.date_naive()
    }

    pub(crate) fn to_record(&self) -> FlightRecord {
        let fmt = |ts: &Timestamp| Some(ts.format(TIMESTAMP_FORMAT).to_string());
        FlightRecord {
            registration: Some(self.registration().to_string()),
            from: Some(self.from.clone()),
            to: Some(self.to.clone()),
            scheduled_start: fmt(&self.scheduled_start),
            scheduled_end: fmt(&self.scheduled_end),
            actual_start: fmt(&self.actual_start),
            actual_end: fmt(&self.actual_end),
        }
    }

    /// Encode the flight as a single JSONL line (without the trailing newline).
    ///
    /// The airline name is not written; it is re-derived from the
    /// registration when the line is decoded.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.to_record())
    }
}
