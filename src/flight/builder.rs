use super::{parse_timestamp, Airline, Airplane, Flight, Timestamp};
use crate::error::ParseError;
use chrono::Duration;

/// Builder for creating flights without going through JSON
///
/// Timestamps are given as ISO-8601 text with a UTC offset. Relative
/// setters such as [`FlightBuilder::actual_duration`] resolve against the
/// corresponding start time at build time.
#[derive(Debug, Clone)]
pub struct FlightBuilder {
    registration: String,
    airline: String,
    from: String,
    to: String,
    scheduled_start: Option<Timestamp>,
    scheduled_end: Option<Timestamp>,
    actual_start: Option<Timestamp>,
    actual_end: Option<Timestamp>,
    scheduled_minutes: Option<i64>,
    actual_minutes: Option<i64>,
    error: Option<ParseError>,
}

impl FlightBuilder {
    /// Create a new FlightBuilder with placeholder identity fields
    pub fn new() -> Self {
        Self {
            registration: "Test Registration".to_string(),
            airline: "Test Airline".to_string(),
            from: "Test Airport From".to_string(),
            to: "Test Airport To".to_string(),
            scheduled_start: None,
            scheduled_end: None,
            actual_start: None,
            actual_end: None,
            scheduled_minutes: None,
            actual_minutes: None,
            error: None,
        }
    }

    /// Set the aircraft registration
    pub fn registration(mut self, registration: impl Into<String>) -> Self {
        self.registration = registration.into();
        self
    }

    /// Set the operating airline's name
    pub fn airline(mut self, airline: impl Into<String>) -> Self {
        self.airline = airline.into();
        self
    }

    /// Set the origin
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    /// Set the destination
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = to.into();
        self
    }

    /// Set the scheduled departure from ISO-8601 text
    pub fn scheduled_start(mut self, ts: &str) -> Self {
        self.scheduled_start = self.parse("scheduled_start", ts);
        self
    }

    /// Set the scheduled arrival from ISO-8601 text
    pub fn scheduled_end(mut self, ts: &str) -> Self {
        self.scheduled_end = self.parse("scheduled_end", ts);
        self
    }

    /// Set the actual departure from ISO-8601 text
    pub fn actual_start(mut self, ts: &str) -> Self {
        self.actual_start = self.parse("actual_start", ts);
        self
    }

    /// Set the actual arrival from ISO-8601 text
    pub fn actual_end(mut self, ts: &str) -> Self {
        self.actual_end = self.parse("actual_end", ts);
        self
    }

    /// Schedule the arrival `minutes` after the scheduled departure
    pub fn scheduled_duration(mut self, minutes: i64) -> Self {
        self.scheduled_minutes = Some(minutes);
        self
    }

    /// Land `minutes` after the actual departure
    pub fn actual_duration(mut self, minutes: i64) -> Self {
        self.actual_minutes = Some(minutes);
        self
    }

    fn parse(&mut self, field: &'static str, ts: &str) -> Option<Timestamp> {
        match parse_timestamp(ts) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                self.error.get_or_insert(ParseError::invalid_timestamp(field, ts, e));
                None
            }
        }
    }

    /// Build the Flight
    pub fn build(self) -> Result<Flight, ParseError> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let scheduled_start = self
            .scheduled_start
            .ok_or(ParseError::MissingField { field: "scheduled_start" })?;
        let scheduled_end = match (self.scheduled_end, self.scheduled_minutes) {
            (Some(end), _) => end,
            (None, Some(minutes)) => scheduled_start + Duration::minutes(minutes),
            (None, None) => return Err(ParseError::MissingField { field: "scheduled_end" }),
        };
        let actual_start = self
            .actual_start
            .ok_or(ParseError::MissingField { field: "actual_start" })?;
        let actual_end = match (self.actual_end, self.actual_minutes) {
            (Some(end), _) => end,
            (None, Some(minutes)) => actual_start + Duration::minutes(minutes),
            (None, None) => return Err(ParseError::MissingField { field: "actual_end" }),
        };

        Ok(Flight::new(
            Airplane::new(self.registration, Airline::new(self.airline)),
            self.from,
            self.to,
            scheduled_start,
            scheduled_end,
            actual_start,
            actual_end,
        ))
    }
}

impl Default for FlightBuilder {
    fn default() -> Self {
        Self::new()
    }
}
