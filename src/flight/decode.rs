use super::{parse_timestamp, Airline, Airplane, Flight, FlightRecord, Timestamp};
use crate::airline::{AirlineLookup, StaticAirlineLookup};
use crate::error::ParseError;

/// Decodes JSONL lines into [`Flight`] values.
///
/// The decoder holds no state besides the airline lookup, so one instance
/// can decode any number of lines. A line either yields a complete flight
/// or a [`ParseError`]; partial records are never produced.
#[derive(Debug, Clone, Default)]
pub struct FlightDecoder<L = StaticAirlineLookup> {
    lookup: L,
}

impl FlightDecoder<StaticAirlineLookup> {
    /// Decoder using the built-in fleet table
    pub fn new() -> Self {
        Self::with_lookup(StaticAirlineLookup::new())
    }
}

impl<L: AirlineLookup> FlightDecoder<L> {
    /// Decoder resolving airlines through `lookup`
    pub fn with_lookup(lookup: L) -> Self {
        Self { lookup }
    }

    /// Decode one line of JSON text
    pub fn decode(&self, line: &str) -> Result<Flight, ParseError> {
        if line.trim().is_empty() {
            return Err(ParseError::EmptyLine);
        }

        let record: FlightRecord =
            serde_json::from_str(line).map_err(|e| ParseError::malformed(e.to_string()))?;

        let registration = required("registration", record.registration)?;
        let from = required("from", record.from)?;
        let to = required("to", record.to)?;
        let scheduled_start = timestamp("scheduled_start", record.scheduled_start)?;
        let scheduled_end = timestamp("scheduled_end", record.scheduled_end)?;
        let actual_start = timestamp("actual_start", record.actual_start)?;
        let actual_end = timestamp("actual_end", record.actual_end)?;

        let airline = Airline::new(self.lookup.lookup(&registration));

        Ok(Flight::new(
            Airplane::new(registration, airline),
            from,
            to,
            scheduled_start,
            scheduled_end,
            actual_start,
            actual_end,
        ))
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ParseError> {
    value.ok_or(ParseError::MissingField { field })
}

fn timestamp(field: &'static str, value: Option<String>) -> Result<Timestamp, ParseError> {
    let raw = required(field, value)?;
    parse_timestamp(&raw).map_err(|e| ParseError::invalid_timestamp(field, raw.as_str(), e))
}
