//! Final answers extracted from the aggregates, and their text rendering

use crate::aggregation::{AggregateState, FrequencyCounter};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown when no flight landed late
pub const NO_MISSED_LANDINGS: &str = "No missed landings found.";

/// Shown when no flight stayed overnight
pub const NO_OVERNIGHT_STAYS: &str = "No flights with overnight stays found.";

/// One of the longest flights
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedFlight {
    /// Aircraft registration
    pub registration: String,
    /// Actual duration in whole minutes
    pub duration_minutes: i64,
}

/// Key that reached the highest count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    /// Airline name or destination
    pub name: String,
    /// Number of occurrences
    pub count: u64,
}

/// Outcome of an analysis run.
///
/// `Display` renders the fixed text layout consumed downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Longest flights, longest first
    pub top_flights: Vec<RankedFlight>,
    /// Airline with the most missed landings
    pub most_missed_landings: Option<Leader>,
    /// Destination with the most overnight stays
    pub most_overnight_stays: Option<Leader>,
    /// Number of flights analysed
    pub flights_processed: u64,
}

impl Report {
    /// Airline name, or the fallback text when nothing was missed
    pub fn missed_landings_line(&self) -> &str {
        self.most_missed_landings
            .as_ref()
            .map_or(NO_MISSED_LANDINGS, |leader| leader.name.as_str())
    }

    /// Destination, or the fallback text when nobody stayed overnight
    pub fn overnight_stays_line(&self) -> &str {
        self.most_overnight_stays
            .as_ref()
            .map_or(NO_OVERNIGHT_STAYS, |leader| leader.name.as_str())
    }

    /// Render as pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Top Three Longest Flights:")?;
        for flight in &self.top_flights {
            writeln!(
                f,
                "Flight: {} Duration: {} minutes",
                flight.registration, flight.duration_minutes
            )?;
        }
        writeln!(f, "Airline with Most Missed Landings:")?;
        writeln!(f, "{}", self.missed_landings_line())?;
        writeln!(f, "Destination with Most Overnight Stays:")?;
        writeln!(f, "{}", self.overnight_stays_line())
    }
}

/// Turns final aggregate state into a [`Report`]
#[derive(Debug)]
pub struct Reporter {
    state: AggregateState,
}

impl Reporter {
    /// Wrap the aggregates of a finished run
    pub fn new(state: AggregateState) -> Self {
        Self { state }
    }

    /// Drain the longest flights, longest first.
    ///
    /// Draining empties the tracker, so a second call returns nothing.
    pub fn top_flights(&mut self) -> Vec<RankedFlight> {
        self.state
            .longest_flights
            .drain()
            .into_iter()
            .map(|ranked| RankedFlight {
                registration: ranked.item.registration().to_string(),
                duration_minutes: ranked.duration,
            })
            .collect()
    }

    /// Airline with the most missed landings, or the fallback text
    pub fn most_missed_landings_airline(&self) -> String {
        leader(&self.state.missed_landings)
            .map_or_else(|| NO_MISSED_LANDINGS.to_string(), |leader| leader.name)
    }

    /// Destination with the most overnight stays, or the fallback text
    pub fn most_overnight_stays_destination(&self) -> String {
        leader(&self.state.overnight_stays)
            .map_or_else(|| NO_OVERNIGHT_STAYS.to_string(), |leader| leader.name)
    }

    /// Build the complete report, consuming the aggregates
    pub fn report(mut self) -> Report {
        let flights_processed = self.state.longest_flights.offered();
        Report {
            top_flights: self.top_flights(),
            most_missed_landings: leader(&self.state.missed_landings),
            most_overnight_stays: leader(&self.state.overnight_stays),
            flights_processed,
        }
    }
}

fn leader(counter: &FrequencyCounter<String>) -> Option<Leader> {
    counter.argmax().map(|(name, count)| Leader {
        name: name.clone(),
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::FlightAggregator;
    use crate::flight::FlightBuilder;
    use pretty_assertions::assert_eq;

    fn flight(registration: &str, minutes: i64) -> crate::flight::Flight {
        FlightBuilder::new()
            .registration(registration)
            .scheduled_start("2023-01-01T10:00:00+00:00")
            .scheduled_duration(minutes)
            .actual_start("2023-01-01T10:00:00+00:00")
            .actual_duration(minutes)
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_report_uses_fallbacks() {
        let report = FlightAggregator::new().finish().report();

        assert_eq!(
            report.to_string(),
            "Top Three Longest Flights:\n\
             Airline with Most Missed Landings:\n\
             No missed landings found.\n\
             Destination with Most Overnight Stays:\n\
             No flights with overnight stays found.\n"
        );
        assert_eq!(report.flights_processed, 0);
    }

    #[test]
    fn test_reporter_operations() {
        let mut aggregator = FlightAggregator::new();
        aggregator.process(flight("G-EUOE", 120));
        aggregator.process(flight("D-AIBL", 180));
        aggregator.process(flight("EI-DCL", 90));

        let mut reporter = aggregator.finish();
        assert_eq!(reporter.most_missed_landings_airline(), NO_MISSED_LANDINGS);
        assert_eq!(reporter.most_overnight_stays_destination(), NO_OVERNIGHT_STAYS);

        let top: Vec<_> = reporter
            .top_flights()
            .into_iter()
            .map(|f| (f.registration, f.duration_minutes))
            .collect();
        assert_eq!(
            top,
            vec![
                ("D-AIBL".to_string(), 180),
                ("G-EUOE".to_string(), 120),
                ("EI-DCL".to_string(), 90),
            ]
        );
        assert!(reporter.top_flights().is_empty());
    }

    #[test]
    fn test_display_with_leaders() {
        let report = Report {
            top_flights: vec![RankedFlight {
                registration: "PH-BXA".to_string(),
                duration_minutes: 75,
            }],
            most_missed_landings: Some(Leader {
                name: "KLM".to_string(),
                count: 4,
            }),
            most_overnight_stays: Some(Leader {
                name: "AMS".to_string(),
                count: 2,
            }),
            flights_processed: 9,
        };

        assert_eq!(
            report.to_string(),
            "Top Three Longest Flights:\n\
             Flight: PH-BXA Duration: 75 minutes\n\
             Airline with Most Missed Landings:\n\
             KLM\n\
             Destination with Most Overnight Stays:\n\
             AMS\n"
        );
    }

    #[test]
    fn test_json_rendering() {
        let report = FlightAggregator::new().finish().report();
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["top_flights"], serde_json::json!([]));
        assert_eq!(value["most_missed_landings"], serde_json::Value::Null);
        assert_eq!(value["flights_processed"], 0);
    }
}
