use super::{FrequencyCounter, TopKTracker};
use crate::flight::Flight;
use crate::report::Reporter;
use tracing::trace;

/// Number of longest flights retained
pub const TOP_FLIGHTS: usize = 3;

/// The three aggregates of an analysis run
#[derive(Debug, Clone)]
pub struct AggregateState {
    /// Longest flights by actual duration
    pub longest_flights: TopKTracker<Flight>,
    /// Missed landings keyed by airline name
    pub missed_landings: FrequencyCounter<String>,
    /// Overnight stays keyed by destination
    pub overnight_stays: FrequencyCounter<String>,
}

impl Default for AggregateState {
    fn default() -> Self {
        Self {
            longest_flights: TopKTracker::new(TOP_FLIGHTS),
            missed_landings: FrequencyCounter::new(),
            overnight_stays: FrequencyCounter::new(),
        }
    }
}

/// Single-pass fold of flights into the three aggregates.
///
/// A fresh aggregator is built per run; it owns nothing but the aggregates.
#[derive(Debug, Clone, Default)]
pub struct FlightAggregator {
    state: AggregateState,
}

impl FlightAggregator {
    /// Create an aggregator with empty aggregates
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from previously built aggregates
    pub fn from_parts(state: AggregateState) -> Self {
        Self { state }
    }

    /// Hand back the aggregates
    pub fn into_parts(self) -> AggregateState {
        self.state
    }

    /// Number of flights folded so far
    pub fn processed(&self) -> u64 {
        self.state.longest_flights.offered()
    }

    /// Fold one flight into every aggregate
    pub fn process(&mut self, flight: Flight) {
        let duration = flight.actual_duration_minutes();
        let missed = flight.is_landing_missed();
        let overnight = flight.has_overnight_stay();

        trace!(
            registration = flight.registration(),
            duration,
            missed,
            overnight,
            "processing flight"
        );

        if missed {
            self.state
                .missed_landings
                .increment(flight.airline_name().to_string());
        }
        if overnight {
            self.state.overnight_stays.increment(flight.to().to_string());
        }
        self.state.longest_flights.offer(flight, duration);
    }

    /// Fold a whole sequence of flights
    pub fn process_all<I>(&mut self, flights: I)
    where
        I: IntoIterator<Item = Flight>,
    {
        for flight in flights {
            self.process(flight);
        }
    }

    /// Combine with an aggregator that folded the continuation of this
    /// aggregator's stream
    pub fn merge(&mut self, other: FlightAggregator) {
        let other = other.into_parts();
        self.state.longest_flights.merge(other.longest_flights);
        self.state.missed_landings.merge(other.missed_landings);
        self.state.overnight_stays.merge(other.overnight_stays);
    }

    /// Stop aggregating and hand the state to a [`Reporter`]
    pub fn finish(self) -> Reporter {
        Reporter::new(self.state)
    }
}
