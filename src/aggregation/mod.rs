/// Bounded tracker of the longest durations
pub mod top_k;
/// Insertion-ordered occurrence counter
pub mod frequency;
/// Single-pass fold over flights
pub mod engine;

pub use engine::{AggregateState, FlightAggregator, TOP_FLIGHTS};
pub use frequency::FrequencyCounter;
pub use top_k::{Ranked, TopKTracker};
