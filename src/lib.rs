//! Single-pass batch analysis of completed flights
//!
//! This library reads a line-delimited JSON log of flights and, in one pass
//! with bounded memory, finds the three longest flights by actual duration,
//! the airline with the most missed landings and the destination with the
//! most overnight stays.
//!
//! # Example
//!
//! ```no_run
//! use flight_stats::FlightAnalyzer;
//!
//! # fn example() -> flight_stats::Result<()> {
//! let report = FlightAnalyzer::new().analyze_file("var/input.jsonl")?;
//! print!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! # Custom airline resolution
//!
//! ```
//! use flight_stats::FlightAnalyzer;
//!
//! let line = r#"{"registration":"X-1","from":"A","to":"B","scheduled_start":"2023-01-01T10:00:00+00:00","scheduled_end":"2023-01-01T11:00:00+00:00","actual_start":"2023-01-01T10:00:00+00:00","actual_end":"2023-01-01T11:30:00+00:00"}"#;
//! let analyzer = FlightAnalyzer::with_lookup(|_: &str| "Charter Co".to_string());
//! let report = analyzer.analyze_reader(line.as_bytes()).unwrap();
//! assert_eq!(report.missed_landings_line(), "Charter Co");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

// Re-export commonly used items
pub use aggregation::{FlightAggregator, FrequencyCounter, TopKTracker};
pub use airline::{AirlineLookup, StaticAirlineLookup};
pub use config::{AnalysisConfig, LogConfig, OutputFormat};
pub use error::{AnalysisError, ParseError, Result};
pub use flight::{Flight, FlightBuilder, FlightDecoder};
pub use report::{Report, Reporter};
pub use source::FlightSource;

/// Error types
pub mod error;

/// Registration to airline name resolution
pub mod airline;

/// Flight records and domain calculations
pub mod flight;

/// Top-K tracking, frequency counting and the aggregation fold
pub mod aggregation;

/// Report extraction and rendering
pub mod report;

/// JSONL input
pub mod source;

/// Run configuration
pub mod config;

use std::io::BufRead;
use std::path::Path;
use tracing::info;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the tracing subscriber.
///
/// Logs go to stderr so stdout carries only the report. `RUST_LOG` takes
/// precedence over `config.level`. Calling this more than once is a no-op.
pub fn init_tracing(config: &LogConfig) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);

    let _ = if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
}

/// Runs the decode, aggregate and report pipeline over a flight log
#[derive(Debug, Clone, Default)]
pub struct FlightAnalyzer<L = StaticAirlineLookup> {
    decoder: FlightDecoder<L>,
}

impl FlightAnalyzer<StaticAirlineLookup> {
    /// Analyzer using the built-in airline table
    pub fn new() -> Self {
        Self {
            decoder: FlightDecoder::new(),
        }
    }
}

impl<L: AirlineLookup + Clone> FlightAnalyzer<L> {
    /// Analyzer resolving airlines through `lookup`
    pub fn with_lookup(lookup: L) -> Self {
        Self {
            decoder: FlightDecoder::with_lookup(lookup),
        }
    }

    /// Analyse a JSONL dataset file
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<Report> {
        let path = path.as_ref();
        info!(path = %path.display(), "analysing dataset");
        self.analyze(FlightSource::open_with(path, self.decoder.clone())?)
    }

    /// Analyse JSONL text from any buffered reader
    pub fn analyze_reader<R: BufRead>(&self, reader: R) -> Result<Report> {
        self.analyze(FlightSource::from_reader(reader, self.decoder.clone(), "<reader>"))
    }

    /// Fold already-decoded flights.
    ///
    /// The first error aborts the run; no partial report is produced.
    pub fn analyze<I>(&self, flights: I) -> Result<Report>
    where
        I: IntoIterator<Item = Result<Flight>>,
    {
        let mut aggregator = FlightAggregator::new();
        for flight in flights {
            aggregator.process(flight?);
        }

        let report = aggregator.finish().report();
        info!(
            flights = report.flights_processed,
            missed_landings_leader = report.most_missed_landings.as_ref().map(|l| l.name.as_str()),
            overnight_leader = report.most_overnight_stays.as_ref().map(|l| l.name.as_str()),
            "analysis complete"
        );
        Ok(report)
    }
}

/// Analyse a dataset file with the built-in airline table
pub fn analyze_file(path: impl AsRef<Path>) -> Result<Report> {
    FlightAnalyzer::new().analyze_file(path)
}

/// Render a report in the requested format
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(report.to_string()),
        OutputFormat::Json => Ok(report.to_json()? + "\n"),
    }
}
