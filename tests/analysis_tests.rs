//! End-to-end analysis over on-disk JSONL datasets

use flight_stats::{analyze_file, Flight, FlightAnalyzer, FlightBuilder};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn flight_with_actual_duration(minutes: i64) -> Flight {
    FlightBuilder::new()
        .registration("Test Registration")
        .scheduled_start("2023-01-01T10:00:00+00:00")
        .scheduled_duration(minutes)
        .actual_start("2023-01-01T10:00:00+00:00")
        .actual_duration(minutes)
        .build()
        .unwrap()
}

fn flight_with_missed_landing(registration: &str) -> Flight {
    FlightBuilder::new()
        .registration(registration)
        .scheduled_start("2023-01-01T10:00:00+00:00")
        .scheduled_duration(60)
        .actual_start("2023-01-01T10:12:00+00:00")
        .actual_duration(60)
        .build()
        .unwrap()
}

fn flight_with_overnight_stay(to: &str) -> Flight {
    FlightBuilder::new()
        .to(to)
        .scheduled_start("2023-01-01T22:55:00+00:00")
        .scheduled_duration(60)
        .actual_start("2023-01-01T23:07:00+00:00")
        .actual_duration(55)
        .build()
        .unwrap()
}

fn dataset(flights: &[Flight]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for flight in flights {
        writeln!(file, "{}", flight.to_json_string().unwrap()).unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn test_top_three_longest_flights() {
    // all on schedule and landing the same day
    let file = dataset(&[
        flight_with_actual_duration(120),
        flight_with_actual_duration(180),
        flight_with_actual_duration(90),
    ]);

    let report = analyze_file(file.path()).unwrap();

    assert_eq!(
        report.to_string(),
        "Top Three Longest Flights:\n\
         Flight: Test Registration Duration: 180 minutes\n\
         Flight: Test Registration Duration: 120 minutes\n\
         Flight: Test Registration Duration: 90 minutes\n\
         Airline with Most Missed Landings:\n\
         No missed landings found.\n\
         Destination with Most Overnight Stays:\n\
         No flights with overnight stays found.\n"
    );
}

#[test]
fn test_only_three_flights_reported() {
    let file = dataset(&[
        flight_with_actual_duration(30),
        flight_with_actual_duration(300),
        flight_with_actual_duration(45),
        flight_with_actual_duration(240),
        flight_with_actual_duration(15),
    ]);

    let report = analyze_file(file.path()).unwrap();
    let durations: Vec<i64> = report.top_flights.iter().map(|f| f.duration_minutes).collect();

    assert_eq!(durations, vec![300, 240, 45]);
    assert_eq!(report.flights_processed, 5);
}

#[test]
fn test_airline_with_most_missed_landings() {
    // registrations resolve through the built-in fleet table
    let file = dataset(&[
        flight_with_missed_landing("D-AIBL"),
        flight_with_missed_landing("G-EUOE"),
        flight_with_missed_landing("D-AIMA"),
        flight_with_actual_duration(180),
    ]);

    let report = analyze_file(file.path()).unwrap();

    assert_eq!(report.missed_landings_line(), "Lufthansa");
    assert_eq!(report.most_missed_landings.unwrap().count, 2);
}

#[test]
fn test_missed_landing_tie_goes_to_first_airline_seen() {
    let file = dataset(&[
        flight_with_missed_landing("G-EUOE"),
        flight_with_missed_landing("D-AIBL"),
        flight_with_missed_landing("D-AIMA"),
        flight_with_missed_landing("G-EUPA"),
    ]);

    let report = analyze_file(file.path()).unwrap();
    assert_eq!(report.missed_landings_line(), "British Airways");
}

#[test]
fn test_destination_with_most_overnight_stays() {
    let file = dataset(&[
        flight_with_overnight_stay("Test Airport To"),
        flight_with_overnight_stay("Test Airport To"),
        flight_with_overnight_stay("Elsewhere"),
        flight_with_actual_duration(180),
    ]);

    let report = analyze_file(file.path()).unwrap();

    assert_eq!(report.overnight_stays_line(), "Test Airport To");
    assert_eq!(report.most_overnight_stays.unwrap().count, 2);
}

#[test]
fn test_custom_lookup_end_to_end() {
    let file = dataset(&[
        flight_with_missed_landing("ABC-1"),
        flight_with_missed_landing("XYZ-9"),
        flight_with_missed_landing("ABC-2"),
    ]);

    let analyzer = FlightAnalyzer::with_lookup(|registration: &str| {
        registration.split('-').next().unwrap_or_default().to_string()
    });
    let report = analyzer.analyze_file(file.path()).unwrap();

    assert_eq!(report.missed_landings_line(), "ABC");
}

#[test]
fn test_empty_file_reports_fallbacks() {
    let file = dataset(&[]);
    let report = analyze_file(file.path()).unwrap();

    assert!(report.top_flights.is_empty());
    assert_eq!(report.missed_landings_line(), "No missed landings found.");
    assert_eq!(report.overnight_stays_line(), "No flights with overnight stays found.");
}

#[test]
fn test_file_without_trailing_newline() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", flight_with_actual_duration(75).to_json_string().unwrap()).unwrap();
    file.flush().unwrap();

    let report = analyze_file(file.path()).unwrap();
    assert_eq!(report.top_flights.len(), 1);
    assert_eq!(report.top_flights[0].duration_minutes, 75);
}
