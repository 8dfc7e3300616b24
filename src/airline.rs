//! Registration to airline name resolution

/// Name returned when no fleet prefix matches a registration
pub const UNKNOWN_AIRLINE: &str = "Unknown Airline";

/// Fleet registration prefixes and the airline operating them.
///
/// Lookups pick the longest matching prefix, so more specific fleet blocks
/// may sit alongside a national prefix.
const FLEET_PREFIXES: &[(&str, &str)] = &[
    ("D-AI", "Lufthansa"),
    ("D-AB", "Eurowings"),
    ("EI-", "Aer Lingus"),
    ("EI-D", "Ryanair"),
    ("EI-E", "Ryanair"),
    ("EI-F", "Ryanair"),
    ("F-G", "Air France"),
    ("F-H", "Air France"),
    ("G-EU", "British Airways"),
    ("G-GB", "British Airways"),
    ("G-EZ", "easyJet"),
    ("G-UZ", "easyJet"),
    ("PH-", "KLM"),
    ("EC-", "Iberia"),
    ("HB-J", "Swiss International Air Lines"),
    ("OE-L", "Austrian Airlines"),
    ("SE-R", "Scandinavian Airlines"),
    ("LN-", "Norwegian Air Shuttle"),
    ("TC-J", "Turkish Airlines"),
    ("A6-E", "Emirates"),
    ("N", "American Airlines"),
];

/// Resolves an aircraft registration to the operating airline's name.
///
/// Resolution always succeeds; implementations fall back to a placeholder
/// name for unknown registrations.
pub trait AirlineLookup {
    /// Airline name for `registration`
    fn lookup(&self, registration: &str) -> String;
}

impl<F> AirlineLookup for F
where
    F: Fn(&str) -> String,
{
    fn lookup(&self, registration: &str) -> String {
        self(registration)
    }
}

/// Lookup backed by the built-in fleet prefix table
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAirlineLookup;

impl StaticAirlineLookup {
    /// Create a new static lookup
    pub fn new() -> Self {
        Self
    }
}

impl AirlineLookup for StaticAirlineLookup {
    fn lookup(&self, registration: &str) -> String {
        let registration = registration.trim().to_ascii_uppercase();
        FLEET_PREFIXES
            .iter()
            .filter(|(prefix, _)| registration.starts_with(prefix))
            .max_by_key(|(prefix, _)| prefix.len())
            .map_or(UNKNOWN_AIRLINE, |&(_, airline)| airline)
            .to_string()
    }
}
