// tests/support/mocks/time.rs
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| at("2024-01-01T00:00:00Z"));

/// Deterministic "now" shared by every test clock.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

pub fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("invalid RFC3339 in test fixture")
        .with_timezone(&Utc)
}
