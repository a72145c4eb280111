//! Client-supplied list filters, validated once at the boundary.
//!
//! Replaces the ad-hoc duck-typed query object of a typical request layer
//! with an explicit structure: absent filters contribute no predicate term,
//! and "supplied but empty" is normalized to "not supplied" for keywords.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use sessionhub_commons::SessionStatus;

/// Optional filters for session listing.
///
/// `status` is only honored in owned scope; the query builder actively
/// overrides it in public scope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionFilters {
    /// Case-insensitive substring to match against title or content URL.
    pub keyword: Option<String>,
    /// Status restriction (owned scope only).
    pub status: Option<SessionStatus>,
    /// Inclusive lower bound on `created_at`, at its literal instant.
    pub start_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created_at`, as a calendar day.
    pub end_date: Option<NaiveDate>,
}

/// Parses a start-date parameter.
///
/// Accepts an RFC 3339 timestamp (taken at its literal instant), a naive
/// timestamp (interpreted as UTC), or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_start_date(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(format!("Invalid start date '{}'", raw))
}

/// Parses an end-date parameter as a calendar day.
///
/// A full timestamp is accepted but truncated to its date: the bound covers
/// that entire day (the query builder widens it to 23:59:59.999).
pub fn parse_end_date(raw: &str) -> Result<NaiveDate, String> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc).date_naive());
    }
    Err(format!("Invalid end date '{}'", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn start_date_accepts_bare_date_as_midnight() {
        let parsed = parse_start_date("2024-01-05").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn start_date_accepts_rfc3339_instant() {
        let parsed = parse_start_date("2024-01-05T10:30:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap());
    }

    #[test]
    fn end_date_truncates_to_calendar_day() {
        let from_date = parse_end_date("2024-01-05").unwrap();
        let from_instant = parse_end_date("2024-01-05T10:30:00Z").unwrap();
        assert_eq!(from_date, from_instant);
    }

    #[test]
    fn garbage_dates_rejected() {
        assert!(parse_start_date("yesterday").is_err());
        assert!(parse_end_date("05/01/2024").is_err());
    }
}
