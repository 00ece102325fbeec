use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid date: '{0}'")]
pub struct DateParseError(pub String);

/// Parse an optional date query parameter.
///
/// A missing or blank value means "no filter". Accepts `YYYY-MM-DD`, an
/// RFC 3339 timestamp (reduced to its UTC calendar date) or a naive
/// `YYYY-MM-DDTHH:MM:SS` timestamp.
pub fn parse_date_param(raw: Option<&str>) -> Result<Option<NaiveDate>, DateParseError> {
    let value = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(value) => value,
    };

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(Some(date));
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(Some(timestamp.with_timezone(&Utc).date_naive()));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|timestamp| Some(timestamp.date()))
        .map_err(|_| DateParseError(value.to_string()))
}
