//! Save date from captured response headers.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::error::SiteError;

/// Calendar date a response was captured on.
///
/// Displays as `Mon Jan 01 2024` (weekday, month, zero-padded day, year).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveTimestamp {
    pub date: NaiveDate,
}

impl fmt::Display for SaveTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%a %b %d %Y"))
    }
}

/// Reads the `date` field of a header JSON object and keeps only its calendar date.
///
/// The key is matched exactly first, then ASCII case-insensitively. The value
/// may be a string or an array of strings (first used). Time of day and zone
/// are dropped; the date is the one in the header's own offset.
pub fn extract_saved_date(header_json: &str) -> Result<SaveTimestamp, SiteError> {
    let headers: Value = serde_json::from_str(header_json).map_err(|e| missing(e.to_string()))?;
    let headers = headers
        .as_object()
        .ok_or_else(|| missing("headers are not a JSON object"))?;

    let raw = headers
        .get("date")
        .or_else(|| {
            headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case("date"))
                .map(|(_, v)| v)
        })
        .ok_or_else(|| missing("no date field"))?;

    let text = match raw {
        Value::String(s) => s.as_str(),
        Value::Array(values) => values
            .first()
            .and_then(Value::as_str)
            .ok_or_else(|| missing("date field is an empty or non-string array"))?,
        _ => return Err(missing("date field is not a string")),
    };

    parse_http_date(text)
        .map(|date| SaveTimestamp { date })
        .ok_or_else(|| missing(format!("unrecognized date {text:?}")))
}

/// IMF-fixdate / RFC 2822, RFC 3339, then asctime.
fn parse_http_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%a %b %e %H:%M:%S %Y") {
        return Some(dt.date());
    }
    None
}

fn missing(reason: impl Into<String>) -> SiteError {
    SiteError::MissingDateHeader {
        reason: reason.into(),
    }
}
