//! Lenient date deserialization for request payloads.
//!
//! Clients send dates of birth either as plain calendar dates
//! (`1650-07-23`) or as full RFC 3339 timestamps
//! (`1650-07-23T00:00:00+00:00`). Timestamps keep the calendar date in their
//! own offset.

use chrono::{DateTime, NaiveDate};

/// Parses a calendar date or an RFC 3339 timestamp into a date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// Serde adapter for `Option<NaiveDate>` fields accepting either format.
///
/// Use with `#[serde(default, deserialize_with = "crate::utils::dates::optional_date::deserialize")]`.
pub mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt {
            None => Ok(None),
            Some(s) => super::parse_date(&s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid date: '{s}'"))),
        }
    }
}
