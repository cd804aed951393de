//! The single textual layout used for every timestamp, on the wire and in the
//! database.
//!
//! SQLite produces the same layout with `strftime('%Y-%m-%dT%H:%M:%fZ')`, so
//! values written by the store compare and parse identically to values
//! written by the API.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{Error, Result};

/// UTC, millisecond precision, literal `Z` suffix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

pub fn format_timestamp(at: DateTime<Utc>) -> String {
  at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
  NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
    .map(|naive| naive.and_utc())
    .map_err(|source| Error::Timestamp {
      value: value.to_owned(),
      source,
    })
}

/// `#[serde(with = "...")]` adapter for optional timestamps.
pub mod option {
  use chrono::{DateTime, Utc};
  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S>(
    value: &Option<DateTime<Utc>>,
    serializer: S,
  ) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match value {
      Some(at) => serializer.serialize_some(&super::format_timestamp(*at)),
      None => serializer.serialize_none(),
    }
  }

  pub fn deserialize<'de, D>(
    deserializer: D,
  ) -> Result<Option<DateTime<Utc>>, D::Error>
  where
    D: Deserializer<'de>,
  {
    Option::<String>::deserialize(deserializer)?
      .map(|s| super::parse_timestamp(&s).map_err(serde::de::Error::custom))
      .transpose()
  }
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Timelike};

  use super::*;

  #[test]
  fn format_matches_sqlite_layout() {
    let at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
    let at = at.with_nanosecond(42_000_000).unwrap();
    assert_eq!(format_timestamp(at), "2024-03-09T07:05:01.042Z");
  }

  #[test]
  fn parse_inverts_format() {
    let parsed = parse_timestamp("2023-12-31T23:59:59.999Z").unwrap();
    assert_eq!(format_timestamp(parsed), "2023-12-31T23:59:59.999Z");
  }

  #[test]
  fn parse_rejects_other_layouts() {
    assert!(parse_timestamp("2023-12-31 23:59:59").is_err());
    assert!(parse_timestamp("2023-12-31T23:59:59+00:00").is_err());
  }

  #[derive(serde::Serialize, serde::Deserialize)]
  struct Stamped {
    #[serde(default, with = "super::option")]
    at: Option<DateTime<Utc>>,
  }

  #[test]
  fn serde_adapter_uses_canonical_layout() {
    let stamped: Stamped =
      serde_json::from_str(r#"{"at":"2024-01-02T03:04:05.006Z"}"#).unwrap();
    let json = serde_json::to_string(&stamped).unwrap();
    assert_eq!(json, r#"{"at":"2024-01-02T03:04:05.006Z"}"#);

    let missing: Stamped = serde_json::from_str("{}").unwrap();
    assert!(missing.at.is_none());
  }
}
