//! RFC 3339 timestamps with a UTC-internal representation.

use std::fmt;
use std::str::FromStr;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TimestampParseError;

/// An instant in time, carried on the wire as an RFC 3339 string.
///
/// The value is truncated to whole milliseconds on every construction,
/// so `from_rfc3339(to_rfc3339(x)) == x` holds exactly and message
/// round-trips compare structurally equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(chrono::DateTime<Utc>);

impl DateTime {
    /// Current system time. The only non-pure constructor; codec paths
    /// never call it implicitly.
    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    /// Wraps an explicit instant.
    pub fn new(instant: chrono::DateTime<Utc>) -> Self {
        let sub_ms = instant.timestamp_subsec_nanos() % 1_000_000;
        Self(instant - chrono::Duration::nanoseconds(i64::from(sub_ms)))
    }

    /// Parses an RFC 3339 string, accepting `Z` or a numeric offset and
    /// optional fractional seconds, and normalizes to UTC.
    ///
    /// Non-conformant input is an error carrying the offending string;
    /// it is never defaulted to the current time.
    pub fn from_rfc3339(value: &str) -> Result<Self, TimestampParseError> {
        chrono::DateTime::parse_from_rfc3339(value)
            .map(|parsed| Self::new(parsed.with_timezone(&Utc)))
            .map_err(|_| TimestampParseError(value.to_owned()))
    }

    /// Formats as RFC 3339 with millisecond precision and an explicit
    /// `Z` offset designator.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// The wrapped UTC instant.
    pub fn instant(&self) -> chrono::DateTime<Utc> {
        self.0
    }
}

impl From<chrono::DateTime<Utc>> for DateTime {
    fn from(instant: chrono::DateTime<Utc>) -> Self {
        Self::new(instant)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl FromStr for DateTime {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rfc3339(s)
    }
}

impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::from_rfc3339(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_utc_designator() {
        let t = DateTime::from_rfc3339("2024-01-05T10:15:30Z").unwrap();
        assert_eq!(t.to_rfc3339(), "2024-01-05T10:15:30.000Z");
    }

    #[test]
    fn rejects_missing_separator_and_offset() {
        let err = DateTime::from_rfc3339("2024-01-05 10:15:30").unwrap_err();
        assert_eq!(err.0, "2024-01-05 10:15:30");
    }

    #[test]
    fn numeric_offset_normalizes_to_utc() {
        let offset = DateTime::from_rfc3339("2024-01-05T12:15:30+02:00").unwrap();
        let zulu = DateTime::from_rfc3339("2024-01-05T10:15:30Z").unwrap();
        assert_eq!(offset, zulu);
    }

    #[test]
    fn keeps_sub_second_precision_to_the_millisecond() {
        let t = DateTime::from_rfc3339("2024-01-05T10:15:30.123456Z").unwrap();
        assert_eq!(t.to_rfc3339(), "2024-01-05T10:15:30.123Z");
    }

    #[test]
    fn format_then_parse_is_identity() {
        let t = DateTime::from_rfc3339("2031-07-14T23:59:59.999Z").unwrap();
        assert_eq!(DateTime::from_rfc3339(&t.to_rfc3339()).unwrap(), t);

        let now = DateTime::now();
        assert_eq!(DateTime::from_rfc3339(&now.to_rfc3339()).unwrap(), now);
    }

    #[test]
    fn orders_by_instant() {
        let early = DateTime::from_rfc3339("2024-01-05T10:15:30Z").unwrap();
        let late = DateTime::from_rfc3339("2024-01-05T10:15:31Z").unwrap();
        assert!(early < late);
        assert!(late >= early);
    }

    #[test]
    fn serde_round_trip() {
        let t = DateTime::from_rfc3339("2024-01-05T10:15:30.500Z").unwrap();
        let wire = serde_json::to_string(&t).unwrap();
        assert_eq!(wire, "\"2024-01-05T10:15:30.500Z\"");
        assert_eq!(serde_json::from_str::<DateTime>(&wire).unwrap(), t);
    }

    #[test]
    fn deserialization_fails_on_non_conformant_input() {
        let err = serde_json::from_str::<DateTime>("\"05/01/2024\"").unwrap_err();
        assert!(err.to_string().contains("05/01/2024"));
    }
}
