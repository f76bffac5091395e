//! Length-bounded identifier strings (`CiString` in OCPP parlance).

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LengthViolation;

/// A protocol identifier string holding at most `N` characters.
///
/// The bound differs per field, so a value legal for one field may be
/// illegal for another even within the same message; it is therefore
/// re-checked on every construction rather than only at the wire
/// boundary. Comparison, ordering and hashing delegate to the underlying
/// string, so the value can key maps interchangeably with `&str`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CiString<const N: usize>(String);

impl<const N: usize> CiString<N> {
    /// Maximum number of characters this type accepts.
    pub const MAX_LENGTH: usize = N;

    /// Builds a bounded string, rejecting input longer than `N`
    /// characters. Never truncates.
    pub fn new(value: impl Into<String>) -> Result<Self, LengthViolation> {
        let value = value.into();
        if value.len() > N {
            return Err(LengthViolation {
                limit: N,
                length: value.len(),
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl<const N: usize> fmt::Display for CiString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<const N: usize> AsRef<str> for CiString<N> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> Borrow<str> for CiString<N> {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> TryFrom<String> for CiString<N> {
    type Error = LengthViolation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<const N: usize> TryFrom<&str> for CiString<N> {
    type Error = LengthViolation;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<const N: usize> FromStr for CiString<N> {
    type Err = LengthViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<const N: usize> Serialize for CiString<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de, const N: usize> Deserialize<'de> for CiString<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn accepts_up_to_the_bound() {
        let value = "a".repeat(20);
        let s: CiString<20> = CiString::new(value.clone()).unwrap();
        assert_eq!(s.as_str(), value);
    }

    #[test]
    fn rejects_one_past_the_bound() {
        let err = CiString::<20>::new("a".repeat(21)).unwrap_err();
        assert_eq!(err.limit, 20);
        assert_eq!(err.length, 21);
    }

    #[test]
    fn deserialization_revalidates() {
        let ok: Result<CiString<5>, _> = serde_json::from_str("\"hello\"");
        assert!(ok.is_ok());

        let err: Result<CiString<5>, _> = serde_json::from_str("\"toolong\"");
        let message = err.unwrap_err().to_string();
        assert!(message.contains("maximum of 5"), "got: {message}");
    }

    #[test]
    fn serializes_as_the_raw_string() {
        let s: CiString<36> = "tag-001".parse().unwrap();
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"tag-001\"");
    }

    #[test]
    fn keys_maps_like_a_plain_string() {
        let mut map: HashMap<CiString<20>, i32> = HashMap::new();
        map.insert("RFID123".parse().unwrap(), 7);
        assert_eq!(map.get("RFID123"), Some(&7));
    }
}
