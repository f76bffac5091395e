//! Property tests for the primitive value types
//!
//! Invariants covered:
//! - DateTime: format/parse identity, UTC normalization, ordering
//! - CiString: bound-N acceptance, bound-N+1 rejection, string equality
//! - Enumerations: exact-match parsing, unknown-token rejection

use std::str::FromStr;

use ocpp_messages::v201::enums::RegistrationStatus;
use ocpp_messages::{CiString, DateTime};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Instants between 1970 and 2100, at the codec's millisecond precision
fn datetime_strategy() -> impl Strategy<Value = DateTime> {
    (0i64..4_102_444_800_000i64).prop_map(|millis| {
        DateTime::new(chrono::DateTime::from_timestamp_millis(millis).unwrap())
    })
}

/// Identifier-shaped strings within a 20-character bound
fn bounded_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9._-]{0,20}"
}

// ============================================================================
// DateTime Property Tests
// ============================================================================

proptest! {
    /// Formatting then parsing yields an equal value
    #[test]
    fn datetime_format_parse_identity(t in datetime_strategy()) {
        let formatted = t.to_rfc3339();
        let reparsed = DateTime::from_rfc3339(&formatted).unwrap();
        prop_assert_eq!(reparsed, t);
    }

    /// Formatted output always carries the explicit UTC designator
    #[test]
    fn datetime_format_is_utc_designated(t in datetime_strategy()) {
        prop_assert!(t.to_rfc3339().ends_with('Z'));
    }

    /// The same instant expressed with a numeric offset parses equal
    #[test]
    fn datetime_offset_normalizes_to_utc(t in datetime_strategy()) {
        let offset_form = t
            .instant()
            .with_timezone(&chrono::FixedOffset::east_opt(2 * 3600).unwrap())
            .to_rfc3339();
        let reparsed = DateTime::from_rfc3339(&offset_form).unwrap();
        prop_assert_eq!(reparsed, t);
    }

    /// Ordering matches the underlying instants
    #[test]
    fn datetime_ordering_matches_instants(
        a in datetime_strategy(),
        b in datetime_strategy()
    ) {
        prop_assert_eq!(a < b, a.instant() < b.instant());
        prop_assert_eq!(a == b, a.instant() == b.instant());
    }
}

// ============================================================================
// CiString Property Tests
// ============================================================================

proptest! {
    /// Anything within the bound is accepted verbatim
    #[test]
    fn cistring_accepts_within_bound(text in bounded_text()) {
        let value: CiString<20> = CiString::new(text.clone()).unwrap();
        prop_assert_eq!(value.as_str(), text.as_str());
    }

    /// Anything one past the bound is rejected, never truncated
    #[test]
    fn cistring_rejects_past_bound(text in "[A-Za-z0-9]{21}") {
        let err = CiString::<20>::new(text).unwrap_err();
        prop_assert_eq!(err.limit, 20);
        prop_assert_eq!(err.length, 21);
    }

    /// Serde deserialization applies the same bound as direct construction
    #[test]
    fn cistring_serde_matches_construction(text in "[A-Za-z0-9]{0,30}") {
        let wire = serde_json::to_string(&text).unwrap();
        let direct = CiString::<20>::new(text);
        let decoded: Result<CiString<20>, _> = serde_json::from_str(&wire);
        prop_assert_eq!(direct.is_ok(), decoded.is_ok());
    }
}

// ============================================================================
// Enumeration Property Tests
// ============================================================================

proptest! {
    /// Lower-case garbage never matches the capitalized vocabulary
    #[test]
    fn enums_reject_unknown_tokens(token in "[a-z]{1,12}") {
        let err = RegistrationStatus::from_str(&token).unwrap_err();
        prop_assert_eq!(err.value, token);
    }
}

#[test]
fn enums_round_trip_exhaustively() {
    for status in RegistrationStatus::ALL {
        assert_eq!(RegistrationStatus::from_str(status.as_str()), Ok(*status));
    }
}
