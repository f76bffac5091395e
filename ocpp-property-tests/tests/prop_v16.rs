//! Round-trip properties for 1.6 messages
//!
//! For every generated message M: from_wire(to_wire(M)) == M, and unset
//! optional fields never appear in the wire object.

use ocpp_messages::v16::enums::{Measurand, ReadingContext, UnitOfMeasure};
use ocpp_messages::v16::messages::{BootNotificationRequest, MeterValuesRequest};
use ocpp_messages::v16::types::{MeterValue, SampledValue};
use ocpp_messages::{from_wire, to_wire, CiString, DateTime};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn datetime_strategy() -> impl Strategy<Value = DateTime> {
    (0i64..4_102_444_800_000i64).prop_map(|millis| {
        DateTime::new(chrono::DateTime::from_timestamp_millis(millis).unwrap())
    })
}

fn cistring_strategy<const N: usize>() -> impl Strategy<Value = CiString<N>> {
    "[A-Za-z0-9-]{1,20}".prop_map(|text| CiString::new(text).unwrap())
}

/// One enumerator out of a closed vocabulary
fn pick<T: Copy + std::fmt::Debug>(all: &'static [T]) -> impl Strategy<Value = T> {
    (0..all.len()).prop_map(move |index| all[index])
}

fn boot_notification_strategy() -> impl Strategy<Value = BootNotificationRequest> {
    (
        cistring_strategy::<20>(),
        cistring_strategy::<20>(),
        proptest::option::of(cistring_strategy::<25>()),
        proptest::option::of(cistring_strategy::<50>()),
        proptest::option::of(cistring_strategy::<20>()),
    )
        .prop_map(|(vendor, model, serial, firmware, iccid)| BootNotificationRequest {
            charge_point_vendor: vendor,
            charge_point_model: model,
            charge_point_serial_number: serial,
            charge_box_serial_number: None,
            firmware_version: firmware,
            iccid,
            imsi: None,
            meter_type: None,
            meter_serial_number: None,
        })
}

fn sampled_value_strategy() -> impl Strategy<Value = SampledValue> {
    (
        (0u32..10_000_000u32).prop_map(|wh| format!("{}.{}", wh / 100, wh % 100)),
        proptest::option::of(pick(ReadingContext::ALL)),
        proptest::option::of(pick(Measurand::ALL)),
        proptest::option::of(pick(UnitOfMeasure::ALL)),
    )
        .prop_map(|(value, context, measurand, unit)| SampledValue {
            value,
            context,
            format: None,
            measurand,
            phase: None,
            location: None,
            unit,
        })
}

fn meter_values_strategy() -> impl Strategy<Value = MeterValuesRequest> {
    (
        1i32..16,
        proptest::option::of(0i32..100_000),
        datetime_strategy(),
        proptest::collection::vec(sampled_value_strategy(), 1..4),
    )
        .prop_map(|(connector_id, transaction_id, timestamp, sampled_value)| {
            MeterValuesRequest {
                connector_id,
                transaction_id,
                meter_value: vec![MeterValue {
                    timestamp,
                    sampled_value,
                }],
            }
        })
}

// ============================================================================
// Round-trip Properties
// ============================================================================

proptest! {
    #[test]
    fn boot_notification_round_trips(request in boot_notification_strategy()) {
        let wire = to_wire(&request).unwrap();
        let decoded: BootNotificationRequest = from_wire(wire).unwrap();
        prop_assert_eq!(decoded, request);
    }

    #[test]
    fn boot_notification_never_emits_null_optionals(
        request in boot_notification_strategy()
    ) {
        let wire = to_wire(&request).unwrap();
        let object = wire.as_object().unwrap();
        prop_assert!(object.values().all(|v| !v.is_null()));
        if request.iccid.is_none() {
            prop_assert!(!object.contains_key("iccid"));
        }
    }

    #[test]
    fn meter_values_round_trip(request in meter_values_strategy()) {
        let wire = to_wire(&request).unwrap();
        let decoded: MeterValuesRequest = from_wire(wire).unwrap();
        prop_assert_eq!(decoded, request);
    }
}
