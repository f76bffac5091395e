//! Round-trip properties for 2.0.1 messages
//!
//! For every generated message M: from_wire(to_wire(M)) == M, and unset
//! optional fields never appear in the wire object.

use ocpp_messages::v201::enums::{ConnectorStatus, IdTokenType, RegistrationStatus};
use ocpp_messages::v201::messages::{
    BootNotificationResponse, CustomerInformationRequest, StatusNotificationRequest,
};
use ocpp_messages::v201::types::{IdToken, StatusInfo};
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

fn id_token_strategy() -> impl Strategy<Value = IdToken> {
    (cistring_strategy::<36>(), pick(IdTokenType::ALL)).prop_map(|(id_token, token_type)| {
        IdToken {
            id_token,
            token_type,
            additional_info: None,
            custom_data: None,
        }
    })
}

fn customer_information_strategy() -> impl Strategy<Value = CustomerInformationRequest> {
    (
        any::<i32>(),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(id_token_strategy()),
        proptest::option::of(cistring_strategy::<64>()),
    )
        .prop_map(|(request_id, report, clear, id_token, customer_identifier)| {
            CustomerInformationRequest {
                request_id,
                report,
                clear,
                customer_certificate: None,
                id_token,
                customer_identifier,
                custom_data: None,
            }
        })
}

fn boot_notification_response_strategy() -> impl Strategy<Value = BootNotificationResponse> {
    (
        datetime_strategy(),
        0i32..86_400,
        pick(RegistrationStatus::ALL),
        proptest::option::of(cistring_strategy::<20>()),
    )
        .prop_map(|(current_time, interval, status, reason_code)| BootNotificationResponse {
            current_time,
            interval,
            status,
            status_info: reason_code.map(|reason_code| StatusInfo {
                reason_code,
                additional_info: None,
                custom_data: None,
            }),
            custom_data: None,
        })
}

fn status_notification_strategy() -> impl Strategy<Value = StatusNotificationRequest> {
    (
        datetime_strategy(),
        pick(ConnectorStatus::ALL),
        1i32..16,
        1i32..4,
    )
        .prop_map(|(timestamp, connector_status, evse_id, connector_id)| {
            StatusNotificationRequest {
                timestamp,
                connector_status,
                evse_id,
                connector_id,
                custom_data: None,
            }
        })
}

// ============================================================================
// Round-trip Properties
// ============================================================================

proptest! {
    #[test]
    fn customer_information_round_trips(request in customer_information_strategy()) {
        let wire = to_wire(&request).unwrap();
        let decoded: CustomerInformationRequest = from_wire(wire).unwrap();
        prop_assert_eq!(decoded, request);
    }

    #[test]
    fn customer_information_never_emits_null_optionals(
        request in customer_information_strategy()
    ) {
        let wire = to_wire(&request).unwrap();
        let object = wire.as_object().unwrap();
        prop_assert!(object.values().all(|v| !v.is_null()));
        if request.customer_identifier.is_none() {
            prop_assert!(!object.contains_key("customerIdentifier"));
        }
    }

    #[test]
    fn boot_notification_response_round_trips(
        response in boot_notification_response_strategy()
    ) {
        let wire = to_wire(&response).unwrap();
        let decoded: BootNotificationResponse = from_wire(wire).unwrap();
        prop_assert_eq!(decoded, response);
    }

    #[test]
    fn status_notification_round_trips(request in status_notification_strategy()) {
        let wire = to_wire(&request).unwrap();
        let decoded: StatusNotificationRequest = from_wire(wire).unwrap();
        prop_assert_eq!(decoded, request);
    }
}
