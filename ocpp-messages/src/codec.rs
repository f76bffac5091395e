//! Wire codec entry points shared by both protocol generations.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{DecodeError, EncodeError};

/// Implemented by every request and response payload in both protocol
/// generations.
///
/// The message set is closed per generation; the type name is the
/// protocol-defined identifier the dispatch layer routes and logs by.
pub trait Message: Serialize + DeserializeOwned + std::fmt::Debug {
    /// Protocol-defined message type name, e.g. `"BootNotification"`.
    const MESSAGE_TYPE: &'static str;

    /// Type name of this message value.
    fn message_type(&self) -> &'static str {
        Self::MESSAGE_TYPE
    }
}

/// Renders a typed message into its wire object.
///
/// Required fields are always emitted under their exact protocol names;
/// optional fields only when set, never as `null`. Construction already
/// enforced every value invariant, so a failure here means a value
/// escaped validation and should be treated as a bug.
pub fn to_wire<M: Message>(message: &M) -> Result<Value, EncodeError> {
    serde_json::to_value(message).map_err(|source| {
        error!("failed to encode {}: {}", M::MESSAGE_TYPE, source);
        EncodeError {
            message_type: M::MESSAGE_TYPE,
            source,
        }
    })
}

/// Builds a typed message from a wire object.
///
/// Fails fast on the first violation: a missing required field, an
/// unknown enumerator, an over-long string or a malformed timestamp.
/// Fields the schema does not know are ignored, so payloads from newer
/// protocol revisions still decode.
pub fn from_wire<M: Message>(wire: Value) -> Result<M, DecodeError> {
    serde_json::from_value(wire).map_err(|source| {
        debug!("failed to decode {}: {}", M::MESSAGE_TYPE, source);
        DecodeError {
            message_type: M::MESSAGE_TYPE,
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::v201::messages::{
        CustomerInformationRequest, HeartbeatRequest, SetMonitoringBaseResponse,
    };

    #[test]
    fn decodes_required_fields_and_leaves_optionals_unset() {
        let wire = json!({"requestId": 42, "report": true, "clear": false});
        let request: CustomerInformationRequest = from_wire(wire).unwrap();

        assert_eq!(request.request_id, 42);
        assert!(request.report);
        assert!(!request.clear);
        assert!(request.customer_certificate.is_none());
        assert!(request.id_token.is_none());
        assert!(request.customer_identifier.is_none());
        assert!(request.custom_data.is_none());
    }

    #[test]
    fn unset_optionals_are_absent_from_the_wire_object() {
        let wire = json!({"requestId": 42, "report": true, "clear": false});
        let request: CustomerInformationRequest = from_wire(wire.clone()).unwrap();

        let encoded = to_wire(&request).unwrap();
        assert_eq!(encoded, wire);
        assert_eq!(encoded.as_object().unwrap().len(), 3);
    }

    #[test]
    fn missing_required_field_names_the_field() {
        let wire = json!({"requestId": 42, "report": true});
        let err = from_wire::<CustomerInformationRequest>(wire).unwrap_err();

        assert_eq!(err.message_type, "CustomerInformation");
        assert!(err.to_string().contains("clear"), "got: {err}");
    }

    #[test]
    fn known_enumerator_decodes_and_unknown_fails() {
        let response: SetMonitoringBaseResponse =
            from_wire(json!({"status": "Accepted"})).unwrap();
        assert_eq!(response.status.as_str(), "Accepted");

        let err = from_wire::<SetMonitoringBaseResponse>(json!({"status": "Bogus"})).unwrap_err();
        assert_eq!(err.message_type, "SetMonitoringBaseResponse");
        assert!(err.to_string().contains("Bogus"), "got: {err}");
    }

    #[test]
    fn unrecognized_fields_are_ignored() {
        let wire = json!({
            "requestId": 7,
            "report": false,
            "clear": true,
            "futureExtension": {"nested": [1, 2, 3]}
        });
        let request: CustomerInformationRequest = from_wire(wire).unwrap();
        assert_eq!(request.request_id, 7);
    }

    #[test]
    fn empty_messages_encode_to_an_empty_object() {
        let encoded = to_wire(&HeartbeatRequest { custom_data: None }).unwrap();
        assert_eq!(encoded, json!({}));
    }

    #[test]
    fn message_type_accessor_matches_the_protocol_name() {
        let request = HeartbeatRequest { custom_data: None };
        assert_eq!(request.message_type(), "Heartbeat");
        assert_eq!(HeartbeatRequest::MESSAGE_TYPE, "Heartbeat");
    }
}
