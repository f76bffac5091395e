//! Request/response pairs for the 1.6 operations.
//!
//! One struct per message direction; field names and required/optional
//! splits follow the 1.6 JSON schemas exactly.

use serde::{Deserialize, Serialize};

use crate::cistring::CiString;
use crate::datetime::DateTime;
use crate::macros::message_types;

use super::enums::{
    AvailabilityStatus, AvailabilityType, ChargePointErrorCode, ChargePointStatus,
    ClearCacheStatus, ConfigurationStatus, DataTransferStatus, DiagnosticsStatus,
    FirmwareStatus, Reason, RegistrationStatus, RemoteStartStopStatus, ResetStatus, ResetType,
    UnlockStatus,
};
use super::types::{ChargingProfile, IdTagInfo, KeyValue, MeterValue};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeRequest {
    pub id_tag: CiString<20>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeResponse {
    pub id_tag_info: IdTagInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootNotificationRequest {
    pub charge_point_vendor: CiString<20>,
    pub charge_point_model: CiString<20>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_point_serial_number: Option<CiString<25>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_box_serial_number: Option<CiString<25>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firmware_version: Option<CiString<50>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iccid: Option<CiString<20>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imsi: Option<CiString<20>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter_type: Option<CiString<25>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter_serial_number: Option<CiString<25>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootNotificationResponse {
    pub status: RegistrationStatus,
    pub current_time: DateTime,
    pub interval: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeAvailabilityRequest {
    pub connector_id: i32,
    #[serde(rename = "type")]
    pub availability_type: AvailabilityType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeAvailabilityResponse {
    pub status: AvailabilityStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeConfigurationRequest {
    pub key: CiString<50>,
    pub value: CiString<500>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeConfigurationResponse {
    pub status: ConfigurationStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearCacheRequest {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearCacheResponse {
    pub status: ClearCacheStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTransferRequest {
    pub vendor_id: CiString<255>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<CiString<50>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTransferResponse {
    pub status: DataTransferStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsStatusNotificationRequest {
    pub status: DiagnosticsStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsStatusNotificationResponse {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirmwareStatusNotificationRequest {
    pub status: FirmwareStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirmwareStatusNotificationResponse {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigurationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Vec<CiString<50>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigurationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_key: Option<Vec<KeyValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_key: Option<Vec<CiString<50>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartbeatRequest {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartbeatResponse {
    pub current_time: DateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterValuesRequest {
    pub connector_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<i32>,
    pub meter_value: Vec<MeterValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterValuesResponse {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteStartTransactionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_id: Option<i32>,
    pub id_tag: CiString<20>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charging_profile: Option<ChargingProfile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteStartTransactionResponse {
    pub status: RemoteStartStopStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteStopTransactionRequest {
    pub transaction_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteStopTransactionResponse {
    pub status: RemoteStartStopStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetRequest {
    #[serde(rename = "type")]
    pub reset_type: ResetType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetResponse {
    pub status: ResetStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTransactionRequest {
    pub connector_id: i32,
    pub id_tag: CiString<20>,
    pub meter_start: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<i32>,
    pub timestamp: DateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTransactionResponse {
    pub id_tag_info: IdTagInfo,
    pub transaction_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusNotificationRequest {
    pub connector_id: i32,
    pub error_code: ChargePointErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<CiString<50>>,
    pub status: ChargePointStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<CiString<255>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_error_code: Option<CiString<50>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusNotificationResponse {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTransactionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_tag: Option<CiString<20>>,
    pub meter_stop: i32,
    pub timestamp: DateTime,
    pub transaction_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_data: Option<Vec<MeterValue>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTransactionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_tag_info: Option<IdTagInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockConnectorRequest {
    pub connector_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockConnectorResponse {
    pub status: UnlockStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFirmwareRequest {
    pub location: String,
    pub retrieve_date: DateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_interval: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateFirmwareResponse {}

message_types! {
    AuthorizeRequest => "Authorize",
    AuthorizeResponse => "AuthorizeResponse",
    BootNotificationRequest => "BootNotification",
    BootNotificationResponse => "BootNotificationResponse",
    ChangeAvailabilityRequest => "ChangeAvailability",
    ChangeAvailabilityResponse => "ChangeAvailabilityResponse",
    ChangeConfigurationRequest => "ChangeConfiguration",
    ChangeConfigurationResponse => "ChangeConfigurationResponse",
    ClearCacheRequest => "ClearCache",
    ClearCacheResponse => "ClearCacheResponse",
    DataTransferRequest => "DataTransfer",
    DataTransferResponse => "DataTransferResponse",
    DiagnosticsStatusNotificationRequest => "DiagnosticsStatusNotification",
    DiagnosticsStatusNotificationResponse => "DiagnosticsStatusNotificationResponse",
    FirmwareStatusNotificationRequest => "FirmwareStatusNotification",
    FirmwareStatusNotificationResponse => "FirmwareStatusNotificationResponse",
    GetConfigurationRequest => "GetConfiguration",
    GetConfigurationResponse => "GetConfigurationResponse",
    HeartbeatRequest => "Heartbeat",
    HeartbeatResponse => "HeartbeatResponse",
    MeterValuesRequest => "MeterValues",
    MeterValuesResponse => "MeterValuesResponse",
    RemoteStartTransactionRequest => "RemoteStartTransaction",
    RemoteStartTransactionResponse => "RemoteStartTransactionResponse",
    RemoteStopTransactionRequest => "RemoteStopTransaction",
    RemoteStopTransactionResponse => "RemoteStopTransactionResponse",
    ResetRequest => "Reset",
    ResetResponse => "ResetResponse",
    StartTransactionRequest => "StartTransaction",
    StartTransactionResponse => "StartTransactionResponse",
    StatusNotificationRequest => "StatusNotification",
    StatusNotificationResponse => "StatusNotificationResponse",
    StopTransactionRequest => "StopTransaction",
    StopTransactionResponse => "StopTransactionResponse",
    UnlockConnectorRequest => "UnlockConnector",
    UnlockConnectorResponse => "UnlockConnectorResponse",
    UpdateFirmwareRequest => "UpdateFirmware",
    UpdateFirmwareResponse => "UpdateFirmwareResponse",
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::codec::{from_wire, to_wire};
    use crate::v16::enums::{Measurand, UnitOfMeasure};
    use crate::v16::types::SampledValue;

    #[test]
    fn boot_notification_round_trips() {
        let wire = json!({
            "chargePointVendor": "Elektrokombinacija",
            "chargePointModel": "EK3",
            "chargePointSerialNumber": "EK3-001",
            "firmwareVersion": "1.4.2"
        });
        let request: BootNotificationRequest = from_wire(wire.clone()).unwrap();
        assert_eq!(request.charge_point_model.as_str(), "EK3");
        assert!(request.iccid.is_none());
        assert_eq!(to_wire(&request).unwrap(), wire);
    }

    #[test]
    fn boot_notification_rejects_an_over_long_vendor() {
        let wire = json!({
            "chargePointVendor": "x".repeat(21),
            "chargePointModel": "EK3"
        });
        let err = from_wire::<BootNotificationRequest>(wire).unwrap_err();
        assert!(err.to_string().contains("maximum of 20"), "got: {err}");
    }

    #[test]
    fn update_firmware_carries_location_and_retrieve_date() {
        let wire = json!({
            "location": "https://firmware.example.com/ek3/1.5.0.bin",
            "retrieveDate": "2024-06-01T03:00:00.000Z",
            "retries": 3
        });
        let request: UpdateFirmwareRequest = from_wire(wire.clone()).unwrap();
        assert_eq!(request.retrieve_date.to_rfc3339(), "2024-06-01T03:00:00.000Z");
        assert_eq!(request.retry_interval, None);
        assert_eq!(to_wire(&request).unwrap(), wire);
    }

    #[test]
    fn meter_values_requires_the_sample_list() {
        let err = from_wire::<MeterValuesRequest>(json!({"connectorId": 1})).unwrap_err();
        assert!(err.to_string().contains("meterValue"), "got: {err}");
    }

    #[test]
    fn meter_values_round_trips_with_samples() {
        let request = MeterValuesRequest {
            connector_id: 1,
            transaction_id: Some(77),
            meter_value: vec![MeterValue {
                timestamp: "2024-06-01T12:00:00Z".parse().unwrap(),
                sampled_value: vec![SampledValue {
                    value: "4521.77".to_string(),
                    context: None,
                    format: None,
                    measurand: Some(Measurand::EnergyActiveImportRegister),
                    phase: None,
                    location: None,
                    unit: Some(UnitOfMeasure::Wh),
                }],
            }],
        };
        let decoded: MeterValuesRequest = from_wire(to_wire(&request).unwrap()).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn reset_uses_the_type_key() {
        let request = ResetRequest {
            reset_type: ResetType::Soft,
        };
        assert_eq!(to_wire(&request).unwrap(), json!({"type": "Soft"}));
    }

    #[test]
    fn stop_transaction_round_trips_with_transaction_data() {
        let wire = json!({
            "meterStop": 5500,
            "timestamp": "2024-06-01T13:30:00.000Z",
            "transactionId": 42,
            "reason": "EVDisconnected"
        });
        let request: StopTransactionRequest = from_wire(wire.clone()).unwrap();
        assert_eq!(request.reason, Some(Reason::EVDisconnected));
        assert!(request.id_tag.is_none());
        assert_eq!(to_wire(&request).unwrap(), wire);
    }

    #[test]
    fn get_configuration_response_without_keys_is_an_empty_object() {
        let response = GetConfigurationResponse {
            configuration_key: None,
            unknown_key: None,
        };
        assert_eq!(to_wire(&response).unwrap(), json!({}));
    }

    #[test]
    fn status_notification_round_trips_fully_populated() {
        let wire = json!({
            "connectorId": 2,
            "errorCode": "NoError",
            "status": "Charging",
            "timestamp": "2024-06-01T12:05:00.000Z",
            "info": "cable locked"
        });
        let request: StatusNotificationRequest = from_wire(wire.clone()).unwrap();
        assert_eq!(request.status, ChargePointStatus::Charging);
        assert_eq!(to_wire(&request).unwrap(), wire);
    }
}
