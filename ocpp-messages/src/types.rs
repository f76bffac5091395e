//! Value types shared across both protocol generations.
//!
//! Everything here is wire-facing: electrical measurement aggregates
//! reported by powermeters, display-message and running-cost payloads,
//! and the certificate descriptors exchanged during certificate
//! management. Each type round-trips on its own, independent of any
//! parent message.

use serde::{Deserialize, Serialize};

use crate::cistring::CiString;
use crate::datetime::DateTime;
use crate::macros::wire_enum;
use crate::v16;
use crate::v201;

/// DC or per-phase AC current in ampere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Current {
    #[serde(rename = "DC", skip_serializing_if = "Option::is_none")]
    pub dc: Option<f64>,
    #[serde(rename = "L1", skip_serializing_if = "Option::is_none")]
    pub l1: Option<f64>,
    #[serde(rename = "L2", skip_serializing_if = "Option::is_none")]
    pub l2: Option<f64>,
    #[serde(rename = "L3", skip_serializing_if = "Option::is_none")]
    pub l3: Option<f64>,
    #[serde(rename = "N", skip_serializing_if = "Option::is_none")]
    pub neutral: Option<f64>,
}

/// DC or per-phase AC voltage in volt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Voltage {
    #[serde(rename = "DC", skip_serializing_if = "Option::is_none")]
    pub dc: Option<f64>,
    #[serde(rename = "L1", skip_serializing_if = "Option::is_none")]
    pub l1: Option<f64>,
    #[serde(rename = "L2", skip_serializing_if = "Option::is_none")]
    pub l2: Option<f64>,
    #[serde(rename = "L3", skip_serializing_if = "Option::is_none")]
    pub l3: Option<f64>,
}

/// Grid frequency in hertz. L1 is always reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frequency {
    #[serde(rename = "L1")]
    pub l1: f64,
    #[serde(rename = "L2", skip_serializing_if = "Option::is_none")]
    pub l2: Option<f64>,
    #[serde(rename = "L3", skip_serializing_if = "Option::is_none")]
    pub l3: Option<f64>,
}

/// Instantaneous power in watt; `total` is the DC or AC sum value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Power {
    pub total: f64,
    #[serde(rename = "L1", skip_serializing_if = "Option::is_none")]
    pub l1: Option<f64>,
    #[serde(rename = "L2", skip_serializing_if = "Option::is_none")]
    pub l2: Option<f64>,
    #[serde(rename = "L3", skip_serializing_if = "Option::is_none")]
    pub l3: Option<f64>,
}

/// Energy in watt-hours; `total` is the sum value relevant for billing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Energy {
    pub total: f64,
    #[serde(rename = "L1", skip_serializing_if = "Option::is_none")]
    pub l1: Option<f64>,
    #[serde(rename = "L2", skip_serializing_if = "Option::is_none")]
    pub l2: Option<f64>,
    #[serde(rename = "L3", skip_serializing_if = "Option::is_none")]
    pub l3: Option<f64>,
}

/// Reactive power in VAR, total plus per-phase values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactivePower {
    pub total: f64,
    #[serde(rename = "VARphA", skip_serializing_if = "Option::is_none")]
    pub var_ph_a: Option<f64>,
    #[serde(rename = "VARphB", skip_serializing_if = "Option::is_none")]
    pub var_ph_b: Option<f64>,
    #[serde(rename = "VARphC", skip_serializing_if = "Option::is_none")]
    pub var_ph_c: Option<f64>,
}

/// One powermeter reading. Imported energy is the only mandatory
/// quantity; everything else depends on the meter's capabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Powermeter {
    pub timestamp: DateTime,
    #[serde(rename = "energy_Wh_import")]
    pub energy_wh_import: Energy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase_seq_error: Option<bool>,
    #[serde(rename = "energy_Wh_export", skip_serializing_if = "Option::is_none")]
    pub energy_wh_export: Option<Energy>,
    #[serde(rename = "power_W", skip_serializing_if = "Option::is_none")]
    pub power_w: Option<Power>,
    #[serde(rename = "voltage_V", skip_serializing_if = "Option::is_none")]
    pub voltage_v: Option<Voltage>,
    #[serde(rename = "VAR", skip_serializing_if = "Option::is_none")]
    pub var: Option<ReactivePower>,
    #[serde(rename = "current_A", skip_serializing_if = "Option::is_none")]
    pub current_a: Option<Current>,
    #[serde(rename = "frequency_Hz", skip_serializing_if = "Option::is_none")]
    pub frequency_hz: Option<Frequency>,
}

/// State of charge in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateOfCharge {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Temperature in degree Celsius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Rotational speed in RPM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rpm {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Full measurement snapshot: powermeter data plus auxiliary sensors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub power_meter: Powermeter,
    #[serde(rename = "soc_Percent", skip_serializing_if = "Option::is_none")]
    pub soc_percent: Option<StateOfCharge>,
    #[serde(rename = "temperature_C", default, skip_serializing_if = "Vec::is_empty")]
    pub temperature_c: Vec<Temperature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpm: Option<Rpm>,
}

wire_enum! {
    /// What kind of identifier a display message is addressed by.
    IdentifierType {
        SessionId => "SessionId",
        IdToken => "IdToken",
        TransactionId => "TransactionId",
    }
}

/// Text shown to the EV driver, with optional language and format hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMessageContent {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_format: Option<v201::enums::MessageFormat>,
}

/// A display message with its scheduling and addressing metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<v201::enums::MessagePriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<v201::enums::MessageState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_from: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_to: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<IdentifierType>,
    pub message: DisplayMessageContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
}

/// Price components that apply while energy is flowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunningCostChargingPrice {
    #[serde(rename = "kWhPrice", skip_serializing_if = "Option::is_none")]
    pub kwh_price: Option<f64>,
    #[serde(rename = "hourPrice", skip_serializing_if = "Option::is_none")]
    pub hour_price: Option<f64>,
    #[serde(rename = "flatFee", skip_serializing_if = "Option::is_none")]
    pub flat_fee: Option<f64>,
}

/// Price components that apply while the vehicle idles after charging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningCostIdlePrice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_grace_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_hour_price: Option<f64>,
}

wire_enum! {
    /// Phase of the transaction a running-cost update describes.
    /// `Finished` marks the final price.
    RunningCostState {
        Charging => "Charging",
        Idle => "Idle",
        Finished => "Finished",
    }
}

/// Cost update for a running transaction, as pushed by a pricing-capable
/// management system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningCost {
    pub transaction_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter_value: Option<u32>,
    pub cost: f64,
    pub state: RunningCostState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charging_price: Option<RunningCostChargingPrice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_price: Option<RunningCostIdlePrice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_period_at_time: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_period_charging_price: Option<RunningCostChargingPrice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_period_idle_price: Option<RunningCostIdlePrice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_messages: Option<Vec<DisplayMessageContent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code_text: Option<String>,
}

/// Conditions under which an extra meter value should be sampled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerMeterValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at_time: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at_energy_kwh: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at_power_kw: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub at_chargepoint_status: Vec<v16::enums::ChargePointStatus>,
}

wire_enum! {
    /// Hash algorithm used for certificate hash data.
    HashAlgorithm {
        Sha256 => "SHA256",
        Sha384 => "SHA384",
        Sha512 => "SHA512",
    }
}

/// Hashed certificate identification, as used in certificate lookups and
/// deletions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateHashData {
    pub hash_algorithm: HashAlgorithm,
    pub issuer_name_hash: CiString<128>,
    pub issuer_key_hash: CiString<128>,
    pub serial_number: CiString<40>,
}

wire_enum! {
    /// Certificate use reported by a station's certificate store.
    CertificateType {
        V2GRootCertificate => "V2GRootCertificate",
        MORootCertificate => "MORootCertificate",
        CSMSRootCertificate => "CSMSRootCertificate",
        V2GCertificateChain => "V2GCertificateChain",
        MFRootCertificate => "MFRootCertificate",
        OEMRootCertificate => "OEMRootCertificate",
    }
}

/// A certificate hash plus the hashes of its child certificates, for
/// chain-structured store entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateHashDataChain {
    pub certificate_hash_data: CertificateHashData,
    pub certificate_type: CertificateType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_certificate_hash_data: Option<Vec<CertificateHashData>>,
}

wire_enum! {
    /// CA certificate categories a station can install.
    CaCertificateType {
        V2G => "V2G",
        MO => "MO",
        CSMS => "CSMS",
        MF => "MF",
        OEM => "OEM",
    }
}

wire_enum! {
    /// Outcome of validating a certificate chain.
    CertificateValidationResult {
        Valid => "Valid",
        Expired => "Expired",
        InvalidSignature => "InvalidSignature",
        IssuerNotFound => "IssuerNotFound",
        InvalidLeafSignature => "InvalidLeafSignature",
        InvalidChain => "InvalidChain",
        Unknown => "Unknown",
    }
}

wire_enum! {
    /// Outcome of installing a certificate.
    InstallCertificateResult {
        InvalidSignature => "InvalidSignature",
        InvalidCertificateChain => "InvalidCertificateChain",
        InvalidFormat => "InvalidFormat",
        InvalidCommonName => "InvalidCommonName",
        NoRootCertificateInstalled => "NoRootCertificateInstalled",
        Expired => "Expired",
        CertificateStoreMaxLengthExceeded => "CertificateStoreMaxLengthExceeded",
        WriteError => "WriteError",
        Accepted => "Accepted",
    }
}

wire_enum! {
    /// Outcome of deleting a certificate from the store.
    DeleteCertificateResult {
        Accepted => "Accepted",
        Failed => "Failed",
        NotFound => "NotFound",
    }
}

wire_enum! {
    /// What a certificate signing request is for.
    CertificateSigningUse {
        ChargingStationCertificate => "ChargingStationCertificate",
        V2GCertificate => "V2GCertificate",
        ManufacturerCertificate => "ManufacturerCertificate",
        V2G20Certificate => "V2G20Certificate",
    }
}

wire_enum! {
    /// Protocol generation, as negotiated via the websocket subprotocol.
    OcppProtocolVersion {
        V16 => "ocpp1.6",
        V201 => "ocpp2.0.1",
        V21 => "ocpp2.1",
        Unknown => "unknown",
    }
}

wire_enum! {
    /// Version-neutral firmware installation progress vocabulary.
    FirmwareStatusNotification {
        Downloaded => "Downloaded",
        DownloadFailed => "DownloadFailed",
        Downloading => "Downloading",
        DownloadScheduled => "DownloadScheduled",
        DownloadPaused => "DownloadPaused",
        Idle => "Idle",
        InstallationFailed => "InstallationFailed",
        Installing => "Installing",
        Installed => "Installed",
        InstallRebooting => "InstallRebooting",
        InstallScheduled => "InstallScheduled",
        InstallVerificationFailed => "InstallVerificationFailed",
        InvalidSignature => "InvalidSignature",
        SignatureVerified => "SignatureVerified",
    }
}

/// Security event names from the OCPP 2.0.1 specification and the 1.6
/// security whitepaper.
///
/// For interoperability, an event matching one of these descriptions
/// must be reported under the listed name rather than a proprietary one.
/// Critical events are the ones a station must push to the CSMS.
pub mod security_events {
    pub const FIRMWARE_UPDATED: &str = "FirmwareUpdated";
    pub const FAILED_TO_AUTHENTICATE_AT_CSMS: &str = "FailedToAuthenticateAtCsms";
    pub const CSMS_FAILED_TO_AUTHENTICATE: &str = "CsmsFailedToAuthenticate";
    pub const CSR_GENERATION_FAILED: &str = "CSRGenerationFailed";
    pub const SETTING_SYSTEM_TIME: &str = "SettingSystemTime";
    pub const RESET_OR_REBOOT: &str = "ResetOrReboot";
    pub const STARTUP_OF_THE_DEVICE: &str = "StartupOfTheDevice";
    pub const SECURITY_LOG_WAS_CLEARED: &str = "SecurityLogWasCleared";
    pub const RECONFIGURATION_OF_SECURITY_PARAMETERS: &str =
        "ReconfigurationOfSecurityParameters";
    pub const MEMORY_EXHAUSTION: &str = "MemoryExhaustion";
    pub const INVALID_MESSAGES: &str = "InvalidMessages";
    pub const ATTEMPTED_REPLAY_ATTACKS: &str = "AttemptedReplayAttacks";
    pub const TAMPER_DETECTION_ACTIVATED: &str = "TamperDetectionActivated";
    pub const INVALID_FIRMWARE_SIGNATURE: &str = "InvalidFirmwareSignature";
    pub const INVALID_FIRMWARE_SIGNING_CERTIFICATE: &str = "InvalidFirmwareSigningCertificate";
    pub const INVALID_CSMS_CERTIFICATE: &str = "InvalidCsmsCertificate";
    pub const INVALID_CENTRAL_SYSTEM_CERTIFICATE: &str = "InvalidCentralSystemCertificate";
    pub const INVALID_CHARGING_STATION_CERTIFICATE: &str = "InvalidChargingStationCertificate";
    pub const INVALID_CHARGE_POINT_CERTIFICATE: &str = "InvalidChargePointCertificate";
    pub const INVALID_TLS_VERSION: &str = "InvalidTLSVersion";
    pub const INVALID_TLS_CIPHER_SUITE: &str = "InvalidTLSCipherSuite";
    pub const MAINTENANCE_LOGIN_ACCEPTED: &str = "MaintenanceLoginAccepted";
    pub const MAINTENANCE_LOGIN_FAILED: &str = "MaintenanceLoginFailed";

    const CRITICAL: &[&str] = &[
        FIRMWARE_UPDATED,
        SETTING_SYSTEM_TIME,
        RESET_OR_REBOOT,
        STARTUP_OF_THE_DEVICE,
        SECURITY_LOG_WAS_CLEARED,
        MEMORY_EXHAUSTION,
        TAMPER_DETECTION_ACTIVATED,
    ];

    /// Whether the named event must be pushed to the CSMS.
    pub fn is_critical(event: &str) -> bool {
        CRITICAL.contains(&event)
    }
}
