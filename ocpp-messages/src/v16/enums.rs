//! Closed enumerations of the 1.6 wire vocabulary.

use crate::macros::wire_enum;

wire_enum! {
    /// Authorization outcome for an idTag.
    AuthorizationStatus {
        Accepted => "Accepted",
        Blocked => "Blocked",
        Expired => "Expired",
        Invalid => "Invalid",
        ConcurrentTx => "ConcurrentTx",
    }
}

wire_enum! {
    /// Central system's answer to a BootNotification.
    RegistrationStatus {
        Accepted => "Accepted",
        Pending => "Pending",
        Rejected => "Rejected",
    }
}

wire_enum! {
    /// Requested operability change.
    AvailabilityType {
        Inoperative => "Inoperative",
        Operative => "Operative",
    }
}

wire_enum! {
    /// Outcome of a ChangeAvailability request.
    AvailabilityStatus {
        Accepted => "Accepted",
        Rejected => "Rejected",
        Scheduled => "Scheduled",
    }
}

wire_enum! {
    /// Outcome of a ChangeConfiguration request.
    ConfigurationStatus {
        Accepted => "Accepted",
        Rejected => "Rejected",
        RebootRequired => "RebootRequired",
        NotSupported => "NotSupported",
    }
}

wire_enum! {
    /// Outcome of a ClearCache request.
    ClearCacheStatus {
        Accepted => "Accepted",
        Rejected => "Rejected",
    }
}

wire_enum! {
    /// Outcome of a DataTransfer exchange.
    DataTransferStatus {
        Accepted => "Accepted",
        Rejected => "Rejected",
        UnknownMessageId => "UnknownMessageId",
        UnknownVendorId => "UnknownVendorId",
    }
}

wire_enum! {
    /// Progress of a diagnostics upload.
    DiagnosticsStatus {
        Idle => "Idle",
        Uploaded => "Uploaded",
        UploadFailed => "UploadFailed",
        Uploading => "Uploading",
    }
}

wire_enum! {
    /// Progress of a firmware download and installation.
    FirmwareStatus {
        Downloaded => "Downloaded",
        DownloadFailed => "DownloadFailed",
        Downloading => "Downloading",
        Idle => "Idle",
        InstallationFailed => "InstallationFailed",
        Installing => "Installing",
        Installed => "Installed",
    }
}

wire_enum! {
    /// Fault category reported alongside a connector status.
    ChargePointErrorCode {
        ConnectorLockFailure => "ConnectorLockFailure",
        EVCommunicationError => "EVCommunicationError",
        GroundFailure => "GroundFailure",
        HighTemperature => "HighTemperature",
        InternalError => "InternalError",
        LocalListConflict => "LocalListConflict",
        NoError => "NoError",
        OtherError => "OtherError",
        OverCurrentFailure => "OverCurrentFailure",
        OverVoltage => "OverVoltage",
        PowerMeterFailure => "PowerMeterFailure",
        PowerSwitchFailure => "PowerSwitchFailure",
        ReaderFailure => "ReaderFailure",
        ResetFailure => "ResetFailure",
        UnderVoltage => "UnderVoltage",
        WeakSignal => "WeakSignal",
    }
}

wire_enum! {
    /// Connector status as reported via StatusNotification.
    ChargePointStatus {
        Available => "Available",
        Preparing => "Preparing",
        Charging => "Charging",
        SuspendedEVSE => "SuspendedEVSE",
        SuspendedEV => "SuspendedEV",
        Finishing => "Finishing",
        Reserved => "Reserved",
        Unavailable => "Unavailable",
        Faulted => "Faulted",
    }
}

wire_enum! {
    /// Circumstance under which a sampled value was taken.
    ReadingContext {
        InterruptionBegin => "Interruption.Begin",
        InterruptionEnd => "Interruption.End",
        Other => "Other",
        SampleClock => "Sample.Clock",
        SamplePeriodic => "Sample.Periodic",
        TransactionBegin => "Transaction.Begin",
        TransactionEnd => "Transaction.End",
        Trigger => "Trigger",
    }
}

wire_enum! {
    /// Raw value vs. signed meter data.
    ValueFormat {
        Raw => "Raw",
        SignedData => "SignedData",
    }
}

wire_enum! {
    /// Quantity a sampled value measures.
    Measurand {
        CurrentExport => "Current.Export",
        CurrentImport => "Current.Import",
        CurrentOffered => "Current.Offered",
        EnergyActiveExportRegister => "Energy.Active.Export.Register",
        EnergyActiveImportRegister => "Energy.Active.Import.Register",
        EnergyReactiveExportRegister => "Energy.Reactive.Export.Register",
        EnergyReactiveImportRegister => "Energy.Reactive.Import.Register",
        EnergyActiveExportInterval => "Energy.Active.Export.Interval",
        EnergyActiveImportInterval => "Energy.Active.Import.Interval",
        EnergyReactiveExportInterval => "Energy.Reactive.Export.Interval",
        EnergyReactiveImportInterval => "Energy.Reactive.Import.Interval",
        Frequency => "Frequency",
        PowerActiveExport => "Power.Active.Export",
        PowerActiveImport => "Power.Active.Import",
        PowerFactor => "Power.Factor",
        PowerOffered => "Power.Offered",
        PowerReactiveExport => "Power.Reactive.Export",
        PowerReactiveImport => "Power.Reactive.Import",
        Rpm => "RPM",
        SoC => "SoC",
        Temperature => "Temperature",
        Voltage => "Voltage",
    }
}

wire_enum! {
    /// Phase a sampled value applies to.
    Phase {
        L1 => "L1",
        L2 => "L2",
        L3 => "L3",
        N => "N",
        L1N => "L1-N",
        L2N => "L2-N",
        L3N => "L3-N",
        L1L2 => "L1-L2",
        L2L3 => "L2-L3",
        L3L1 => "L3-L1",
    }
}

wire_enum! {
    /// Where a sampled value was measured.
    Location {
        Body => "Body",
        Cable => "Cable",
        EV => "EV",
        Inlet => "Inlet",
        Outlet => "Outlet",
    }
}

wire_enum! {
    /// Unit of a sampled value.
    ///
    /// `Celcius` is the misspelled token from the original 1.6 schema;
    /// the errata added the correctly spelled one, so both decode.
    UnitOfMeasure {
        Wh => "Wh",
        KWh => "kWh",
        Varh => "varh",
        Kvarh => "kvarh",
        W => "W",
        KW => "kW",
        VA => "VA",
        KVA => "kVA",
        Var => "var",
        Kvar => "kvar",
        A => "A",
        V => "V",
        K => "K",
        Celcius => "Celcius",
        Celsius => "Celsius",
        Fahrenheit => "Fahrenheit",
        Percent => "Percent",
    }
}

wire_enum! {
    /// Why a transaction stopped.
    Reason {
        DeAuthorized => "DeAuthorized",
        EmergencyStop => "EmergencyStop",
        EVDisconnected => "EVDisconnected",
        HardReset => "HardReset",
        Local => "Local",
        Other => "Other",
        PowerLoss => "PowerLoss",
        Reboot => "Reboot",
        Remote => "Remote",
        SoftReset => "SoftReset",
        UnlockCommand => "UnlockCommand",
    }
}

wire_enum! {
    /// Charge point's answer to a remote start/stop request.
    RemoteStartStopStatus {
        Accepted => "Accepted",
        Rejected => "Rejected",
    }
}

wire_enum! {
    /// Kind of reset being requested.
    ResetType {
        Hard => "Hard",
        Soft => "Soft",
    }
}

wire_enum! {
    /// Charge point's answer to a reset request.
    ResetStatus {
        Accepted => "Accepted",
        Rejected => "Rejected",
    }
}

wire_enum! {
    /// Outcome of an UnlockConnector request.
    UnlockStatus {
        Unlocked => "Unlocked",
        UnlockFailed => "UnlockFailed",
        NotSupported => "NotSupported",
    }
}

wire_enum! {
    /// Stack a charging profile belongs to.
    ChargingProfilePurposeType {
        ChargePointMaxProfile => "ChargePointMaxProfile",
        TxDefaultProfile => "TxDefaultProfile",
        TxProfile => "TxProfile",
    }
}

wire_enum! {
    /// How a charging profile's schedule is anchored in time.
    ChargingProfileKindType {
        Absolute => "Absolute",
        Recurring => "Recurring",
        Relative => "Relative",
    }
}

wire_enum! {
    /// Recurrence period of a recurring charging profile.
    RecurrencyKindType {
        Daily => "Daily",
        Weekly => "Weekly",
    }
}

wire_enum! {
    /// Unit in which schedule limits are expressed.
    ChargingRateUnitType {
        W => "W",
        A => "A",
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn every_enumerator_survives_the_string_round_trip() {
        for status in ChargePointStatus::ALL {
            assert_eq!(ChargePointStatus::from_str(status.as_str()), Ok(*status));
        }
        for measurand in Measurand::ALL {
            assert_eq!(Measurand::from_str(measurand.as_str()), Ok(*measurand));
        }
        for context in ReadingContext::ALL {
            assert_eq!(ReadingContext::from_str(context.as_str()), Ok(*context));
        }
        for code in ChargePointErrorCode::ALL {
            assert_eq!(ChargePointErrorCode::from_str(code.as_str()), Ok(*code));
        }
    }

    #[test]
    fn dotted_tokens_match_the_wire_vocabulary() {
        assert_eq!(
            Measurand::EnergyActiveImportRegister.as_str(),
            "Energy.Active.Import.Register"
        );
        assert_eq!(ReadingContext::SamplePeriodic.as_str(), "Sample.Periodic");
        assert_eq!(Phase::L1N.as_str(), "L1-N");
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        assert!(RegistrationStatus::from_str("accepted").is_err());
        assert!(RegistrationStatus::from_str(" Accepted").is_err());
        let err = RegistrationStatus::from_str("Bogus").unwrap_err();
        assert_eq!(err.enum_name, "RegistrationStatus");
        assert_eq!(err.value, "Bogus");
    }

    #[test]
    fn both_celsius_spellings_decode() {
        assert_eq!(UnitOfMeasure::from_str("Celcius"), Ok(UnitOfMeasure::Celcius));
        assert_eq!(UnitOfMeasure::from_str("Celsius"), Ok(UnitOfMeasure::Celsius));
    }

    #[test]
    fn serde_uses_the_same_tokens() {
        let json = serde_json::to_string(&Measurand::PowerActiveImport).unwrap();
        assert_eq!(json, "\"Power.Active.Import\"");
        let parsed: Measurand = serde_json::from_str("\"Power.Active.Import\"").unwrap();
        assert_eq!(parsed, Measurand::PowerActiveImport);
    }
}
