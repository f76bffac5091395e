//! Closed enumerations of the 2.0.1 wire vocabulary.

use crate::macros::wire_enum;

wire_enum! {
    /// Why the station (re)booted.
    BootReason {
        ApplicationReset => "ApplicationReset",
        FirmwareUpdate => "FirmwareUpdate",
        LocalReset => "LocalReset",
        PowerUp => "PowerUp",
        RemoteReset => "RemoteReset",
        ScheduledReset => "ScheduledReset",
        Triggered => "Triggered",
        Unknown => "Unknown",
        Watchdog => "Watchdog",
    }
}

wire_enum! {
    /// CSMS's answer to a BootNotification.
    RegistrationStatus {
        Accepted => "Accepted",
        Pending => "Pending",
        Rejected => "Rejected",
    }
}

wire_enum! {
    /// Connector status as reported via StatusNotification.
    ConnectorStatus {
        Available => "Available",
        Occupied => "Occupied",
        Reserved => "Reserved",
        Unavailable => "Unavailable",
        Faulted => "Faulted",
    }
}

wire_enum! {
    /// Authorization outcome for an idToken.
    AuthorizationStatus {
        Accepted => "Accepted",
        Blocked => "Blocked",
        ConcurrentTx => "ConcurrentTx",
        Expired => "Expired",
        Invalid => "Invalid",
        NoCredit => "NoCredit",
        NotAllowedTypeEVSE => "NotAllowedTypeEVSE",
        NotAtThisLocation => "NotAtThisLocation",
        NotAtThisTime => "NotAtThisTime",
        Unknown => "Unknown",
    }
}

wire_enum! {
    /// Kind of credential an idToken holds.
    IdTokenType {
        Central => "Central",
        EMaid => "eMAID",
        Iso14443 => "ISO14443",
        Iso15693 => "ISO15693",
        KeyCode => "KeyCode",
        Local => "Local",
        MacAddress => "MacAddress",
        NoAuthorization => "NoAuthorization",
    }
}

wire_enum! {
    /// Lifecycle position of a TransactionEvent.
    TransactionEventType {
        Ended => "Ended",
        Started => "Started",
        Updated => "Updated",
    }
}

wire_enum! {
    /// What caused a TransactionEvent to be sent.
    TriggerReason {
        Authorized => "Authorized",
        CablePluggedIn => "CablePluggedIn",
        ChargingRateChanged => "ChargingRateChanged",
        ChargingStateChanged => "ChargingStateChanged",
        Deauthorized => "Deauthorized",
        EnergyLimitReached => "EnergyLimitReached",
        EVCommunicationLost => "EVCommunicationLost",
        EVConnectTimeout => "EVConnectTimeout",
        MeterValueClock => "MeterValueClock",
        MeterValuePeriodic => "MeterValuePeriodic",
        TimeLimitReached => "TimeLimitReached",
        Trigger => "Trigger",
        UnlockCommand => "UnlockCommand",
        StopAuthorized => "StopAuthorized",
        EVDeparted => "EVDeparted",
        EVDetected => "EVDetected",
        RemoteStop => "RemoteStop",
        RemoteStart => "RemoteStart",
        AbnormalCondition => "AbnormalCondition",
        SignedDataReceived => "SignedDataReceived",
        ResetCommand => "ResetCommand",
    }
}

wire_enum! {
    /// Charging state within a transaction.
    ChargingState {
        Charging => "Charging",
        EVConnected => "EVConnected",
        SuspendedEV => "SuspendedEV",
        SuspendedEVSE => "SuspendedEVSE",
        Idle => "Idle",
    }
}

wire_enum! {
    /// Why a transaction stopped.
    Reason {
        DeAuthorized => "DeAuthorized",
        EmergencyStop => "EmergencyStop",
        EnergyLimitReached => "EnergyLimitReached",
        EVDisconnected => "EVDisconnected",
        GroundFault => "GroundFault",
        ImmediateReset => "ImmediateReset",
        Local => "Local",
        LocalOutOfCredit => "LocalOutOfCredit",
        MasterPass => "MasterPass",
        Other => "Other",
        OvercurrentFault => "OvercurrentFault",
        PowerLoss => "PowerLoss",
        PowerQuality => "PowerQuality",
        Reboot => "Reboot",
        Remote => "Remote",
        SOCLimitReached => "SOCLimitReached",
        StoppedByEV => "StoppedByEV",
        TimeLimitReached => "TimeLimitReached",
        Timeout => "Timeout",
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
        EnergyActiveNet => "Energy.Active.Net",
        EnergyReactiveExportInterval => "Energy.Reactive.Export.Interval",
        EnergyReactiveImportInterval => "Energy.Reactive.Import.Interval",
        EnergyReactiveNet => "Energy.Reactive.Net",
        EnergyApparentNet => "Energy.Apparent.Net",
        EnergyApparentImport => "Energy.Apparent.Import",
        EnergyApparentExport => "Energy.Apparent.Export",
        Frequency => "Frequency",
        PowerActiveExport => "Power.Active.Export",
        PowerActiveImport => "Power.Active.Import",
        PowerFactor => "Power.Factor",
        PowerOffered => "Power.Offered",
        PowerReactiveExport => "Power.Reactive.Export",
        PowerReactiveImport => "Power.Reactive.Import",
        SoC => "SoC",
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
    /// Outcome of a CustomerInformation request.
    CustomerInformationStatus {
        Accepted => "Accepted",
        Rejected => "Rejected",
        Invalid => "Invalid",
    }
}

wire_enum! {
    /// Which monitoring base to restore.
    MonitoringBase {
        All => "All",
        FactoryDefault => "FactoryDefault",
        HardWiredOnly => "HardWiredOnly",
    }
}

wire_enum! {
    /// Generic device-model operation outcome.
    GenericDeviceModelStatus {
        Accepted => "Accepted",
        Rejected => "Rejected",
        NotSupported => "NotSupported",
        EmptyResultSet => "EmptyResultSet",
    }
}

wire_enum! {
    /// Outcome of clearing a display message.
    ClearMessageStatus {
        Accepted => "Accepted",
        Unknown => "Unknown",
    }
}

wire_enum! {
    /// Encoding of a display-message body.
    MessageFormat {
        Ascii => "ASCII",
        Html => "HTML",
        Uri => "URI",
        Utf8 => "UTF8",
    }
}

wire_enum! {
    /// How prominently a display message must be shown.
    MessagePriority {
        AlwaysFront => "AlwaysFront",
        InFront => "InFront",
        NormalCycle => "NormalCycle",
    }
}

wire_enum! {
    /// Charging-session state during which a message is displayed.
    MessageState {
        Charging => "Charging",
        Faulted => "Faulted",
        Idle => "Idle",
        Unavailable => "Unavailable",
    }
}

wire_enum! {
    /// Outcome of installing a display message.
    DisplayMessageStatus {
        Accepted => "Accepted",
        NotSupportedMessageFormat => "NotSupportedMessageFormat",
        Rejected => "Rejected",
        NotSupportedPriority => "NotSupportedPriority",
        NotSupportedState => "NotSupportedState",
        UnknownTransaction => "UnknownTransaction",
    }
}

wire_enum! {
    /// Outcome of a GetDisplayMessages request.
    GetDisplayMessagesStatus {
        Accepted => "Accepted",
        Unknown => "Unknown",
    }
}

wire_enum! {
    /// Plain accepted/rejected verdict.
    GenericStatus {
        Accepted => "Accepted",
        Rejected => "Rejected",
    }
}

wire_enum! {
    /// Stack a charging profile belongs to.
    ChargingProfilePurpose {
        ChargingStationExternalConstraints => "ChargingStationExternalConstraints",
        ChargingStationMaxProfile => "ChargingStationMaxProfile",
        TxDefaultProfile => "TxDefaultProfile",
        TxProfile => "TxProfile",
    }
}

wire_enum! {
    /// How a charging profile's schedule is anchored in time.
    ChargingProfileKind {
        Absolute => "Absolute",
        Recurring => "Recurring",
        Relative => "Relative",
    }
}

wire_enum! {
    /// Unit in which schedule limits are expressed.
    ChargingRateUnit {
        W => "W",
        A => "A",
    }
}

wire_enum! {
    /// Recurrence period of a recurring charging profile.
    RecurrencyKind {
        Daily => "Daily",
        Weekly => "Weekly",
    }
}

wire_enum! {
    /// Station's answer to SetChargingProfile.
    ChargingProfileStatus {
        Accepted => "Accepted",
        Rejected => "Rejected",
    }
}

wire_enum! {
    /// Station's answer to a remote start/stop request.
    RequestStartStopStatus {
        Accepted => "Accepted",
        Rejected => "Rejected",
    }
}

wire_enum! {
    /// Kind of reset being requested.
    ResetType {
        Immediate => "Immediate",
        OnIdle => "OnIdle",
    }
}

wire_enum! {
    /// Station's answer to a reset request.
    ResetStatus {
        Accepted => "Accepted",
        Rejected => "Rejected",
        Scheduled => "Scheduled",
    }
}

wire_enum! {
    /// Station's answer to an UpdateFirmware request.
    UpdateFirmwareStatus {
        Accepted => "Accepted",
        Rejected => "Rejected",
        AcceptedCanceled => "AcceptedCanceled",
        InvalidCertificate => "InvalidCertificate",
        RevokedCertificate => "RevokedCertificate",
    }
}

wire_enum! {
    /// Progress of a firmware download and installation.
    FirmwareStatus {
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

wire_enum! {
    /// Station's answer to a CertificateSigned delivery.
    CertificateSignedStatus {
        Accepted => "Accepted",
        Rejected => "Rejected",
    }
}

wire_enum! {
    /// Outcome of deleting a certificate.
    DeleteCertificateStatus {
        Accepted => "Accepted",
        Failed => "Failed",
        NotFound => "NotFound",
    }
}

wire_enum! {
    /// Certificate use selected in a GetInstalledCertificateIds request.
    GetCertificateIdUse {
        V2GRootCertificate => "V2GRootCertificate",
        MORootCertificate => "MORootCertificate",
        CSMSRootCertificate => "CSMSRootCertificate",
        V2GCertificateChain => "V2GCertificateChain",
        ManufacturerRootCertificate => "ManufacturerRootCertificate",
    }
}

wire_enum! {
    /// Outcome of a GetInstalledCertificateIds request.
    GetInstalledCertificateStatus {
        Accepted => "Accepted",
        NotFound => "NotFound",
    }
}

wire_enum! {
    /// Certificate use named in an InstallCertificate request.
    InstallCertificateUse {
        V2GRootCertificate => "V2GRootCertificate",
        MORootCertificate => "MORootCertificate",
        CSMSRootCertificate => "CSMSRootCertificate",
        ManufacturerRootCertificate => "ManufacturerRootCertificate",
    }
}

wire_enum! {
    /// Outcome of installing a certificate.
    InstallCertificateStatus {
        Accepted => "Accepted",
        Rejected => "Rejected",
        Failed => "Failed",
    }
}

wire_enum! {
    /// Certificate verdict attached to an Authorize response.
    AuthorizeCertificateStatus {
        Accepted => "Accepted",
        SignatureError => "SignatureError",
        CertificateExpired => "CertificateExpired",
        CertificateRevoked => "CertificateRevoked",
        NoCertificateAvailable => "NoCertificateAvailable",
        CertChainError => "CertChainError",
        ContractCancelled => "ContractCancelled",
    }
}

wire_enum! {
    /// Station's answer to a ReserveNow request.
    ReserveNowStatus {
        Accepted => "Accepted",
        Faulted => "Faulted",
        Occupied => "Occupied",
        Rejected => "Rejected",
        Unavailable => "Unavailable",
    }
}

wire_enum! {
    /// Station's answer to a CancelReservation request.
    CancelReservationStatus {
        Accepted => "Accepted",
        Rejected => "Rejected",
    }
}
