use core::str::FromStr;

use serde::{Deserialize, Serialize};

use fleetcare_core::{DomainError, ValueObject};

/// Kind of maintenance service, from a fixed catalog of 12 codes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceType {
    OilChange,
    TireRotation,
    BrakeInspection,
    BrakeReplacement,
    FilterReplacement,
    BatteryReplacement,
    Alignment,
    TransmissionService,
    CoolantFlush,
    EngineTuneup,
    Inspection,
    Other,
}

impl ServiceType {
    pub const ALL: [ServiceType; 12] = [
        ServiceType::OilChange,
        ServiceType::TireRotation,
        ServiceType::BrakeInspection,
        ServiceType::BrakeReplacement,
        ServiceType::FilterReplacement,
        ServiceType::BatteryReplacement,
        ServiceType::Alignment,
        ServiceType::TransmissionService,
        ServiceType::CoolantFlush,
        ServiceType::EngineTuneup,
        ServiceType::Inspection,
        ServiceType::Other,
    ];

    /// Stable wire/persistence code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::OilChange => "OIL_CHANGE",
            ServiceType::TireRotation => "TIRE_ROTATION",
            ServiceType::BrakeInspection => "BRAKE_INSPECTION",
            ServiceType::BrakeReplacement => "BRAKE_REPLACEMENT",
            ServiceType::FilterReplacement => "FILTER_REPLACEMENT",
            ServiceType::BatteryReplacement => "BATTERY_REPLACEMENT",
            ServiceType::Alignment => "ALIGNMENT",
            ServiceType::TransmissionService => "TRANSMISSION_SERVICE",
            ServiceType::CoolantFlush => "COOLANT_FLUSH",
            ServiceType::EngineTuneup => "ENGINE_TUNEUP",
            ServiceType::Inspection => "INSPECTION",
            ServiceType::Other => "OTHER",
        }
    }

    /// Human-readable name for display surfaces.
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceType::OilChange => "Oil change",
            ServiceType::TireRotation => "Tire rotation",
            ServiceType::BrakeInspection => "Brake inspection",
            ServiceType::BrakeReplacement => "Brake replacement",
            ServiceType::FilterReplacement => "Filter replacement",
            ServiceType::BatteryReplacement => "Battery replacement",
            ServiceType::Alignment => "Wheel alignment",
            ServiceType::TransmissionService => "Transmission service",
            ServiceType::CoolantFlush => "Coolant flush",
            ServiceType::EngineTuneup => "Engine tune-up",
            ServiceType::Inspection => "General inspection",
            ServiceType::Other => "Other",
        }
    }
}

impl ValueObject for ServiceType {}

impl core::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown service type '{s}'")))
    }
}
