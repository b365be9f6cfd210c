use core::str::FromStr;

use serde::{Deserialize, Serialize};

use fleetcare_core::DomainError;

/// Role of an acting identity.
///
/// Parsing is strict: an absent or unknown role never falls back to a
/// privileged default. Callers that cannot produce a known role fail
/// authorization instead.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    VehicleOwner,
    WorkshopAdmin,
    SystemAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::VehicleOwner => "VEHICLE_OWNER",
            Role::WorkshopAdmin => "WORKSHOP_ADMIN",
            Role::SystemAdmin => "SYSTEM_ADMIN",
        }
    }

    /// Workshop and system administrators may read any vehicle's history;
    /// everyone else is limited to vehicles they own. Mutations are always
    /// owner-only regardless of role.
    pub fn can_read_any_vehicle(&self) -> bool {
        matches!(self, Role::WorkshopAdmin | Role::SystemAdmin)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VEHICLE_OWNER" => Ok(Role::VehicleOwner),
            "WORKSHOP_ADMIN" => Ok(Role::WorkshopAdmin),
            "SYSTEM_ADMIN" => Ok(Role::SystemAdmin),
            other => Err(DomainError::validation(format!("unknown role '{other}'"))),
        }
    }
}
