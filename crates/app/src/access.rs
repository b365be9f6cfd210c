//! Ownership/role checks shared by the use-case services.

use fleetcare_auth::Principal;
use fleetcare_core::{DomainError, DomainResult};
use fleetcare_vehicles::Vehicle;

/// Mutations are always owner-only, regardless of role.
pub fn ensure_owned(vehicle: &Vehicle, principal: &Principal) -> DomainResult<()> {
    if vehicle.owner_id() != principal.user_id {
        return Err(DomainError::not_owned(format!(
            "vehicle {} is not owned by user {}",
            vehicle.id_typed(),
            principal.user_id
        )));
    }
    Ok(())
}

/// Reads: admins may inspect any vehicle; everyone else must own it.
pub fn ensure_can_view(vehicle: &Vehicle, principal: &Principal) -> DomainResult<()> {
    if principal.role.can_read_any_vehicle() {
        tracing::debug!(
            vehicle_id = %vehicle.id_typed(),
            role = %principal.role,
            "cross-owner read"
        );
        return Ok(());
    }
    ensure_owned(vehicle, principal)
}
