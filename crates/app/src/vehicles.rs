//! Vehicle registration and lifecycle use cases.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use fleetcare_auth::Principal;
use fleetcare_core::{DomainError, DomainResult, EntityId};
use fleetcare_vehicles::{LicensePlate, NewVehicle, Vehicle, VehicleId, Vin};

use crate::access::{ensure_can_view, ensure_owned};
use crate::ports::{MaintenanceHistoryRepository, ServiceReminderRepository, VehicleRepository};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVehicleInput {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub current_mileage: u32,
    pub vin: Option<String>,
    pub photo_url: Option<String>,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateVehicleInput {
    pub current_mileage: Option<u32>,
    pub vin: Option<String>,
    pub photo_url: Option<String>,
}

pub struct VehicleService {
    vehicles: Arc<dyn VehicleRepository>,
    history: Arc<dyn MaintenanceHistoryRepository>,
    reminders: Arc<dyn ServiceReminderRepository>,
}

impl VehicleService {
    pub fn new(
        vehicles: Arc<dyn VehicleRepository>,
        history: Arc<dyn MaintenanceHistoryRepository>,
        reminders: Arc<dyn ServiceReminderRepository>,
    ) -> Self {
        Self {
            vehicles,
            history,
            reminders,
        }
    }

    /// Register a vehicle for the caller. Plate and VIN must be unique
    /// across the whole fleet.
    pub fn create_vehicle(
        &self,
        principal: &Principal,
        input: CreateVehicleInput,
    ) -> DomainResult<Vehicle> {
        let plate = LicensePlate::new(&input.license_plate)?;
        if self.vehicles.exists_by_plate(&plate)? {
            return Err(DomainError::conflict(format!(
                "a vehicle with license plate {plate} is already registered"
            )));
        }
        if let Some(raw) = input.vin.as_deref() {
            let vin = Vin::new(raw)?;
            if self.vehicles.exists_by_vin(&vin)? {
                return Err(DomainError::conflict(format!(
                    "a vehicle with VIN {vin} is already registered"
                )));
            }
        }

        let vehicle = Vehicle::create(
            NewVehicle {
                id: VehicleId::new(EntityId::new()),
                owner_id: principal.user_id,
                brand: input.brand,
                model: input.model,
                year: input.year,
                license_plate: input.license_plate,
                current_mileage: input.current_mileage,
                vin: input.vin,
                photo_url: input.photo_url,
            },
            Utc::now(),
        )?;
        self.vehicles.save(&vehicle)?;

        tracing::info!(
            vehicle_id = %vehicle.id_typed(),
            owner_id = %principal.user_id,
            plate = %vehicle.plate(),
            "vehicle registered"
        );
        Ok(vehicle)
    }

    pub fn get_vehicle(&self, principal: &Principal, id: VehicleId) -> DomainResult<Vehicle> {
        let vehicle = self.require_vehicle(id)?;
        ensure_can_view(&vehicle, principal)?;
        Ok(vehicle)
    }

    /// Vehicles owned by the caller. Admin roles widen reads per-vehicle,
    /// not the listing.
    pub fn list_vehicles(&self, principal: &Principal) -> DomainResult<Vec<Vehicle>> {
        self.vehicles.find_by_owner(principal.user_id)
    }

    /// Apply a partial update. Mileage must not regress; a replacement VIN
    /// must not collide with another vehicle's.
    pub fn update_vehicle(
        &self,
        principal: &Principal,
        id: VehicleId,
        input: UpdateVehicleInput,
    ) -> DomainResult<Vehicle> {
        let mut vehicle = self.require_vehicle(id)?;
        ensure_owned(&vehicle, principal)?;

        let now = Utc::now();
        if let Some(km) = input.current_mileage {
            vehicle.update_mileage(km, now)?;
        }
        if let Some(raw) = input.vin.as_deref() {
            let vin = Vin::new(raw)?;
            if let Some(other) = self.vehicles.find_by_vin(&vin)? {
                if other.id_typed() != vehicle.id_typed() {
                    return Err(DomainError::conflict(format!(
                        "a vehicle with VIN {vin} is already registered"
                    )));
                }
            }
            vehicle.update_vin(raw, now)?;
        }
        if input.photo_url.is_some() {
            vehicle.update_info(input.photo_url, now);
        }
        self.vehicles.save(&vehicle)?;

        tracing::info!(vehicle_id = %vehicle.id_typed(), "vehicle updated");
        Ok(vehicle)
    }

    /// Remove a vehicle together with its maintenance history and reminders.
    pub fn delete_vehicle(&self, principal: &Principal, id: VehicleId) -> DomainResult<()> {
        let vehicle = self.require_vehicle(id)?;
        ensure_owned(&vehicle, principal)?;

        self.history.delete_by_vehicle(id)?;
        self.reminders.delete_by_vehicle(id)?;
        self.vehicles.delete(id)?;

        tracing::info!(vehicle_id = %id, owner_id = %principal.user_id, "vehicle deleted");
        Ok(())
    }

    fn require_vehicle(&self, id: VehicleId) -> DomainResult<Vehicle> {
        self.vehicles
            .find_by_id(id)?
            .ok_or_else(|| DomainError::not_found(format!("vehicle {id} not found")))
    }
}
