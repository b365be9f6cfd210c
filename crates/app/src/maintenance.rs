//! Maintenance history use cases.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fleetcare_auth::Principal;
use fleetcare_core::{DomainError, DomainResult, EntityId};
use fleetcare_maintenance::{
    MaintenanceHistory, MaintenanceRecordId, NewMaintenanceRecord, UpdateMaintenanceInfo,
};
use fleetcare_vehicles::{Vehicle, VehicleId};

use crate::access::{ensure_can_view, ensure_owned};
use crate::ports::{HistoryQuery, MaintenanceHistoryRepository, VehicleRepository};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMaintenanceInput {
    pub service_type: String,
    pub description: Option<String>,
    pub service_date: DateTime<Utc>,
    pub mileage_at_service: u32,
    pub cost: Option<Decimal>,
    pub currency: Option<String>,
    pub workshop_name: Option<String>,
    pub invoice_url: Option<String>,
    pub notes: Option<String>,
}

pub struct MaintenanceService {
    vehicles: Arc<dyn VehicleRepository>,
    history: Arc<dyn MaintenanceHistoryRepository>,
}

impl MaintenanceService {
    pub fn new(
        vehicles: Arc<dyn VehicleRepository>,
        history: Arc<dyn MaintenanceHistoryRepository>,
    ) -> Self {
        Self { vehicles, history }
    }

    /// Record a completed service against an owned vehicle.
    ///
    /// The odometer reading at service time must not exceed the vehicle's
    /// current reading; the record carries who created it and in what role.
    pub fn create_record(
        &self,
        principal: &Principal,
        vehicle_id: VehicleId,
        input: CreateMaintenanceInput,
    ) -> DomainResult<MaintenanceHistory> {
        let vehicle = self.require_vehicle(vehicle_id)?;
        ensure_owned(&vehicle, principal)?;

        if input.mileage_at_service > vehicle.mileage().value() {
            return Err(DomainError::invariant(format!(
                "mileage at service ({} km) exceeds the vehicle's recorded {} km",
                input.mileage_at_service,
                vehicle.mileage().value()
            )));
        }

        let record = MaintenanceHistory::create(
            NewMaintenanceRecord {
                id: MaintenanceRecordId::new(EntityId::new()),
                vehicle_id,
                service_type: input.service_type,
                description: input.description,
                service_date: input.service_date,
                mileage_at_service: input.mileage_at_service,
                cost: input.cost,
                currency: input.currency,
                workshop_name: input.workshop_name,
                invoice_url: input.invoice_url,
                notes: input.notes,
                created_by: principal.user_id,
                created_by_role: principal.role,
            },
            Utc::now(),
        )?;
        self.history.save(&record)?;

        tracing::info!(
            record_id = %record.id_typed(),
            vehicle_id = %vehicle_id,
            service_type = %record.service_type(),
            "maintenance recorded"
        );
        Ok(record)
    }

    /// A vehicle's history, optionally filtered by service type and date
    /// window. Admin roles may read any vehicle's history.
    pub fn get_history(
        &self,
        principal: &Principal,
        vehicle_id: VehicleId,
        query: &HistoryQuery,
    ) -> DomainResult<Vec<MaintenanceHistory>> {
        let vehicle = self.require_vehicle(vehicle_id)?;
        ensure_can_view(&vehicle, principal)?;
        self.history.find_by_vehicle(vehicle_id, query)
    }

    pub fn update_record(
        &self,
        principal: &Principal,
        vehicle_id: VehicleId,
        record_id: MaintenanceRecordId,
        update: UpdateMaintenanceInfo,
    ) -> DomainResult<MaintenanceHistory> {
        let (_, mut record) = self.require_owned_record(principal, vehicle_id, record_id)?;
        record.update_info(update)?;
        self.history.save(&record)?;

        tracing::info!(record_id = %record_id, "maintenance record updated");
        Ok(record)
    }

    pub fn delete_record(
        &self,
        principal: &Principal,
        vehicle_id: VehicleId,
        record_id: MaintenanceRecordId,
    ) -> DomainResult<()> {
        self.require_owned_record(principal, vehicle_id, record_id)?;
        self.history.delete(record_id)?;

        tracing::info!(record_id = %record_id, vehicle_id = %vehicle_id, "maintenance record deleted");
        Ok(())
    }

    fn require_vehicle(&self, id: VehicleId) -> DomainResult<Vehicle> {
        self.vehicles
            .find_by_id(id)?
            .ok_or_else(|| DomainError::not_found(format!("vehicle {id} not found")))
    }

    /// Resolve a record mutation: the caller must own the vehicle and the
    /// record must belong to it.
    fn require_owned_record(
        &self,
        principal: &Principal,
        vehicle_id: VehicleId,
        record_id: MaintenanceRecordId,
    ) -> DomainResult<(Vehicle, MaintenanceHistory)> {
        let vehicle = self.require_vehicle(vehicle_id)?;
        ensure_owned(&vehicle, principal)?;

        let record = self
            .history
            .find_by_id(record_id)?
            .ok_or_else(|| DomainError::not_found(format!("maintenance record {record_id} not found")))?;
        if record.vehicle_id() != vehicle_id {
            return Err(DomainError::not_owned(format!(
                "maintenance record {record_id} does not belong to vehicle {vehicle_id}"
            )));
        }
        Ok((vehicle, record))
    }
}
