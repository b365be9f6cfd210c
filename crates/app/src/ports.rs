//! Persistence ports consumed by the use-case services.
//!
//! Adapters (in-memory for tests/dev, a database elsewhere) implement these
//! traits. They are synchronous: the domain core is pure computation and the
//! surrounding service layer owns any async plumbing. Uniqueness of plates
//! and VINs across vehicles is enforced here, not in the entities.

use chrono::{DateTime, Utc};

use fleetcare_core::{DomainResult, UserId};
use fleetcare_maintenance::{MaintenanceHistory, MaintenanceRecordId, ServiceType};
use fleetcare_reminders::{ReminderId, ReminderStatus, ServiceReminder};
use fleetcare_vehicles::{LicensePlate, Vehicle, VehicleId, Vin};

/// Filter for a vehicle's maintenance history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    pub service_type: Option<ServiceType>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

pub trait VehicleRepository: Send + Sync {
    fn save(&self, vehicle: &Vehicle) -> DomainResult<()>;
    fn find_by_id(&self, id: VehicleId) -> DomainResult<Option<Vehicle>>;
    fn find_by_owner(&self, owner_id: UserId) -> DomainResult<Vec<Vehicle>>;
    fn find_by_plate(&self, plate: &LicensePlate) -> DomainResult<Option<Vehicle>>;
    fn find_by_vin(&self, vin: &Vin) -> DomainResult<Option<Vehicle>>;
    fn exists_by_plate(&self, plate: &LicensePlate) -> DomainResult<bool>;
    fn exists_by_vin(&self, vin: &Vin) -> DomainResult<bool>;
    fn delete(&self, id: VehicleId) -> DomainResult<()>;
}

pub trait MaintenanceHistoryRepository: Send + Sync {
    fn save(&self, record: &MaintenanceHistory) -> DomainResult<()>;
    fn find_by_id(&self, id: MaintenanceRecordId) -> DomainResult<Option<MaintenanceHistory>>;
    fn find_by_vehicle(
        &self,
        vehicle_id: VehicleId,
        query: &HistoryQuery,
    ) -> DomainResult<Vec<MaintenanceHistory>>;
    fn delete(&self, id: MaintenanceRecordId) -> DomainResult<()>;
    fn delete_by_vehicle(&self, vehicle_id: VehicleId) -> DomainResult<()>;
}

pub trait ServiceReminderRepository: Send + Sync {
    fn save(&self, reminder: &ServiceReminder) -> DomainResult<()>;
    fn find_by_id(&self, id: ReminderId) -> DomainResult<Option<ServiceReminder>>;
    fn find_by_vehicle(
        &self,
        vehicle_id: VehicleId,
        status: Option<ReminderStatus>,
    ) -> DomainResult<Vec<ServiceReminder>>;
    fn delete(&self, id: ReminderId) -> DomainResult<()>;
    fn delete_by_vehicle(&self, vehicle_id: VehicleId) -> DomainResult<()>;
}
