use std::collections::HashMap;
use std::sync::RwLock;

use fleetcare_app::ports::VehicleRepository;
use fleetcare_core::{DomainResult, UserId};
use fleetcare_vehicles::{LicensePlate, Vehicle, VehicleId, VehicleRecord, Vin};

use super::poisoned;

#[derive(Debug, Default)]
pub struct InMemoryVehicleRepository {
    rows: RwLock<HashMap<VehicleId, VehicleRecord>>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VehicleRepository for InMemoryVehicleRepository {
    fn save(&self, vehicle: &Vehicle) -> DomainResult<()> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        rows.insert(vehicle.id_typed(), vehicle.to_primitives());
        Ok(())
    }

    fn find_by_id(&self, id: VehicleId) -> DomainResult<Option<Vehicle>> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        rows.get(&id)
            .cloned()
            .map(Vehicle::from_primitives)
            .transpose()
    }

    fn find_by_owner(&self, owner_id: UserId) -> DomainResult<Vec<Vehicle>> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        let mut records: Vec<VehicleRecord> = rows
            .values()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.created_at);
        records.into_iter().map(Vehicle::from_primitives).collect()
    }

    fn find_by_plate(&self, plate: &LicensePlate) -> DomainResult<Option<Vehicle>> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        rows.values()
            .find(|r| r.license_plate == plate.as_str())
            .cloned()
            .map(Vehicle::from_primitives)
            .transpose()
    }

    fn find_by_vin(&self, vin: &Vin) -> DomainResult<Option<Vehicle>> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        rows.values()
            .find(|r| r.vin.as_deref() == Some(vin.as_str()))
            .cloned()
            .map(Vehicle::from_primitives)
            .transpose()
    }

    fn exists_by_plate(&self, plate: &LicensePlate) -> DomainResult<bool> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows.values().any(|r| r.license_plate == plate.as_str()))
    }

    fn exists_by_vin(&self, vin: &Vin) -> DomainResult<bool> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows.values().any(|r| r.vin.as_deref() == Some(vin.as_str())))
    }

    fn delete(&self, id: VehicleId) -> DomainResult<()> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        rows.remove(&id);
        Ok(())
    }
}
