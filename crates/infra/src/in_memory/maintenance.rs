use std::collections::HashMap;
use std::sync::RwLock;

use fleetcare_app::ports::{HistoryQuery, MaintenanceHistoryRepository};
use fleetcare_core::DomainResult;
use fleetcare_maintenance::{MaintenanceHistory, MaintenanceHistoryRecord, MaintenanceRecordId};
use fleetcare_vehicles::VehicleId;

use super::poisoned;

#[derive(Debug, Default)]
pub struct InMemoryMaintenanceHistoryRepository {
    rows: RwLock<HashMap<MaintenanceRecordId, MaintenanceHistoryRecord>>,
}

impl InMemoryMaintenanceHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(record: &MaintenanceHistoryRecord, query: &HistoryQuery) -> bool {
    if let Some(st) = query.service_type {
        if record.service_type != st.as_str() {
            return false;
        }
    }
    if let Some(from) = query.from {
        if record.service_date < from {
            return false;
        }
    }
    if let Some(to) = query.to {
        if record.service_date > to {
            return false;
        }
    }
    true
}

impl MaintenanceHistoryRepository for InMemoryMaintenanceHistoryRepository {
    fn save(&self, record: &MaintenanceHistory) -> DomainResult<()> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        rows.insert(record.id_typed(), record.to_primitives());
        Ok(())
    }

    fn find_by_id(&self, id: MaintenanceRecordId) -> DomainResult<Option<MaintenanceHistory>> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        rows.get(&id)
            .cloned()
            .map(MaintenanceHistory::from_primitives)
            .transpose()
    }

    /// Matching records, newest service first.
    fn find_by_vehicle(
        &self,
        vehicle_id: VehicleId,
        query: &HistoryQuery,
    ) -> DomainResult<Vec<MaintenanceHistory>> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        let mut records: Vec<MaintenanceHistoryRecord> = rows
            .values()
            .filter(|r| r.vehicle_id == vehicle_id && matches(r, query))
            .cloned()
            .collect();
        records.sort_by(|a, b| b.service_date.cmp(&a.service_date));
        records
            .into_iter()
            .map(MaintenanceHistory::from_primitives)
            .collect()
    }

    fn delete(&self, id: MaintenanceRecordId) -> DomainResult<()> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        rows.remove(&id);
        Ok(())
    }

    fn delete_by_vehicle(&self, vehicle_id: VehicleId) -> DomainResult<()> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        rows.retain(|_, r| r.vehicle_id != vehicle_id);
        Ok(())
    }
}
