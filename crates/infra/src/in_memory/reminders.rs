use std::collections::HashMap;
use std::sync::RwLock;

use fleetcare_app::ports::ServiceReminderRepository;
use fleetcare_core::DomainResult;
use fleetcare_reminders::{ReminderId, ReminderStatus, ServiceReminder, ServiceReminderRecord};
use fleetcare_vehicles::VehicleId;

use super::poisoned;

#[derive(Debug, Default)]
pub struct InMemoryServiceReminderRepository {
    rows: RwLock<HashMap<ReminderId, ServiceReminderRecord>>,
}

impl InMemoryServiceReminderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ServiceReminderRepository for InMemoryServiceReminderRepository {
    fn save(&self, reminder: &ServiceReminder) -> DomainResult<()> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        rows.insert(reminder.id_typed(), reminder.to_primitives());
        Ok(())
    }

    fn find_by_id(&self, id: ReminderId) -> DomainResult<Option<ServiceReminder>> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        rows.get(&id)
            .cloned()
            .map(ServiceReminder::from_primitives)
            .transpose()
    }

    fn find_by_vehicle(
        &self,
        vehicle_id: VehicleId,
        status: Option<ReminderStatus>,
    ) -> DomainResult<Vec<ServiceReminder>> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        let mut records: Vec<ServiceReminderRecord> = rows
            .values()
            .filter(|r| {
                r.vehicle_id == vehicle_id
                    && status.is_none_or(|s| r.status == s.as_str())
            })
            .cloned()
            .collect();
        records.sort_by_key(|r| r.created_at);
        records
            .into_iter()
            .map(ServiceReminder::from_primitives)
            .collect()
    }

    fn delete(&self, id: ReminderId) -> DomainResult<()> {
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
