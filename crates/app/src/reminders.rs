//! Service-reminder use cases.
//!
//! Overdue evaluation is lazy: reminders are re-checked against the current
//! odometer and clock whenever they are created or listed, and the result is
//! persisted on creation only. Listing evaluates in memory so a stale store
//! never hides an overdue reminder.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fleetcare_auth::Principal;
use fleetcare_core::{DomainError, DomainResult, EntityId};
use fleetcare_reminders::{NewReminder, ReminderId, ReminderStatus, ServiceReminder};
use fleetcare_vehicles::{Vehicle, VehicleId};

use crate::access::ensure_owned;
use crate::ports::{ServiceReminderRepository, VehicleRepository};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReminderInput {
    pub service_type: String,
    pub due_type: String,
    pub due_value: String,
    pub description: Option<String>,
}

pub struct ReminderService {
    vehicles: Arc<dyn VehicleRepository>,
    reminders: Arc<dyn ServiceReminderRepository>,
}

impl ReminderService {
    pub fn new(
        vehicles: Arc<dyn VehicleRepository>,
        reminders: Arc<dyn ServiceReminderRepository>,
    ) -> Self {
        Self { vehicles, reminders }
    }

    /// Create a reminder for an owned vehicle. A reminder whose condition is
    /// already met is stored as `OVERDUE` right away.
    pub fn create_reminder(
        &self,
        principal: &Principal,
        vehicle_id: VehicleId,
        input: CreateReminderInput,
    ) -> DomainResult<ServiceReminder> {
        let vehicle = self.require_vehicle(vehicle_id)?;
        ensure_owned(&vehicle, principal)?;

        let now = Utc::now();
        let mut reminder = ServiceReminder::create(
            NewReminder {
                id: ReminderId::new(EntityId::new()),
                vehicle_id,
                service_type: input.service_type,
                due_type: input.due_type,
                due_value: input.due_value,
                description: input.description,
            },
            now,
        )?;
        reminder.check_if_overdue(vehicle.mileage(), now);
        self.reminders.save(&reminder)?;

        tracing::info!(
            reminder_id = %reminder.id_typed(),
            vehicle_id = %vehicle_id,
            status = %reminder.status(),
            "reminder created"
        );
        Ok(reminder)
    }

    /// List a vehicle's reminders, re-evaluated against the current odometer
    /// and clock. The status filter applies to the stored status; evaluation
    /// happens after filtering and is not written back.
    pub fn list_reminders(
        &self,
        principal: &Principal,
        vehicle_id: VehicleId,
        status: Option<ReminderStatus>,
    ) -> DomainResult<Vec<ServiceReminder>> {
        let vehicle = self.require_vehicle(vehicle_id)?;
        ensure_owned(&vehicle, principal)?;

        let now = Utc::now();
        let mut reminders = self.reminders.find_by_vehicle(vehicle_id, status)?;
        for reminder in &mut reminders {
            reminder.check_if_overdue(vehicle.mileage(), now);
        }
        Ok(reminders)
    }

    pub fn complete_reminder(
        &self,
        principal: &Principal,
        reminder_id: ReminderId,
    ) -> DomainResult<ServiceReminder> {
        let mut reminder = self.require_owned_reminder(principal, reminder_id)?;
        reminder.mark_as_completed()?;
        self.reminders.save(&reminder)?;

        tracing::info!(reminder_id = %reminder_id, "reminder completed");
        Ok(reminder)
    }

    pub fn dismiss_reminder(
        &self,
        principal: &Principal,
        reminder_id: ReminderId,
    ) -> DomainResult<ServiceReminder> {
        let mut reminder = self.require_owned_reminder(principal, reminder_id)?;
        reminder.dismiss()?;
        self.reminders.save(&reminder)?;

        tracing::info!(reminder_id = %reminder_id, "reminder dismissed");
        Ok(reminder)
    }

    /// Push the reminder's next evaluation out to `until` and reset it to
    /// `PENDING`.
    pub fn postpone_reminder(
        &self,
        principal: &Principal,
        reminder_id: ReminderId,
        until: DateTime<Utc>,
    ) -> DomainResult<ServiceReminder> {
        let mut reminder = self.require_owned_reminder(principal, reminder_id)?;
        reminder.postpone(until, Utc::now())?;
        self.reminders.save(&reminder)?;

        tracing::info!(reminder_id = %reminder_id, until = %until, "reminder postponed");
        Ok(reminder)
    }

    pub fn update_reminder_description(
        &self,
        principal: &Principal,
        reminder_id: ReminderId,
        description: String,
    ) -> DomainResult<ServiceReminder> {
        let mut reminder = self.require_owned_reminder(principal, reminder_id)?;
        reminder.update_description(description)?;
        self.reminders.save(&reminder)?;
        Ok(reminder)
    }

    pub fn delete_reminder(
        &self,
        principal: &Principal,
        reminder_id: ReminderId,
    ) -> DomainResult<()> {
        self.require_owned_reminder(principal, reminder_id)?;
        self.reminders.delete(reminder_id)?;

        tracing::info!(reminder_id = %reminder_id, "reminder deleted");
        Ok(())
    }

    fn require_vehicle(&self, id: VehicleId) -> DomainResult<Vehicle> {
        self.vehicles
            .find_by_id(id)?
            .ok_or_else(|| DomainError::not_found(format!("vehicle {id} not found")))
    }

    /// Resolve a reminder mutation through its vehicle's ownership.
    fn require_owned_reminder(
        &self,
        principal: &Principal,
        reminder_id: ReminderId,
    ) -> DomainResult<ServiceReminder> {
        let reminder = self
            .reminders
            .find_by_id(reminder_id)?
            .ok_or_else(|| DomainError::not_found(format!("reminder {reminder_id} not found")))?;
        let vehicle = self.require_vehicle(reminder.vehicle_id())?;
        ensure_owned(&vehicle, principal)?;
        Ok(reminder)
    }
}
