use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fleetcare_core::{DomainError, DomainResult, Entity, EntityId};
use fleetcare_maintenance::ServiceType;
use fleetcare_vehicles::{Mileage, VehicleId};

use crate::DueCondition;

/// Reminder identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReminderId(pub EntityId);

impl ReminderId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ReminderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

const MAX_DESCRIPTION_LEN: usize = 500;

/// Reminder status lifecycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderStatus {
    Pending,
    Overdue,
    Completed,
    Dismissed,
}

impl ReminderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderStatus::Pending => "PENDING",
            ReminderStatus::Overdue => "OVERDUE",
            ReminderStatus::Completed => "COMPLETED",
            ReminderStatus::Dismissed => "DISMISSED",
        }
    }
}

impl core::fmt::Display for ReminderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReminderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(ReminderStatus::Pending),
            "OVERDUE" => Ok(ReminderStatus::Overdue),
            "COMPLETED" => Ok(ReminderStatus::Completed),
            "DISMISSED" => Ok(ReminderStatus::Dismissed),
            other => Err(DomainError::validation(format!(
                "unknown reminder status '{other}'"
            ))),
        }
    }
}

/// Entity: a service reminder for a vehicle.
///
/// Holds no clock: every time-dependent operation takes `now` as an
/// argument, and re-evaluation is triggered by the caller on reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceReminder {
    id: ReminderId,
    vehicle_id: VehicleId,
    service_type: ServiceType,
    description: Option<String>,
    due: DueCondition,
    status: ReminderStatus,
    postponed_until: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

/// Input for creating a reminder (raw primitives, validated by `create`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReminder {
    pub id: ReminderId,
    pub vehicle_id: VehicleId,
    pub service_type: String,
    pub due_type: String,
    pub due_value: String,
    pub description: Option<String>,
}

/// Persisted shape of a reminder (plain primitives).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceReminderRecord {
    pub id: ReminderId,
    pub vehicle_id: VehicleId,
    pub service_type: String,
    pub description: Option<String>,
    pub due_type: String,
    pub due_value: String,
    pub status: String,
    pub postponed_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ServiceReminder {
    /// Validate all invariants and construct in the `PENDING` state.
    pub fn create(new: NewReminder, now: DateTime<Utc>) -> DomainResult<Self> {
        let service_type: ServiceType = new.service_type.parse()?;
        let due = DueCondition::from_primitives(&new.due_type, &new.due_value)?;
        if let Some(d) = new.description.as_deref() {
            validate_description(d)?;
        }

        Ok(Self {
            id: new.id,
            vehicle_id: new.vehicle_id,
            service_type,
            description: new.description,
            due,
            status: ReminderStatus::Pending,
            postponed_until: None,
            created_at: now,
        })
    }

    /// Rebuild from persisted primitives; value objects and the status tag
    /// are reconstructed, so malformed rows are rejected.
    pub fn from_primitives(record: ServiceReminderRecord) -> DomainResult<Self> {
        let service_type: ServiceType = record.service_type.parse()?;
        let due = DueCondition::from_primitives(&record.due_type, &record.due_value)?;
        let status: ReminderStatus = record.status.parse()?;

        Ok(Self {
            id: record.id,
            vehicle_id: record.vehicle_id,
            service_type,
            description: record.description,
            due,
            status,
            postponed_until: record.postponed_until,
            created_at: record.created_at,
        })
    }

    pub fn to_primitives(&self) -> ServiceReminderRecord {
        ServiceReminderRecord {
            id: self.id,
            vehicle_id: self.vehicle_id,
            service_type: self.service_type.as_str().to_string(),
            description: self.description.clone(),
            due_type: self.due.due_type().to_string(),
            due_value: self.due.due_value(),
            status: self.status.as_str().to_string(),
            postponed_until: self.postponed_until,
            created_at: self.created_at,
        }
    }

    pub fn id_typed(&self) -> ReminderId {
        self.id
    }

    pub fn vehicle_id(&self) -> VehicleId {
        self.vehicle_id
    }

    pub fn service_type(&self) -> ServiceType {
        self.service_type
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn due_condition(&self) -> DueCondition {
        self.due
    }

    pub fn status(&self) -> ReminderStatus {
        self.status
    }

    pub fn postponed_until(&self) -> Option<DateTime<Utc>> {
        self.postponed_until
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_pending(&self) -> bool {
        self.status == ReminderStatus::Pending
    }

    pub fn is_overdue(&self) -> bool {
        self.status == ReminderStatus::Overdue
    }

    pub fn is_completed(&self) -> bool {
        self.status == ReminderStatus::Completed
    }

    pub fn is_dismissed(&self) -> bool {
        self.status == ReminderStatus::Dismissed
    }

    /// Re-evaluate the due condition.
    ///
    /// No-op unless the reminder is `PENDING` (it never regresses `OVERDUE`
    /// back to `PENDING`; only `postpone` does that) and any active
    /// postponement has lapsed. Idempotent.
    pub fn check_if_overdue(&mut self, current_mileage: Mileage, now: DateTime<Utc>) {
        if self.status != ReminderStatus::Pending {
            return;
        }
        if let Some(until) = self.postponed_until {
            if now < until {
                return;
            }
        }
        if self.due.is_due(current_mileage, now) {
            self.status = ReminderStatus::Overdue;
        }
    }

    /// Push the reminder out to a future instant, resetting `OVERDUE` back
    /// to `PENDING`.
    pub fn postpone(&mut self, until: DateTime<Utc>, now: DateTime<Utc>) -> DomainResult<()> {
        if !matches!(
            self.status,
            ReminderStatus::Pending | ReminderStatus::Overdue
        ) {
            return Err(DomainError::invariant(format!(
                "only pending or overdue reminders can be postponed (status is {})",
                self.status
            )));
        }
        if until <= now {
            return Err(DomainError::invariant(
                "postpone date must be in the future",
            ));
        }
        self.postponed_until = Some(until);
        self.status = ReminderStatus::Pending;
        Ok(())
    }

    pub fn mark_as_completed(&mut self) -> DomainResult<()> {
        if self.status == ReminderStatus::Completed {
            return Err(DomainError::invariant("reminder is already completed"));
        }
        self.status = ReminderStatus::Completed;
        Ok(())
    }

    pub fn dismiss(&mut self) -> DomainResult<()> {
        if self.status == ReminderStatus::Completed {
            return Err(DomainError::invariant(
                "cannot dismiss a completed reminder",
            ));
        }
        self.status = ReminderStatus::Dismissed;
        Ok(())
    }

    /// Replace the description; the status is untouched.
    pub fn update_description(&mut self, description: String) -> DomainResult<()> {
        validate_description(&description)?;
        self.description = Some(description);
        Ok(())
    }
}

impl Entity for ServiceReminder {
    type Id = ReminderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn validate_description(description: &str) -> DomainResult<()> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(DomainError::validation(format!(
            "description must not exceed {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(())
}
