use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fleetcare_auth::Role;
use fleetcare_core::{DomainError, DomainResult, Entity, EntityId, UserId};
use fleetcare_vehicles::{Mileage, VehicleId};

use crate::{Currency, Money, ServiceType};

/// Maintenance record identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaintenanceRecordId(pub EntityId);

impl MaintenanceRecordId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for MaintenanceRecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

const MAX_DESCRIPTION_LEN: usize = 500;
const MAX_WORKSHOP_LEN: usize = 100;
const MAX_NOTES_LEN: usize = 1000;

/// Entity: a service performed on a vehicle.
///
/// Immutable by default; only description, cost, invoice URL and notes may
/// change after creation. Everything else is fixed the moment the service
/// happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceHistory {
    id: MaintenanceRecordId,
    vehicle_id: VehicleId,
    service_type: ServiceType,
    description: Option<String>,
    service_date: DateTime<Utc>,
    mileage_at_service: Mileage,
    cost: Option<Money>,
    workshop_name: Option<String>,
    invoice_url: Option<String>,
    notes: Option<String>,
    created_by: UserId,
    created_by_role: Role,
    created_at: DateTime<Utc>,
}

/// Input for recording a new service (raw primitives, validated by `create`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMaintenanceRecord {
    pub id: MaintenanceRecordId,
    pub vehicle_id: VehicleId,
    pub service_type: String,
    pub description: Option<String>,
    pub service_date: DateTime<Utc>,
    pub mileage_at_service: u32,
    pub cost: Option<Decimal>,
    pub currency: Option<String>,
    pub workshop_name: Option<String>,
    pub invoice_url: Option<String>,
    pub notes: Option<String>,
    pub created_by: UserId,
    pub created_by_role: Role,
}

/// Updatable subset of a record; each field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMaintenanceInfo {
    pub description: Option<String>,
    pub cost: Option<Decimal>,
    pub currency: Option<String>,
    pub invoice_url: Option<String>,
    pub notes: Option<String>,
}

/// Persisted shape of a maintenance record (plain primitives).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceHistoryRecord {
    pub id: MaintenanceRecordId,
    pub vehicle_id: VehicleId,
    pub service_type: String,
    pub description: Option<String>,
    pub service_date: DateTime<Utc>,
    pub mileage_at_service: u32,
    pub cost: Option<Decimal>,
    pub currency: Option<String>,
    pub workshop_name: Option<String>,
    pub invoice_url: Option<String>,
    pub notes: Option<String>,
    pub created_by: UserId,
    pub created_by_role: String,
    pub created_at: DateTime<Utc>,
}

impl MaintenanceHistory {
    /// Validate all invariants and construct; a failing invariant aborts the
    /// whole construction.
    pub fn create(new: NewMaintenanceRecord, now: DateTime<Utc>) -> DomainResult<Self> {
        if new.service_date > now {
            return Err(DomainError::validation(
                "service date cannot be in the future",
            ));
        }
        if let Some(d) = new.description.as_deref() {
            validate_len("description", d, MAX_DESCRIPTION_LEN)?;
        }
        if let Some(w) = new.workshop_name.as_deref() {
            validate_len("workshop name", w, MAX_WORKSHOP_LEN)?;
        }
        if let Some(n) = new.notes.as_deref() {
            validate_len("notes", n, MAX_NOTES_LEN)?;
        }

        let service_type: ServiceType = new.service_type.parse()?;
        let mileage_at_service = Mileage::new(new.mileage_at_service)?;
        let cost = build_cost(new.cost, new.currency.as_deref())?;

        Ok(Self {
            id: new.id,
            vehicle_id: new.vehicle_id,
            service_type,
            description: new.description,
            service_date: new.service_date,
            mileage_at_service,
            cost,
            workshop_name: new.workshop_name,
            invoice_url: new.invoice_url,
            notes: new.notes,
            created_by: new.created_by,
            created_by_role: new.created_by_role,
            created_at: now,
        })
    }

    /// Rebuild from persisted primitives, reconstructing value objects but
    /// skipping business rules already enforced at creation (e.g. the
    /// future-date check: a record legitimately ages past `now`).
    pub fn from_primitives(record: MaintenanceHistoryRecord) -> DomainResult<Self> {
        let service_type: ServiceType = record.service_type.parse()?;
        let mileage_at_service = Mileage::new(record.mileage_at_service)?;
        let cost = build_cost(record.cost, record.currency.as_deref())?;
        let created_by_role: Role = record.created_by_role.parse()?;

        Ok(Self {
            id: record.id,
            vehicle_id: record.vehicle_id,
            service_type,
            description: record.description,
            service_date: record.service_date,
            mileage_at_service,
            cost,
            workshop_name: record.workshop_name,
            invoice_url: record.invoice_url,
            notes: record.notes,
            created_by: record.created_by,
            created_by_role,
            created_at: record.created_at,
        })
    }

    pub fn to_primitives(&self) -> MaintenanceHistoryRecord {
        MaintenanceHistoryRecord {
            id: self.id,
            vehicle_id: self.vehicle_id,
            service_type: self.service_type.as_str().to_string(),
            description: self.description.clone(),
            service_date: self.service_date,
            mileage_at_service: self.mileage_at_service.value(),
            cost: self.cost.map(|c| c.amount()),
            currency: self.cost.map(|c| c.currency().as_str().to_string()),
            workshop_name: self.workshop_name.clone(),
            invoice_url: self.invoice_url.clone(),
            notes: self.notes.clone(),
            created_by: self.created_by,
            created_by_role: self.created_by_role.as_str().to_string(),
            created_at: self.created_at,
        }
    }

    pub fn id_typed(&self) -> MaintenanceRecordId {
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

    pub fn service_date(&self) -> DateTime<Utc> {
        self.service_date
    }

    pub fn mileage_at_service(&self) -> Mileage {
        self.mileage_at_service
    }

    pub fn cost(&self) -> Option<&Money> {
        self.cost.as_ref()
    }

    pub fn workshop_name(&self) -> Option<&str> {
        self.workshop_name.as_deref()
    }

    pub fn invoice_url(&self) -> Option<&str> {
        self.invoice_url.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_by(&self) -> UserId {
        self.created_by
    }

    pub fn created_by_role(&self) -> Role {
        self.created_by_role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Apply the updatable subset. All inputs are validated before any field
    /// is assigned, so a rejected update leaves the record untouched.
    pub fn update_info(&mut self, update: UpdateMaintenanceInfo) -> DomainResult<()> {
        if let Some(d) = update.description.as_deref() {
            validate_len("description", d, MAX_DESCRIPTION_LEN)?;
        }
        if let Some(n) = update.notes.as_deref() {
            validate_len("notes", n, MAX_NOTES_LEN)?;
        }
        let new_cost = match update.cost {
            Some(amount) => Some(
                build_cost(Some(amount), update.currency.as_deref())?
                    .ok_or_else(|| DomainError::validation("currency is required with cost"))?,
            ),
            None => None,
        };

        if let Some(d) = update.description {
            self.description = Some(d);
        }
        if let Some(cost) = new_cost {
            self.cost = Some(cost);
        }
        if let Some(url) = update.invoice_url {
            self.invoice_url = Some(url);
        }
        if let Some(n) = update.notes {
            self.notes = Some(n);
        }
        Ok(())
    }
}

impl Entity for MaintenanceHistory {
    type Id = MaintenanceRecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn build_cost(amount: Option<Decimal>, currency: Option<&str>) -> DomainResult<Option<Money>> {
    match amount {
        None => Ok(None),
        Some(amount) => {
            let currency: Currency = currency
                .ok_or_else(|| DomainError::validation("currency is required with cost"))?
                .parse()?;
            Ok(Some(Money::new(amount, currency)?))
        }
    }
}

fn validate_len(field: &str, value: &str, max: usize) -> DomainResult<()> {
    if value.chars().count() > max {
        return Err(DomainError::validation(format!(
            "{field} must not exceed {max} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_record_id() -> MaintenanceRecordId {
        MaintenanceRecordId::new(EntityId::new())
    }

    fn test_vehicle_id() -> VehicleId {
        VehicleId::new(EntityId::new())
    }

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn new_record(now: DateTime<Utc>) -> NewMaintenanceRecord {
        NewMaintenanceRecord {
            id: test_record_id(),
            vehicle_id: test_vehicle_id(),
            service_type: "OIL_CHANGE".to_string(),
            description: Some("5W-30 synthetic".to_string()),
            service_date: now - chrono::Duration::days(1),
            mileage_at_service: 44_500,
            cost: Some(dec("899.99")),
            currency: Some("MXN".to_string()),
            workshop_name: Some("Taller Juarez".to_string()),
            invoice_url: Some("https://invoices.example/f-1001.pdf".to_string()),
            notes: None,
            created_by: UserId::new(),
            created_by_role: Role::VehicleOwner,
        }
    }

    #[test]
    fn create_round_trips_every_field() {
        let now = test_time();
        let new = new_record(now);
        let record = MaintenanceHistory::create(new.clone(), now).unwrap();

        assert_eq!(record.id_typed(), new.id);
        assert_eq!(record.vehicle_id(), new.vehicle_id);
        assert_eq!(record.service_type(), ServiceType::OilChange);
        assert_eq!(record.description(), new.description.as_deref());
        assert_eq!(record.service_date(), new.service_date);
        assert_eq!(record.mileage_at_service().value(), 44_500);
        assert_eq!(record.cost().unwrap().amount(), dec("899.99"));
        assert_eq!(record.cost().unwrap().currency(), Currency::Mxn);
        assert_eq!(record.workshop_name(), new.workshop_name.as_deref());
        assert_eq!(record.invoice_url(), new.invoice_url.as_deref());
        assert_eq!(record.notes(), None);
        assert_eq!(record.created_by(), new.created_by);
        assert_eq!(record.created_by_role(), Role::VehicleOwner);
        assert_eq!(record.created_at(), now);
    }

    #[test]
    fn create_rejects_future_service_date() {
        let now = test_time();
        let mut new = new_record(now);
        new.service_date = now + chrono::Duration::minutes(1);
        assert!(matches!(
            MaintenanceHistory::create(new, now),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn create_rejects_oversized_text_fields() {
        let now = test_time();

        let mut new = new_record(now);
        new.description = Some("x".repeat(501));
        assert!(MaintenanceHistory::create(new, now).is_err());

        let mut new = new_record(now);
        new.workshop_name = Some("x".repeat(101));
        assert!(MaintenanceHistory::create(new, now).is_err());

        let mut new = new_record(now);
        new.notes = Some("x".repeat(1001));
        assert!(MaintenanceHistory::create(new, now).is_err());
    }

    #[test]
    fn create_rejects_cost_without_currency() {
        let now = test_time();
        let mut new = new_record(now);
        new.currency = None;
        assert!(matches!(
            MaintenanceHistory::create(new, now),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn update_info_changes_only_supplied_fields() {
        let now = test_time();
        let mut record = MaintenanceHistory::create(new_record(now), now).unwrap();

        record
            .update_info(UpdateMaintenanceInfo {
                notes: Some("warranty claim pending".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(record.notes(), Some("warranty claim pending"));
        assert_eq!(record.description(), Some("5W-30 synthetic"));
        assert_eq!(record.cost().unwrap().amount(), dec("899.99"));
    }

    #[test]
    fn update_info_rejects_oversized_description_without_mutation() {
        let now = test_time();
        let mut record = MaintenanceHistory::create(new_record(now), now).unwrap();

        let err = record
            .update_info(UpdateMaintenanceInfo {
                description: Some("x".repeat(501)),
                notes: Some("should not be applied".to_string()),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(record.description(), Some("5W-30 synthetic"));
        assert_eq!(record.notes(), None);
    }

    #[test]
    fn primitives_round_trip() {
        let now = test_time();
        let record = MaintenanceHistory::create(new_record(now), now).unwrap();
        let rebuilt = MaintenanceHistory::from_primitives(record.to_primitives()).unwrap();
        assert_eq!(rebuilt, record);
    }

    #[test]
    fn from_primitives_accepts_old_service_dates_but_rejects_bad_type() {
        let now = test_time();
        let mut row = MaintenanceHistory::create(new_record(now), now)
            .unwrap()
            .to_primitives();
        row.service_type = "CAR_WASH".to_string();
        assert!(MaintenanceHistory::from_primitives(row).is_err());
    }
}
