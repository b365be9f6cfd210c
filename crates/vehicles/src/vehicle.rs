use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use fleetcare_core::{DomainError, DomainResult, Entity, EntityId, UserId};

use crate::{LicensePlate, Mileage, Vin};

/// Vehicle identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub EntityId);

impl VehicleId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

const MIN_YEAR: i32 = 1990;
const MAX_NAME_LEN: usize = 50;

/// Entity: a registered vehicle.
///
/// Owned exclusively by its creator. The license plate is immutable once
/// set; the odometer is monotonically non-decreasing for the vehicle's
/// lifetime. Plate/VIN uniqueness across vehicles is the repository's
/// responsibility, not the entity's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    id: VehicleId,
    owner_id: UserId,
    brand: String,
    model: String,
    year: i32,
    plate: LicensePlate,
    vin: Option<Vin>,
    mileage: Mileage,
    photo_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Input for registering a new vehicle (raw primitives, validated by `create`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVehicle {
    pub id: VehicleId,
    pub owner_id: UserId,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub current_mileage: u32,
    pub vin: Option<String>,
    pub photo_url: Option<String>,
}

/// Persisted shape of a vehicle (plain primitives).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: VehicleId,
    pub owner_id: UserId,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub vin: Option<String>,
    pub current_mileage: u32,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Validate all invariants and construct; a failing invariant aborts the
    /// whole construction (no partially-valid instance is observable).
    pub fn create(new: NewVehicle, now: DateTime<Utc>) -> DomainResult<Self> {
        let brand = validated_name("brand", &new.brand)?;
        let model = validated_name("model", &new.model)?;

        let max_year = now.year() + 1;
        if new.year < MIN_YEAR || new.year > max_year {
            return Err(DomainError::validation(format!(
                "year {} out of range ({MIN_YEAR}..={max_year})",
                new.year
            )));
        }

        let plate = LicensePlate::new(&new.license_plate)?;
        let vin = new.vin.as_deref().map(Vin::new).transpose()?;
        let mileage = Mileage::new(new.current_mileage)?;

        Ok(Self {
            id: new.id,
            owner_id: new.owner_id,
            brand,
            model,
            year: new.year,
            plate,
            vin,
            mileage,
            photo_url: new.photo_url,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild from persisted primitives.
    ///
    /// Business rules already enforced at creation (year range, name lengths)
    /// are not re-checked, but value objects are reconstructed so malformed
    /// persisted data is still rejected.
    pub fn from_primitives(record: VehicleRecord) -> DomainResult<Self> {
        let plate = LicensePlate::new(&record.license_plate)?;
        let vin = record.vin.as_deref().map(Vin::new).transpose()?;
        let mileage = Mileage::new(record.current_mileage)?;

        Ok(Self {
            id: record.id,
            owner_id: record.owner_id,
            brand: record.brand,
            model: record.model,
            year: record.year,
            plate,
            vin,
            mileage,
            photo_url: record.photo_url,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }

    pub fn to_primitives(&self) -> VehicleRecord {
        VehicleRecord {
            id: self.id,
            owner_id: self.owner_id,
            brand: self.brand.clone(),
            model: self.model.clone(),
            year: self.year,
            license_plate: self.plate.as_str().to_string(),
            vin: self.vin.as_ref().map(|v| v.as_str().to_string()),
            current_mileage: self.mileage.value(),
            photo_url: self.photo_url.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn id_typed(&self) -> VehicleId {
        self.id
    }

    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn plate(&self) -> &LicensePlate {
        &self.plate
    }

    pub fn vin(&self) -> Option<&Vin> {
        self.vin.as_ref()
    }

    pub fn mileage(&self) -> Mileage {
        self.mileage
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Record a new odometer reading.
    ///
    /// Fails with an invariant violation on regression, leaving the recorded
    /// mileage untouched.
    pub fn update_mileage(&mut self, new_km: u32, now: DateTime<Utc>) -> DomainResult<()> {
        let new_mileage = Mileage::new(new_km)?;
        if !self.mileage.can_update_to(new_mileage) {
            return Err(DomainError::invariant(format!(
                "mileage regression: {new_km} km is below the recorded {} km",
                self.mileage.value()
            )));
        }
        self.mileage = new_mileage;
        self.updated_at = now;
        Ok(())
    }

    /// Replace the photo if provided; always bumps `updated_at`.
    pub fn update_info(&mut self, photo_url: Option<String>, now: DateTime<Utc>) {
        if let Some(url) = photo_url {
            self.photo_url = Some(url);
        }
        self.updated_at = now;
    }

    /// Replace the VIN. Uniqueness across vehicles is checked by the
    /// repository collaborator, not here.
    pub fn update_vin(&mut self, vin: &str, now: DateTime<Utc>) -> DomainResult<()> {
        self.vin = Some(Vin::new(vin)?);
        self.updated_at = now;
        Ok(())
    }
}

impl Entity for Vehicle {
    type Id = VehicleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn validated_name(field: &str, raw: &str) -> DomainResult<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::validation(format!(
            "{field} must not exceed {MAX_NAME_LEN} characters"
        )));
    }
    Ok(value.to_string())
}
