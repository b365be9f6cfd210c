//! Vehicles domain module.
//!
//! This crate contains the `Vehicle` entity and its value objects
//! (`LicensePlate`, `Vin`, `Mileage`), implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod mileage;
pub mod plate;
pub mod vehicle;
pub mod vin;

pub use mileage::Mileage;
pub use plate::LicensePlate;
pub use vehicle::{NewVehicle, Vehicle, VehicleId, VehicleRecord};
pub use vin::Vin;
