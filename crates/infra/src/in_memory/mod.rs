//! In-memory repository adapters.
//!
//! Rows are held as persisted-primitive records behind an `RwLock`, the same
//! shape a database row would have; entities are rebuilt on every read so the
//! adapters exercise the same reconstruction path as a real store. Intended
//! for tests/dev, not optimized for performance.

mod maintenance;
mod reminders;
mod vehicles;

pub use maintenance::InMemoryMaintenanceHistoryRepository;
pub use reminders::InMemoryServiceReminderRepository;
pub use vehicles::InMemoryVehicleRepository;

use fleetcare_core::DomainError;

fn poisoned() -> DomainError {
    DomainError::conflict("repository lock poisoned")
}
