//! Infrastructure adapters.
//!
//! In-memory implementations of the persistence ports (for tests and dev
//! loops) and a static credential authenticator. Database-backed adapters
//! would live alongside these, behind the same traits.

pub mod auth;
pub mod in_memory;

pub use auth::StaticAuthenticator;
pub use in_memory::{
    InMemoryMaintenanceHistoryRepository, InMemoryServiceReminderRepository,
    InMemoryVehicleRepository,
};
