//! Use-case orchestrators.
//!
//! Each service sequences repository lookups, ownership/role authorization
//! and entity operations. Repositories are injected as explicit port
//! dependencies, constructed once at process start; nothing in this crate
//! reaches for ambient/global state.

pub mod access;
pub mod maintenance;
pub mod ports;
pub mod reminders;
pub mod vehicles;

pub use maintenance::{CreateMaintenanceInput, MaintenanceService};
pub use ports::{
    HistoryQuery, MaintenanceHistoryRepository, ServiceReminderRepository, VehicleRepository,
};
pub use reminders::{CreateReminderInput, ReminderService};
pub use vehicles::{CreateVehicleInput, UpdateVehicleInput, VehicleService};
