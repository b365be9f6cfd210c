//! Maintenance-history domain module.
//!
//! Service records performed on a vehicle, with the `ServiceType` and
//! `Money` value objects. Pure domain logic; persistence and transport live
//! elsewhere.

pub mod money;
pub mod record;
pub mod service_type;

pub use money::{Currency, Money};
pub use record::{
    MaintenanceHistory, MaintenanceHistoryRecord, MaintenanceRecordId, NewMaintenanceRecord,
    UpdateMaintenanceInfo,
};
pub use service_type::ServiceType;
