//! Service-reminder domain module.
//!
//! A reminder ties a vehicle to a due condition (mileage threshold or
//! calendar date) and walks an explicit status state machine:
//! `PENDING -> OVERDUE -> COMPLETED / DISMISSED`, with postponement resetting
//! an overdue reminder back to pending.

pub mod due_condition;
pub mod reminder;

pub use due_condition::DueCondition;
pub use reminder::{
    NewReminder, ReminderId, ReminderStatus, ServiceReminder, ServiceReminderRecord,
};
