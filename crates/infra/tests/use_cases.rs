//! End-to-end use-case flows over the in-memory adapters.

use std::sync::Arc;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use fleetcare_app::{
    CreateMaintenanceInput, CreateReminderInput, CreateVehicleInput, HistoryQuery,
    MaintenanceService, ReminderService, UpdateVehicleInput, VehicleService,
};
use fleetcare_auth::{Principal, Role};
use fleetcare_core::{DomainError, UserId};
use fleetcare_infra::{
    InMemoryMaintenanceHistoryRepository, InMemoryServiceReminderRepository,
    InMemoryVehicleRepository,
};
use fleetcare_reminders::ReminderStatus;

struct Fixture {
    vehicles: VehicleService,
    maintenance: MaintenanceService,
    reminders: ReminderService,
}

fn fixture() -> Fixture {
    fleetcare_observability::init();

    let vehicle_repo = Arc::new(InMemoryVehicleRepository::new());
    let history_repo = Arc::new(InMemoryMaintenanceHistoryRepository::new());
    let reminder_repo = Arc::new(InMemoryServiceReminderRepository::new());

    Fixture {
        vehicles: VehicleService::new(
            vehicle_repo.clone(),
            history_repo.clone(),
            reminder_repo.clone(),
        ),
        maintenance: MaintenanceService::new(vehicle_repo.clone(), history_repo),
        reminders: ReminderService::new(vehicle_repo, reminder_repo),
    }
}

fn owner() -> Principal {
    Principal::new(UserId::new(), Role::VehicleOwner)
}

fn vehicle_input(plate: &str) -> CreateVehicleInput {
    CreateVehicleInput {
        brand: "Toyota".to_string(),
        model: "Corolla".to_string(),
        year: 2022,
        license_plate: plate.to_string(),
        current_mileage: 45_000,
        vin: None,
        photo_url: None,
    }
}

fn oil_change(mileage_at_service: u32) -> CreateMaintenanceInput {
    CreateMaintenanceInput {
        service_type: "OIL_CHANGE".to_string(),
        description: Some("full synthetic".to_string()),
        service_date: Utc::now() - Duration::days(1),
        mileage_at_service,
        cost: Some(Decimal::new(80050, 2)),
        currency: Some("MXN".to_string()),
        workshop_name: Some("Taller Juarez".to_string()),
        invoice_url: None,
        notes: None,
    }
}

#[test]
fn registering_a_duplicate_plate_or_vin_conflicts() {
    let fx = fixture();
    let alice = owner();
    let bob = owner();

    let mut with_vin = vehicle_input("ABC-123-XYZ");
    with_vin.vin = Some("1HGCM82633A004352".to_string());
    fx.vehicles.create_vehicle(&alice, with_vin).unwrap();

    // Same plate, even from another owner.
    let err = fx
        .vehicles
        .create_vehicle(&bob, vehicle_input("abc-123-xyz"))
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));

    let mut dup_vin = vehicle_input("DEF-456-GHI");
    dup_vin.vin = Some("1hgcm82633a004352".to_string());
    let err = fx.vehicles.create_vehicle(&bob, dup_vin).unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
}

#[test]
fn only_the_owner_may_mutate_but_admins_may_read() {
    let fx = fixture();
    let alice = owner();
    let vehicle = fx
        .vehicles
        .create_vehicle(&alice, vehicle_input("ABC-123-XYZ"))
        .unwrap();
    let id = vehicle.id_typed();

    let stranger = owner();
    let err = fx.vehicles.get_vehicle(&stranger, id).unwrap_err();
    assert!(matches!(err, DomainError::NotOwned(_)));

    let admin = Principal::new(UserId::new(), Role::WorkshopAdmin);
    assert!(fx.vehicles.get_vehicle(&admin, id).is_ok());
    assert!(fx.maintenance.get_history(&admin, id, &HistoryQuery::default()).is_ok());

    // Admin reads do not grant writes.
    let update = UpdateVehicleInput {
        current_mileage: Some(46_000),
        ..Default::default()
    };
    let err = fx.vehicles.update_vehicle(&admin, id, update).unwrap_err();
    assert!(matches!(err, DomainError::NotOwned(_)));
}

#[test]
fn updating_a_vehicle_enforces_mileage_monotonicity_and_vin_uniqueness() {
    let fx = fixture();
    let alice = owner();
    let first = fx
        .vehicles
        .create_vehicle(&alice, vehicle_input("ABC-123-XYZ"))
        .unwrap();

    let mut other_input = vehicle_input("DEF-456-GHI");
    other_input.vin = Some("JM1BL1SF8A1267252".to_string());
    fx.vehicles.create_vehicle(&alice, other_input).unwrap();

    let err = fx
        .vehicles
        .update_vehicle(
            &alice,
            first.id_typed(),
            UpdateVehicleInput {
                current_mileage: Some(44_000),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, DomainError::InvariantViolation(_)));

    let err = fx
        .vehicles
        .update_vehicle(
            &alice,
            first.id_typed(),
            UpdateVehicleInput {
                vin: Some("JM1BL1SF8A1267252".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));

    let updated = fx
        .vehicles
        .update_vehicle(
            &alice,
            first.id_typed(),
            UpdateVehicleInput {
                current_mileage: Some(47_500),
                vin: Some("1HGCM82633A004352".to_string()),
                photo_url: Some("https://img.example/corolla.jpg".to_string()),
            },
        )
        .unwrap();
    assert_eq!(updated.mileage().value(), 47_500);
    assert_eq!(updated.vin().unwrap().as_str(), "1HGCM82633A004352");
    assert_eq!(updated.photo_url(), Some("https://img.example/corolla.jpg"));
}

#[test]
fn maintenance_cannot_be_recorded_beyond_the_current_odometer() {
    let fx = fixture();
    let alice = owner();
    let vehicle = fx
        .vehicles
        .create_vehicle(&alice, vehicle_input("ABC-123-XYZ"))
        .unwrap();

    let err = fx
        .maintenance
        .create_record(&alice, vehicle.id_typed(), oil_change(47_000))
        .unwrap_err();
    assert!(matches!(err, DomainError::InvariantViolation(_)));

    let record = fx
        .maintenance
        .create_record(&alice, vehicle.id_typed(), oil_change(44_000))
        .unwrap();
    assert_eq!(record.created_by(), alice.user_id);
    assert_eq!(record.created_by_role(), Role::VehicleOwner);

    let history = fx
        .maintenance
        .get_history(&alice, vehicle.id_typed(), &HistoryQuery::default())
        .unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id_typed(), record.id_typed());
}

#[test]
fn history_filters_by_service_type_and_date_window() {
    let fx = fixture();
    let alice = owner();
    let vehicle = fx
        .vehicles
        .create_vehicle(&alice, vehicle_input("ABC-123-XYZ"))
        .unwrap();
    let id = vehicle.id_typed();

    fx.maintenance.create_record(&alice, id, oil_change(40_000)).unwrap();

    let mut tires = oil_change(42_000);
    tires.service_type = "TIRE_ROTATION".to_string();
    tires.service_date = Utc::now() - Duration::days(30);
    fx.maintenance.create_record(&alice, id, tires).unwrap();

    let query = HistoryQuery {
        service_type: Some("TIRE_ROTATION".parse().unwrap()),
        ..Default::default()
    };
    let filtered = fx.maintenance.get_history(&alice, id, &query).unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].service_type().as_str(), "TIRE_ROTATION");

    let recent = HistoryQuery {
        from: Some(Utc::now() - Duration::days(7)),
        ..Default::default()
    };
    let filtered = fx.maintenance.get_history(&alice, id, &recent).unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].service_type().as_str(), "OIL_CHANGE");
}

#[test]
fn updating_a_record_requires_the_matching_vehicle() {
    let fx = fixture();
    let alice = owner();
    let first = fx
        .vehicles
        .create_vehicle(&alice, vehicle_input("ABC-123-XYZ"))
        .unwrap();
    let second = fx
        .vehicles
        .create_vehicle(&alice, vehicle_input("DEF-456-GHI"))
        .unwrap();

    let record = fx
        .maintenance
        .create_record(&alice, first.id_typed(), oil_change(44_000))
        .unwrap();

    let err = fx
        .maintenance
        .delete_record(&alice, second.id_typed(), record.id_typed())
        .unwrap_err();
    assert!(matches!(err, DomainError::NotOwned(_)));

    fx.maintenance
        .delete_record(&alice, first.id_typed(), record.id_typed())
        .unwrap();
    let history = fx
        .maintenance
        .get_history(&alice, first.id_typed(), &HistoryQuery::default())
        .unwrap();
    assert!(history.is_empty());
}

#[test]
fn reminder_lifecycle_tracks_the_odometer() {
    let fx = fixture();
    let alice = owner();
    let vehicle = fx
        .vehicles
        .create_vehicle(&alice, vehicle_input("ABC-123-XYZ"))
        .unwrap();
    let id = vehicle.id_typed();

    // Vehicle sits at 45,000 km; due at 50,000.
    let reminder = fx
        .reminders
        .create_reminder(
            &alice,
            id,
            CreateReminderInput {
                service_type: "OIL_CHANGE".to_string(),
                due_type: "MILEAGE".to_string(),
                due_value: "50000".to_string(),
                description: None,
            },
        )
        .unwrap();
    assert_eq!(reminder.status(), ReminderStatus::Pending);

    fx.vehicles
        .update_vehicle(
            &alice,
            id,
            UpdateVehicleInput {
                current_mileage: Some(50_000),
                ..Default::default()
            },
        )
        .unwrap();

    // Listing re-evaluates against the new odometer.
    let listed = fx.reminders.list_reminders(&alice, id, None).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status(), ReminderStatus::Overdue);

    let completed = fx
        .reminders
        .complete_reminder(&alice, reminder.id_typed())
        .unwrap();
    assert_eq!(completed.status(), ReminderStatus::Completed);

    let err = fx
        .reminders
        .complete_reminder(&alice, reminder.id_typed())
        .unwrap_err();
    assert!(matches!(err, DomainError::InvariantViolation(_)));
}

#[test]
fn a_reminder_whose_condition_is_already_met_starts_overdue() {
    let fx = fixture();
    let alice = owner();
    let vehicle = fx
        .vehicles
        .create_vehicle(&alice, vehicle_input("ABC-123-XYZ"))
        .unwrap();

    let reminder = fx
        .reminders
        .create_reminder(
            &alice,
            vehicle.id_typed(),
            CreateReminderInput {
                service_type: "BRAKE_INSPECTION".to_string(),
                due_type: "MILEAGE".to_string(),
                due_value: "40000".to_string(),
                description: Some("rear pads".to_string()),
            },
        )
        .unwrap();
    assert_eq!(reminder.status(), ReminderStatus::Overdue);

    // The stored status is queryable.
    let overdue = fx
        .reminders
        .list_reminders(&alice, vehicle.id_typed(), Some(ReminderStatus::Overdue))
        .unwrap();
    assert_eq!(overdue.len(), 1);
    let pending = fx
        .reminders
        .list_reminders(&alice, vehicle.id_typed(), Some(ReminderStatus::Pending))
        .unwrap();
    assert!(pending.is_empty());
}

#[test]
fn postponing_an_overdue_reminder_suppresses_it_until_the_date_lapses() {
    let fx = fixture();
    let alice = owner();
    let vehicle = fx
        .vehicles
        .create_vehicle(&alice, vehicle_input("ABC-123-XYZ"))
        .unwrap();

    let reminder = fx
        .reminders
        .create_reminder(
            &alice,
            vehicle.id_typed(),
            CreateReminderInput {
                service_type: "OIL_CHANGE".to_string(),
                due_type: "MILEAGE".to_string(),
                due_value: "40000".to_string(),
                description: None,
            },
        )
        .unwrap();
    assert_eq!(reminder.status(), ReminderStatus::Overdue);

    let until = Utc::now() + Duration::days(14);
    let postponed = fx
        .reminders
        .postpone_reminder(&alice, reminder.id_typed(), until)
        .unwrap();
    assert_eq!(postponed.status(), ReminderStatus::Pending);
    assert_eq!(postponed.postponed_until(), Some(until));

    // Still suppressed on listing even though the condition holds.
    let listed = fx
        .reminders
        .list_reminders(&alice, vehicle.id_typed(), None)
        .unwrap();
    assert_eq!(listed[0].status(), ReminderStatus::Pending);

    let err = fx
        .reminders
        .postpone_reminder(&alice, reminder.id_typed(), Utc::now() - Duration::days(1))
        .unwrap_err();
    assert!(matches!(err, DomainError::InvariantViolation(_)));
}

#[test]
fn deleting_a_vehicle_cascades_to_history_and_reminders() {
    let fx = fixture();
    let alice = owner();
    let vehicle = fx
        .vehicles
        .create_vehicle(&alice, vehicle_input("ABC-123-XYZ"))
        .unwrap();
    let id = vehicle.id_typed();

    fx.maintenance.create_record(&alice, id, oil_change(44_000)).unwrap();
    let reminder = fx
        .reminders
        .create_reminder(
            &alice,
            id,
            CreateReminderInput {
                service_type: "INSPECTION".to_string(),
                due_type: "DATE".to_string(),
                due_value: (Utc::now() + Duration::days(90)).to_rfc3339(),
                description: None,
            },
        )
        .unwrap();

    fx.vehicles.delete_vehicle(&alice, id).unwrap();

    let err = fx.vehicles.get_vehicle(&alice, id).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
    let err = fx
        .reminders
        .complete_reminder(&alice, reminder.id_typed())
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}
