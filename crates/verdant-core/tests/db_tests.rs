use jiff::civil::date;
use tempfile::NamedTempFile;
use verdant_core::{
    Database, MonthlyDistribution, ProgramStatus, SchedulerError, ServiceStatus, TreatmentCategory,
};

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (_temp_file, _db) = create_test_db();

    // Database should be initialized and ready to use
    assert!(_temp_file.path().exists());
}

#[test]
fn test_database_reopen_is_idempotent() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");

    // Schema creation and migrations must tolerate an existing database
    let _first = Database::new(temp_file.path()).expect("first open");
    let _second = Database::new(temp_file.path()).expect("second open");
}

#[test]
fn test_create_client() {
    let (_temp_file, mut db) = create_test_db();

    let client = db
        .create_client(
            "Maple Street HOA",
            Some("12 Maple St"),
            Some("4417"),
            Some(24_500),
            None,
        )
        .expect("Failed to create client");

    assert_eq!(client.name, "Maple Street HOA");
    assert_eq!(client.gate_code.as_deref(), Some("4417"));
    assert!(client.id > 0);
}

#[test]
fn test_get_client() {
    let (_temp_file, mut db) = create_test_db();

    let created = db
        .create_client("Oak Court", None, None, None, Some("Side gate sticks"))
        .expect("Failed to create client");

    let retrieved = db
        .get_client(created.id)
        .expect("Failed to get client")
        .expect("Client should exist");

    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.name, "Oak Court");
    assert_eq!(retrieved.notes.as_deref(), Some("Side gate sticks"));
}

#[test]
fn test_list_clients_ordered_by_name() {
    let (_temp_file, mut db) = create_test_db();

    db.create_client("Willow Park", None, None, None, None)
        .expect("Failed to create client");
    db.create_client("Aspen Row", None, None, None, None)
        .expect("Failed to create client");

    let clients = db.list_clients().expect("Failed to list clients");
    assert_eq!(clients.len(), 2);
    assert_eq!(clients[0].name, "Aspen Row");
    assert_eq!(clients[1].name, "Willow Park");
}

#[test]
fn test_create_template_rejects_sum_mismatch() {
    let (_temp_file, mut db) = create_test_db();

    let result = db.create_template(
        "Broken",
        None,
        24,
        MonthlyDistribution([1; 12]),
        Default::default(),
    );

    assert!(matches!(result, Err(SchedulerError::Validation { .. })));
}

#[test]
fn test_template_distribution_round_trip() {
    let (_temp_file, mut db) = create_test_db();

    let counts = MonthlyDistribution([2, 2, 2, 2, 1, 1, 1, 1, 2, 2, 2, 2]);
    let template = db
        .create_template("Reduced summer", None, 20, counts, Default::default())
        .expect("Failed to create template");

    let fetched = db
        .get_template(template.id)
        .expect("Failed to get template")
        .expect("Template should exist");
    assert_eq!(fetched.services_per_month, counts);
    assert_eq!(fetched.services_per_year, 20);
}

#[test]
fn test_set_monthly_distribution_checks_target() {
    let (_temp_file, mut db) = create_test_db();

    let template = db
        .create_template(
            "Two dozen",
            None,
            24,
            MonthlyDistribution([2; 12]),
            Default::default(),
        )
        .expect("Failed to create template");

    // Sum 23 against target 24
    let result = db.set_monthly_distribution(template.id, &[2, 2, 2, 2, 1, 1, 1, 1, 2, 2, 2, 1]);
    assert!(matches!(result, Err(SchedulerError::Validation { .. })));

    // Valid replacement persists
    let updated = db
        .set_monthly_distribution(template.id, &[3, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2])
        .expect("Failed to set distribution");
    assert_eq!(
        updated.services_per_month,
        MonthlyDistribution([3, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2])
    );
}

#[test]
fn test_assign_program_and_summary_view() {
    let (_temp_file, mut db) = create_test_db();

    let client = db
        .create_client("Maple Street HOA", None, None, None, None)
        .expect("Failed to create client");
    let template = db
        .create_template(
            "Estate turf care",
            None,
            24,
            MonthlyDistribution([2; 12]),
            Default::default(),
        )
        .expect("Failed to create template");

    let program = db
        .assign_program(client.id, template.id, date(2026, 3, 1), None, None)
        .expect("Failed to assign program");
    assert_eq!(program.status, ProgramStatus::Active);

    db.add_service(program.id, 3, 2026)
        .expect("Failed to add service");
    let service = db
        .add_service(program.id, 4, 2026)
        .expect("Failed to add service");
    db.complete_service(service.id, None)
        .expect("Failed to complete service");

    let summaries = db
        .list_program_summaries(&Default::default())
        .expect("Failed to list summaries");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].name, "Estate turf care");
    assert_eq!(summaries[0].total_services, 2);
    assert_eq!(summaries[0].completed_services, 1);
    assert_eq!(summaries[0].pending_services, 1);
}

#[test]
fn test_custom_name_wins_in_summary() {
    let (_temp_file, mut db) = create_test_db();

    let client = db
        .create_client("Oak Court", None, None, None, None)
        .expect("Failed to create client");
    let template = db
        .create_template(
            "Estate turf care",
            None,
            24,
            MonthlyDistribution([2; 12]),
            Default::default(),
        )
        .expect("Failed to create template");

    db.assign_program(
        client.id,
        template.id,
        date(2026, 3, 1),
        None,
        Some("Back nine"),
    )
    .expect("Failed to assign program");

    let summaries = db
        .list_program_summaries(&Default::default())
        .expect("Failed to list summaries");
    assert_eq!(summaries[0].name, "Back nine");
}

#[test]
fn test_service_status_updates() {
    let (_temp_file, mut db) = create_test_db();

    let client = db
        .create_client("Oak Court", None, None, None, None)
        .expect("Failed to create client");
    let template = db
        .create_template(
            "Monthly",
            None,
            12,
            MonthlyDistribution([1; 12]),
            Default::default(),
        )
        .expect("Failed to create template");
    let program = db
        .assign_program(client.id, template.id, date(2026, 1, 15), None, None)
        .expect("Failed to assign program");

    let service = db
        .add_service(program.id, 6, 2026)
        .expect("Failed to add service");
    assert_eq!(service.status, ServiceStatus::Pending);

    let scheduled = db
        .schedule_service(service.id, date(2026, 6, 10))
        .expect("Failed to schedule service");
    assert_eq!(scheduled.status, ServiceStatus::Scheduled);
    assert_eq!(scheduled.scheduled_date, Some(date(2026, 6, 10)));

    let skipped = db
        .skip_service(service.id)
        .expect("Failed to skip service");
    assert_eq!(skipped.status, ServiceStatus::Skipped);
}

#[test]
fn test_complete_service_with_unknown_job() {
    let (_temp_file, mut db) = create_test_db();

    let client = db
        .create_client("Oak Court", None, None, None, None)
        .expect("Failed to create client");
    let template = db
        .create_template(
            "Monthly",
            None,
            12,
            MonthlyDistribution([1; 12]),
            Default::default(),
        )
        .expect("Failed to create template");
    let program = db
        .assign_program(client.id, template.id, date(2026, 1, 15), None, None)
        .expect("Failed to assign program");
    let service = db
        .add_service(program.id, 6, 2026)
        .expect("Failed to add service");

    let result = db.complete_service(service.id, Some(404));
    assert!(matches!(result, Err(SchedulerError::JobNotFound { id: 404 })));
}

#[test]
fn test_complete_treatment_records_staff_and_time() {
    let (_temp_file, mut db) = create_test_db();

    let client = db
        .create_client("Oak Court", None, None, None, None)
        .expect("Failed to create client");
    let template = db
        .create_template(
            "Monthly",
            None,
            12,
            MonthlyDistribution([1; 12]),
            Default::default(),
        )
        .expect("Failed to create template");
    let program = db
        .assign_program(client.id, template.id, date(2026, 1, 15), None, None)
        .expect("Failed to assign program");
    let treatment_type = db
        .create_treatment_type("Grub control", TreatmentCategory::Pest, None)
        .expect("Failed to create treatment type");

    let instance = db
        .add_program_treatment(program.id, treatment_type.id, 7, 2026, Some(date(2026, 7, 20)))
        .expect("Failed to add treatment instance");
    assert_eq!(instance.status, ServiceStatus::Pending);
    assert!(instance.completed_at.is_none());

    let completed = db
        .complete_treatment(instance.id, "R. Alvarez", None)
        .expect("Failed to complete treatment");
    assert_eq!(completed.status, ServiceStatus::Completed);
    assert_eq!(completed.completed_by.as_deref(), Some("R. Alvarez"));
    assert!(completed.completed_at.is_some());
}

#[test]
fn test_schedule_entry_ordering() {
    let (_temp_file, mut db) = create_test_db();

    let program = db
        .create_treatment_program("Standard schedule", None)
        .expect("Failed to create treatment program");
    let treatment_type = db
        .create_treatment_type("Fertilizer blend", TreatmentCategory::Fertilizer, None)
        .expect("Failed to create treatment type");

    // Inserted out of order on purpose
    db.add_schedule_entry(program.id, treatment_type.id, None, true, Some(2), None)
        .expect("flexible visit 2");
    db.add_schedule_entry(program.id, treatment_type.id, Some(9), false, None, None)
        .expect("anchored no visit");
    db.add_schedule_entry(program.id, treatment_type.id, Some(3), false, Some(1), None)
        .expect("anchored visit 1");

    let entries = db
        .get_schedule_entries(program.id)
        .expect("Failed to fetch entries");
    assert_eq!(entries.len(), 3);
    // Visit-numbered entries first in visit order, unnumbered last
    assert_eq!(entries[0].visit_number, Some(1));
    assert_eq!(entries[1].visit_number, Some(2));
    assert_eq!(entries[2].visit_number, None);
}

#[test]
fn test_job_lifecycle() {
    let (_temp_file, mut db) = create_test_db();

    let client = db
        .create_client("Oak Court", None, None, None, None)
        .expect("Failed to create client");

    let job = db
        .create_job(client.id, "Spring cleanup", Some(date(2026, 4, 2)), Some("North crew"))
        .expect("Failed to create job");
    assert_eq!(job.crew.as_deref(), Some("North crew"));

    let completed = db.complete_job(job.id).expect("Failed to complete job");
    assert_eq!(completed.status.as_str(), "completed");

    let missing = db.create_job(9999, "Ghost", None, None);
    assert!(matches!(
        missing,
        Err(SchedulerError::ClientNotFound { id: 9999 })
    ));
}
