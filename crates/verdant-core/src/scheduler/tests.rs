//! Tests for the scheduler module.

use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::{
    error::SchedulerError,
    models::{ProgramStatus, ServiceStatus, StaffRole},
    params::{
        AddScheduleEntry, AddService, AssignProgram, CompleteService, CreateClient, CreateJob,
        CreateTemplate, CreateTreatmentProgram, CreateTreatmentType, DeleteTemplate, Id,
        LinkTreatment, ListPrograms, SetMonthlyDistribution, ShowClient,
    },
};

/// Helper function to create a test scheduler
async fn create_test_scheduler() -> (TempDir, Scheduler) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let scheduler = SchedulerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create scheduler");
    (temp_dir, scheduler)
}

async fn create_client_and_template(scheduler: &Scheduler) -> (u64, u64) {
    let client = scheduler
        .create_client(&CreateClient {
            name: "Maple Street HOA".to_string(),
            ..Default::default()
        })
        .await
        .expect("Failed to create client");

    let template = scheduler
        .create_template(&CreateTemplate {
            name: "Estate turf care".to_string(),
            description: None,
            services_per_year: 24,
            services_per_month: None,
            default_cadence: Default::default(),
        })
        .await
        .expect("Failed to create template");

    (client.id, template.id)
}

#[tokio::test]
async fn test_assign_program_starts_active_and_empty() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let (client_id, template_id) = create_client_and_template(&scheduler).await;

    let program = scheduler
        .assign_program(&AssignProgram {
            client_id,
            template_id,
            start_date: date(2026, 3, 1),
            cadence: None,
            custom_name: Some("Front and back lawn".to_string()),
        })
        .await
        .expect("Failed to assign program");

    assert_eq!(program.status, ProgramStatus::Active);
    assert!(program.services.is_empty());
    assert!(program.treatments.is_empty());

    // An empty instance set is valid right after assignment
    let fetched = scheduler
        .get_program(&Id { id: program.id })
        .await
        .expect("Failed to get program")
        .expect("Program should exist");
    assert!(fetched.services.is_empty());
}

#[tokio::test]
async fn test_assign_program_missing_client() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let (_client_id, template_id) = create_client_and_template(&scheduler).await;

    let result = scheduler
        .assign_program(&AssignProgram {
            client_id: 9999,
            template_id,
            start_date: date(2026, 3, 1),
            cadence: None,
            custom_name: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(SchedulerError::ClientNotFound { id: 9999 })
    ));
}

#[tokio::test]
async fn test_assign_program_missing_template() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let (client_id, _template_id) = create_client_and_template(&scheduler).await;

    let result = scheduler
        .assign_program(&AssignProgram {
            client_id,
            template_id: 9999,
            start_date: date(2026, 3, 1),
            cadence: None,
            custom_name: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(SchedulerError::TemplateNotFound { id: 9999 })
    ));
}

#[tokio::test]
async fn test_create_template_seeds_distribution() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;

    let template = scheduler
        .create_template(&CreateTemplate {
            name: "Weekly visits".to_string(),
            description: None,
            services_per_year: 52,
            services_per_month: None,
            default_cadence: Default::default(),
        })
        .await
        .expect("Failed to create template");

    // Seeded from the allocator: counts sum to the annual target
    assert_eq!(template.services_per_month.total(), 52);
}

#[tokio::test]
async fn test_set_monthly_distribution_sum_mismatch() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let (_client_id, template_id) = create_client_and_template(&scheduler).await;

    // 23 against a services_per_year of 24 must fail
    let result = scheduler
        .set_monthly_distribution(&SetMonthlyDistribution {
            template_id,
            monthly_counts: vec![2, 2, 2, 2, 1, 1, 1, 1, 2, 2, 2, 1],
        })
        .await;

    assert!(matches!(result, Err(SchedulerError::Validation { .. })));
}

#[tokio::test]
async fn test_set_monthly_distribution_success() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let (_client_id, template_id) = create_client_and_template(&scheduler).await;

    let counts = vec![2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2];
    let template = scheduler
        .set_monthly_distribution(&SetMonthlyDistribution {
            template_id,
            monthly_counts: counts,
        })
        .await
        .expect("Failed to set distribution");

    assert_eq!(template.services_per_month.counts(), &[2; 12]);
}

#[tokio::test]
async fn test_set_monthly_distribution_wrong_length() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let (_client_id, template_id) = create_client_and_template(&scheduler).await;

    let result = scheduler
        .set_monthly_distribution(&SetMonthlyDistribution {
            template_id,
            monthly_counts: vec![24],
        })
        .await;

    assert!(matches!(result, Err(SchedulerError::Validation { .. })));
}

#[tokio::test]
async fn test_set_monthly_distribution_missing_template() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;

    let result = scheduler
        .set_monthly_distribution(&SetMonthlyDistribution {
            template_id: 42,
            monthly_counts: vec![2; 12],
        })
        .await;

    assert!(matches!(
        result,
        Err(SchedulerError::TemplateNotFound { id: 42 })
    ));
}

#[tokio::test]
async fn test_link_treatment_month_out_of_range() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let (_client_id, template_id) = create_client_and_template(&scheduler).await;

    let treatment_type = scheduler
        .create_treatment_type(&CreateTreatmentType {
            name: "Pre-emergent".to_string(),
            category: Default::default(),
            notes: None,
        })
        .await
        .expect("Failed to create treatment type");

    for month in [0, 13, -1] {
        let result = scheduler
            .link_treatment_to_template(&LinkTreatment {
                template_id,
                treatment_type_id: treatment_type.id,
                month,
                quantity: None,
                instructions: None,
            })
            .await;
        assert!(
            matches!(result, Err(SchedulerError::Validation { .. })),
            "month {month} should be rejected"
        );
    }
}

#[tokio::test]
async fn test_link_treatment_many_per_month() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let (_client_id, template_id) = create_client_and_template(&scheduler).await;

    let first = scheduler
        .create_treatment_type(&CreateTreatmentType {
            name: "Pre-emergent".to_string(),
            category: Default::default(),
            notes: None,
        })
        .await
        .expect("Failed to create treatment type");
    let second = scheduler
        .create_treatment_type(&CreateTreatmentType {
            name: "Spot spray".to_string(),
            category: Default::default(),
            notes: None,
        })
        .await
        .expect("Failed to create treatment type");

    // Two treatments targeting the same month are allowed
    for treatment_type_id in [first.id, second.id] {
        scheduler
            .link_treatment_to_template(&LinkTreatment {
                template_id,
                treatment_type_id,
                month: 4,
                quantity: Some(1),
                instructions: None,
            })
            .await
            .expect("Failed to link treatment");
    }

    let template = scheduler
        .get_template(&Id { id: template_id })
        .await
        .expect("Failed to get template")
        .expect("Template should exist");
    assert_eq!(template.treatments.len(), 2);
    assert!(template.treatments.iter().all(|t| t.month == 4));
}

#[tokio::test]
async fn test_link_treatment_missing_treatment_type() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let (_client_id, template_id) = create_client_and_template(&scheduler).await;

    let result = scheduler
        .link_treatment_to_template(&LinkTreatment {
            template_id,
            treatment_type_id: 777,
            month: 6,
            quantity: None,
            instructions: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(SchedulerError::TreatmentTypeNotFound { id: 777 })
    ));
}

#[tokio::test]
async fn test_schedule_entry_requires_anchor_or_flexible() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;

    let program = scheduler
        .create_treatment_program(&CreateTreatmentProgram {
            name: "Standard lawn schedule".to_string(),
            description: None,
        })
        .await
        .expect("Failed to create treatment program");
    let treatment_type = scheduler
        .create_treatment_type(&CreateTreatmentType {
            name: "Grub control".to_string(),
            category: Default::default(),
            notes: None,
        })
        .await
        .expect("Failed to create treatment type");

    // Neither month nor flexible: rejected
    let result = scheduler
        .add_schedule_entry(&AddScheduleEntry {
            treatment_program_id: program.id,
            treatment_type_id: treatment_type.id,
            month: None,
            is_flexible: false,
            visit_number: None,
            instructions: None,
        })
        .await;
    assert!(matches!(result, Err(SchedulerError::Validation { .. })));

    // Both month and flexible: also rejected
    let result = scheduler
        .add_schedule_entry(&AddScheduleEntry {
            treatment_program_id: program.id,
            treatment_type_id: treatment_type.id,
            month: Some(5),
            is_flexible: true,
            visit_number: None,
            instructions: None,
        })
        .await;
    assert!(matches!(result, Err(SchedulerError::Validation { .. })));

    // Month-anchored and flexible entries both persist
    let anchored = scheduler
        .add_schedule_entry(&AddScheduleEntry {
            treatment_program_id: program.id,
            treatment_type_id: treatment_type.id,
            month: Some(5),
            is_flexible: false,
            visit_number: Some(1),
            instructions: None,
        })
        .await
        .expect("Failed to add anchored entry");
    assert_eq!(anchored.month, Some(5));

    let flexible = scheduler
        .add_schedule_entry(&AddScheduleEntry {
            treatment_program_id: program.id,
            treatment_type_id: treatment_type.id,
            month: None,
            is_flexible: true,
            visit_number: Some(2),
            instructions: Some("Any visit".to_string()),
        })
        .await
        .expect("Failed to add flexible entry");
    assert!(flexible.is_flexible);
    assert_eq!(flexible.month, None);
}

#[tokio::test]
async fn test_program_status_transitions() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let (client_id, template_id) = create_client_and_template(&scheduler).await;

    let program = scheduler
        .assign_program(&AssignProgram {
            client_id,
            template_id,
            start_date: date(2026, 3, 1),
            cadence: None,
            custom_name: None,
        })
        .await
        .expect("Failed to assign program");
    let id = Id { id: program.id };

    let paused = scheduler.pause_program(&id).await.expect("pause");
    assert_eq!(paused.status, ProgramStatus::Paused);

    let resumed = scheduler.resume_program(&id).await.expect("resume");
    assert_eq!(resumed.status, ProgramStatus::Active);

    let cancelled = scheduler.cancel_program(&id).await.expect("cancel");
    assert_eq!(cancelled.status, ProgramStatus::Cancelled);

    // Cancelled is terminal
    let result = scheduler.resume_program(&id).await;
    assert!(matches!(result, Err(SchedulerError::Validation { .. })));
}

#[tokio::test]
async fn test_service_lifecycle_with_job_link() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let (client_id, template_id) = create_client_and_template(&scheduler).await;

    let program = scheduler
        .assign_program(&AssignProgram {
            client_id,
            template_id,
            start_date: date(2026, 3, 1),
            cadence: None,
            custom_name: None,
        })
        .await
        .expect("Failed to assign program");

    let service = scheduler
        .add_service(&AddService {
            program_id: program.id,
            target_month: 4,
            target_year: 2026,
        })
        .await
        .expect("Failed to add service");
    assert_eq!(service.status, ServiceStatus::Pending);

    let job = scheduler
        .create_job(&CreateJob {
            client_id,
            title: "April visit".to_string(),
            scheduled_for: Some(date(2026, 4, 14)),
            crew: Some("North crew".to_string()),
        })
        .await
        .expect("Failed to create job");

    let completed = scheduler
        .complete_service(&CompleteService {
            id: service.id,
            job_id: Some(job.id),
        })
        .await
        .expect("Failed to complete service");
    assert_eq!(completed.status, ServiceStatus::Completed);
    assert_eq!(completed.job_id, Some(job.id));
}

#[tokio::test]
async fn test_add_service_month_out_of_range() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let (client_id, template_id) = create_client_and_template(&scheduler).await;

    let program = scheduler
        .assign_program(&AssignProgram {
            client_id,
            template_id,
            start_date: date(2026, 3, 1),
            cadence: None,
            custom_name: None,
        })
        .await
        .expect("Failed to assign program");

    let result = scheduler
        .add_service(&AddService {
            program_id: program.id,
            target_month: 13,
            target_year: 2026,
        })
        .await;
    assert!(matches!(result, Err(SchedulerError::Validation { .. })));
}

#[tokio::test]
async fn test_list_programs_summary_counts() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let (client_id, template_id) = create_client_and_template(&scheduler).await;

    let program = scheduler
        .assign_program(&AssignProgram {
            client_id,
            template_id,
            start_date: date(2026, 3, 1),
            cadence: None,
            custom_name: None,
        })
        .await
        .expect("Failed to assign program");

    for month in [3, 4] {
        scheduler
            .add_service(&AddService {
                program_id: program.id,
                target_month: month,
                target_year: 2026,
            })
            .await
            .expect("Failed to add service");
    }

    let summaries = scheduler
        .list_programs_summary(&ListPrograms::default())
        .await
        .expect("Failed to list programs");

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].name, "Estate turf care");
    assert_eq!(summaries[0].client_name, "Maple Street HOA");
    assert_eq!(summaries[0].total_services, 2);
    assert_eq!(summaries[0].completed_services, 0);
    assert_eq!(summaries[0].pending_services, 2);
}

#[tokio::test]
async fn test_list_programs_excludes_cancelled_by_default() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let (client_id, template_id) = create_client_and_template(&scheduler).await;

    let program = scheduler
        .assign_program(&AssignProgram {
            client_id,
            template_id,
            start_date: date(2026, 3, 1),
            cadence: None,
            custom_name: None,
        })
        .await
        .expect("Failed to assign program");
    scheduler
        .cancel_program(&Id { id: program.id })
        .await
        .expect("cancel");

    let active_only = scheduler
        .list_programs_summary(&ListPrograms::default())
        .await
        .expect("Failed to list programs");
    assert!(active_only.is_empty());

    let all = scheduler
        .list_programs_summary(&ListPrograms {
            all: true,
            ..Default::default()
        })
        .await
        .expect("Failed to list all programs");
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_show_client_redaction_and_gate_code() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;

    let client = scheduler
        .create_client(&CreateClient {
            name: "Oak Court".to_string(),
            address: None,
            gate_code: Some("8810".to_string()),
            monthly_rate_cents: Some(18_000),
            notes: None,
        })
        .await
        .expect("Failed to create client");

    let redacted = scheduler
        .show_client_for_role(&ShowClient {
            id: client.id,
            role: StaffRole::CrewMember,
        })
        .await
        .expect("Failed to show client")
        .expect("Client should exist");
    assert!(redacted.gate_code.is_none());
    assert!(redacted.monthly_rate_cents.is_none());

    let visible = scheduler
        .show_client_for_role(&ShowClient {
            id: client.id,
            role: StaffRole::TeamLeader,
        })
        .await
        .expect("Failed to show client")
        .expect("Client should exist");
    assert_eq!(visible.gate_code.as_deref(), Some("8810"));

    // Hard-gated path errors instead of redacting
    let denied = scheduler
        .client_gate_code(&ShowClient {
            id: client.id,
            role: StaffRole::Staff,
        })
        .await;
    assert!(matches!(denied, Err(SchedulerError::Permission { .. })));

    let granted = scheduler
        .client_gate_code(&ShowClient {
            id: client.id,
            role: StaffRole::Owner,
        })
        .await
        .expect("Owner should see gate code");
    assert_eq!(granted.as_deref(), Some("8810"));
}

#[tokio::test]
async fn test_delete_template_requires_confirmation() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let (_client_id, template_id) = create_client_and_template(&scheduler).await;

    let result = scheduler
        .delete_template(&DeleteTemplate {
            id: template_id,
            confirmed: false,
        })
        .await;
    assert!(matches!(result, Err(SchedulerError::Validation { .. })));

    let deleted = scheduler
        .delete_template(&DeleteTemplate {
            id: template_id,
            confirmed: true,
        })
        .await
        .expect("Failed to delete template")
        .expect("Template should have existed");
    assert_eq!(deleted.id, template_id);

    let gone = scheduler
        .get_template(&Id { id: template_id })
        .await
        .expect("Failed to query template");
    assert!(gone.is_none());
}

#[tokio::test]
async fn test_delete_template_refused_while_assigned() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let (client_id, template_id) = create_client_and_template(&scheduler).await;

    scheduler
        .assign_program(&AssignProgram {
            client_id,
            template_id,
            start_date: date(2026, 3, 1),
            cadence: None,
            custom_name: None,
        })
        .await
        .expect("Failed to assign program");

    let result = scheduler
        .delete_template(&DeleteTemplate {
            id: template_id,
            confirmed: true,
        })
        .await;
    assert!(matches!(result, Err(SchedulerError::Validation { .. })));
}
