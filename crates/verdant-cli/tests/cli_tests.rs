use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn verdant_cmd() -> Command {
    let mut cmd = Command::cargo_bin("verdant").expect("Failed to find verdant binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_create_client_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    verdant_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "client",
            "create",
            "Maple Street HOA",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maple Street HOA"))
        .stdout(predicate::str::contains("Created client with ID: 1"));
}

#[test]
fn test_cli_list_empty_clients() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    verdant_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "client", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No clients found."));
}

#[test]
fn test_cli_client_show_redacts_gate_code() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "client",
            "create",
            "Oak Court",
            "--gate-code",
            "8810",
            "--monthly-rate-cents",
            "18000",
        ])
        .assert()
        .success();

    // Default role is the least privileged: gated fields disappear
    verdant_cmd()
        .args(["--database-file", db_arg, "client", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Oak Court"))
        .stdout(predicate::str::contains("8810").not())
        .stdout(predicate::str::contains("$180.00").not());

    // A manager sees both
    verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "client",
            "show",
            "1",
            "--role",
            "manager",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("8810"))
        .stdout(predicate::str::contains("$180.00"));
}

#[test]
fn test_cli_gate_code_requires_privileged_role() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "client",
            "create",
            "Oak Court",
            "--gate-code",
            "8810",
        ])
        .assert()
        .success();

    verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "client",
            "gate-code",
            "1",
            "--role",
            "crew-member",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not permitted"));

    verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "client",
            "gate-code",
            "1",
            "--role",
            "team-leader",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("8810"));
}

#[test]
fn test_cli_template_create_seeds_distribution() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    verdant_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "template",
            "create",
            "Estate turf care",
            "24",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created template with ID: 1"))
        .stdout(predicate::str::contains("Services per year: 24"));
}

#[test]
fn test_cli_template_create_rejects_sum_mismatch() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    verdant_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "template",
            "create",
            "Broken",
            "24",
            "--monthly",
            "1,1,1,1,1,1,1,1,1,1,1,1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("services_per_month"));
}

#[test]
fn test_cli_set_distribution_rejects_sum_mismatch() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "template",
            "create",
            "Two dozen",
            "24",
        ])
        .assert()
        .success();

    // Sums to 23 against a target of 24
    verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "template",
            "set-distribution",
            "1",
            "2,2,2,2,1,1,1,1,2,2,2,1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("monthly_counts"));

    verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "template",
            "set-distribution",
            "1",
            "2,2,2,2,2,2,2,2,2,2,2,2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced monthly distribution"));
}

#[test]
fn test_cli_assign_and_list_programs() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    verdant_cmd()
        .args(["--database-file", db_arg, "client", "create", "Maple Street HOA"])
        .assert()
        .success();
    verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "template",
            "create",
            "Estate turf care",
            "24",
        ])
        .assert()
        .success();

    verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "program",
            "assign",
            "1",
            "1",
            "2026-03-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Assigned program with ID: 1"))
        .stdout(predicate::str::contains("No service instances yet."));

    verdant_cmd()
        .args(["--database-file", db_arg, "program", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Estate turf care"))
        .stdout(predicate::str::contains("Maple Street HOA"));
}

#[test]
fn test_cli_assign_missing_client_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    verdant_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "program",
            "assign",
            "7",
            "1",
            "2026-03-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Client with ID 7 not found"));
}

#[test]
fn test_cli_schedule_entry_requires_anchor_or_flexible() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "schedule",
            "create",
            "Standard lawn schedule",
        ])
        .assert()
        .success();
    verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "treatment",
            "create",
            "Core aeration",
            "--category",
            "aeration",
        ])
        .assert()
        .success();

    // Neither a month nor --flexible
    verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "schedule",
            "add-entry",
            "1",
            "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("anchored to a month or marked flexible"));

    verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "schedule",
            "add-entry",
            "1",
            "1",
            "--month",
            "9",
            "--visit-number",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added schedule entry with ID: 1"));
}

#[test]
fn test_cli_distribute_table() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    verdant_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "distribute",
            "2026",
            "24",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Jan |"))
        .stdout(predicate::str::contains("| Dec |"))
        .stdout(predicate::str::contains("Total: 24 services"));
}

#[test]
fn test_cli_distribute_cadence_is_vestigial() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    // Same year and target under both cadences produce the same table
    let two_week = verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "distribute",
            "2026",
            "30",
            "--cadence",
            "two-week",
        ])
        .assert()
        .success();
    let two_week_out = two_week.get_output().stdout.clone();

    let four_week = verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "distribute",
            "2026",
            "30",
            "--cadence",
            "four-week",
        ])
        .assert()
        .success();
    let four_week_out = four_week.get_output().stdout.clone();

    assert_eq!(two_week_out, four_week_out);
}

#[test]
fn test_cli_service_lifecycle() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    verdant_cmd()
        .args(["--database-file", db_arg, "client", "create", "Oak Court"])
        .assert()
        .success();
    verdant_cmd()
        .args(["--database-file", db_arg, "template", "create", "Monthly", "12"])
        .assert()
        .success();
    verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "program",
            "assign",
            "1",
            "1",
            "2026-01-15",
        ])
        .assert()
        .success();

    verdant_cmd()
        .args(["--database-file", db_arg, "service", "add", "1", "6", "2026"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added service instance with ID: 1"));

    verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "service",
            "schedule",
            "1",
            "2026-06-10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Placed on calendar"));

    verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "job",
            "create",
            "1",
            "June visit",
            "--crew",
            "North crew",
        ])
        .assert()
        .success();

    verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "service",
            "complete",
            "1",
            "--job-id",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed service"))
        .stdout(predicate::str::contains("job 1"));
}

#[test]
fn test_cli_program_pause_resume() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    verdant_cmd()
        .args(["--database-file", db_arg, "client", "create", "Oak Court"])
        .assert()
        .success();
    verdant_cmd()
        .args(["--database-file", db_arg, "template", "create", "Monthly", "12"])
        .assert()
        .success();
    verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "program",
            "assign",
            "1",
            "1",
            "2026-01-15",
        ])
        .assert()
        .success();

    verdant_cmd()
        .args(["--database-file", db_arg, "program", "pause", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paused program"));

    verdant_cmd()
        .args(["--database-file", db_arg, "program", "resume", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resumed program"));

    // Completing twice is an invalid transition
    verdant_cmd()
        .args(["--database-file", db_arg, "program", "complete", "1"])
        .assert()
        .success();
    verdant_cmd()
        .args(["--database-file", db_arg, "program", "complete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot move program"));
}

#[test]
fn test_cli_template_delete_requires_confirm() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    verdant_cmd()
        .args(["--database-file", db_arg, "template", "create", "Monthly", "12"])
        .assert()
        .success();

    verdant_cmd()
        .args(["--database-file", db_arg, "template", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("confirmation"));

    verdant_cmd()
        .args([
            "--database-file",
            db_arg,
            "template",
            "delete",
            "1",
            "--confirm",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted template 'Monthly' (ID: 1)"));
}
