mod common;
use common::{init_db_with_data, setup_test_db, slog, temp_out};
use predicates::prelude::*;
use std::fs;
use std::path::Path;

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_all", "csv");

    slog()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,ticketNumber,operatorName"));
    assert!(content.contains("TCK-1001"));
    assert!(content.contains("TCK-2001"));
    assert!(content.contains("TCK-2002"));
}

#[test]
fn test_export_json_is_an_array_of_records() {
    let db_path = setup_test_db("export_json_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_json_all", "json");

    slog()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = parsed.as_array().expect("top-level array");
    assert_eq!(rows.len(), 3);
    assert!(rows[0].get("id").is_some());
    assert!(rows[0].get("ticketNumber").is_some());
}

#[test]
fn test_export_filter_limits_rows() {
    let db_path = setup_test_db("export_filter");
    init_db_with_data(&db_path);

    let out = temp_out("export_filter", "csv");

    slog()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--filter", "APAC",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("TCK-2002"));
    assert!(!content.contains("TCK-2001"));
    assert!(!content.contains("TCK-1001"));
}

#[test]
fn test_export_with_unmatched_filter_writes_nothing() {
    let db_path = setup_test_db("export_no_match");
    init_db_with_data(&db_path);

    let out = temp_out("export_no_match", "csv");

    slog()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--filter",
            "no-such-ticket",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_xlsx_writes_a_workbook() {
    let db_path = setup_test_db("export_xlsx");
    init_db_with_data(&db_path);

    let out = temp_out("export_xlsx", "xlsx");

    slog()
        .args(["--db", &db_path, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported xlsx");
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_rejects_relative_paths() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    slog()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be absolute"));
}

#[test]
fn test_export_requires_login() {
    let db_path = setup_test_db("export_needs_login");
    slog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let out = temp_out("export_needs_login", "csv");

    slog()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_export_refuses_overwrite_when_declined() {
    let db_path = setup_test_db("export_declined");
    init_db_with_data(&db_path);

    let out = temp_out("export_declined", "csv");
    fs::write(&out, "precious").expect("write existing file");

    slog()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Export cancelled"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "precious");
}

#[test]
fn test_export_force_overwrites() {
    let db_path = setup_test_db("export_force");
    init_db_with_data(&db_path);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").expect("write existing file");

    slog()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("ticketNumber"));
    assert!(!content.contains("stale"));
}
