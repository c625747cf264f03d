#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn slog() -> Command {
    cargo_bin_cmd!("shiftlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Log in with the only accepted credential pair
pub fn login(db_path: &str) {
    slog()
        .args(["--db", db_path, "login", "admin", "--password", "admin"])
        .assert()
        .success();
}

/// Init DB, log in, and add a small dataset useful for many tests.
/// The init seed contributes TCK-1001 (Alice Morgan, EMEA).
pub fn init_db_with_data(db_path: &str) {
    slog()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    login(db_path);

    slog()
        .args([
            "--db",
            db_path,
            "add",
            "--ticket",
            "TCK-2001",
            "--operator",
            "Dana Cole",
            "--region",
            "EMEA",
            "--date",
            "2026-03-02",
            "--source",
            "Email",
            "--case",
            "Mailbox quota exceeded",
            "--action",
            "Raised the quota",
        ])
        .assert()
        .success();

    slog()
        .args([
            "--db",
            db_path,
            "add",
            "--ticket",
            "TCK-2002",
            "--operator",
            "Luis Vega",
            "--shift",
            "Night",
            "--region",
            "APAC",
            "--date",
            "2026-03-03",
            "--source",
            "Phone",
            "--case",
            "Core router flapping",
            "--action",
            "Replaced the PSU",
        ])
        .assert()
        .success();
}

/// Ids of the live records, in storage order
pub fn record_ids(db_path: &str) -> Vec<String> {
    let pool = shiftlog::db::pool::DbPool::open(db_path).expect("open db");
    let records = shiftlog::core::store::StoreLogic::load_records(&pool).expect("load records");
    records.into_iter().map(|r| r.id).collect()
}

/// Full id of the record carrying the given ticket number
pub fn id_of_ticket(db_path: &str, ticket: &str) -> String {
    let pool = shiftlog::db::pool::DbPool::open(db_path).expect("open db");
    let records = shiftlog::core::store::StoreLogic::load_records(&pool).expect("load records");
    records
        .into_iter()
        .find(|r| r.ticket_number == ticket)
        .map(|r| r.id)
        .expect("ticket not found")
}

/// Populate many records directly via the library API for paging tests
pub fn populate_many_records(db_path: &str, n: usize) {
    use chrono::{Duration, TimeZone, Utc};
    use shiftlog::core::store::StoreLogic;
    use shiftlog::db::pool::DbPool;
    use shiftlog::models::{Draft, Record};

    let pool = DbPool::open(db_path).expect("open db");
    let base = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();

    let records: Vec<Record> = (0..n)
        .map(|i| {
            Record::new(
                Draft {
                    ticket_number: format!("TCK-{:04}", 3000 + i),
                    operator_name: "Page Filler".to_string(),
                    shift: "Morning".to_string(),
                    region: "EMEA".to_string(),
                    date: "2026-03-01".to_string(),
                    source: "Portal".to_string(),
                    case_details: String::new(),
                    action_taken: String::new(),
                    remark: String::new(),
                },
                base + Duration::minutes(i as i64),
            )
        })
        .collect();

    StoreLogic::save_records(&pool, &records).expect("save records");
}
