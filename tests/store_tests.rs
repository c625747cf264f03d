mod common;

use chrono::Utc;
use common::setup_test_db;
use shiftlog::core::store::StoreLogic;
use shiftlog::db::migrate::run_pending_migrations;
use shiftlog::db::pool::DbPool;
use shiftlog::db::slots;
use shiftlog::errors::AppError;
use shiftlog::models::{DeletedRecord, Draft, Record};

fn open_pool(name: &str) -> DbPool {
    let db = setup_test_db(name);
    DbPool::open(&db).expect("test database should open")
}

fn draft(ticket: &str) -> Draft {
    Draft {
        ticket_number: ticket.to_string(),
        operator_name: "Dana Cole".to_string(),
        shift: "Morning".to_string(),
        region: "EMEA".to_string(),
        date: "2026-03-10".to_string(),
        source: "Phone".to_string(),
        case_details: String::new(),
        action_taken: String::new(),
        remark: String::new(),
    }
}

fn record_with_id(id: &str, ticket: &str) -> Record {
    let mut r = Record::new(draft(ticket), Utc::now());
    r.id = id.to_string();
    r
}

#[test]
fn records_round_trip_through_the_slot() {
    let pool = open_pool("store_round_trip");
    let records = vec![
        Record::new(draft("TCK-1"), Utc::now()),
        Record::new(draft("TCK-2"), Utc::now()),
    ];

    StoreLogic::save_records(&pool, &records).unwrap();
    let loaded = StoreLogic::load_records(&pool).unwrap();

    assert_eq!(loaded, records);
}

#[test]
fn absent_slot_loads_as_empty() {
    let pool = open_pool("store_absent_slot");

    assert!(StoreLogic::load_records(&pool).unwrap().is_empty());
    assert!(StoreLogic::load_tombstones(&pool).unwrap().is_empty());
}

#[test]
fn corrupt_slot_fails_loud_and_keeps_the_bytes() {
    let pool = open_pool("store_corrupt_slot");
    slots::set(&pool, "records", "{this is not json").unwrap();

    let err = StoreLogic::load_records(&pool).unwrap_err();
    match err {
        AppError::CorruptSlot(slot, _) => assert_eq!(slot, "records"),
        other => panic!("expected CorruptSlot, got {other:?}"),
    }

    // The stored bytes survive the failed load for inspection
    assert_eq!(
        slots::get(&pool, "records").unwrap().as_deref(),
        Some("{this is not json")
    );
}

#[test]
fn records_without_ids_get_one_on_load() {
    let pool = open_pool("store_missing_id");
    let legacy = r#"[{
        "ticketNumber": "TCK-OLD",
        "operatorName": "Alice Morgan",
        "shift": "Morning",
        "region": "EMEA",
        "date": "2025-12-01",
        "source": "Phone",
        "caseDetails": "",
        "actionTaken": "",
        "remark": "",
        "timestamp": "2025-12-01T08:00:00.000Z"
    }]"#;
    slots::set(&pool, "records", legacy).unwrap();

    let loaded = StoreLogic::load_records(&pool).unwrap();

    assert_eq!(loaded.len(), 1);
    assert!(!loaded[0].id.is_empty());
    assert_eq!(loaded[0].ticket_number, "TCK-OLD");
}

#[test]
fn append_tombstones_extends_the_existing_list() {
    let pool = open_pool("store_tombstones");
    let first = DeletedRecord {
        record: record_with_id("aaaa00000", "TCK-1"),
        deleted_at: "2026-03-10T09:00:00.000Z".to_string(),
    };
    let second = DeletedRecord {
        record: record_with_id("bbbb00000", "TCK-2"),
        deleted_at: "2026-03-10T10:00:00.000Z".to_string(),
    };

    StoreLogic::append_tombstones(&pool, vec![first.clone()]).unwrap();
    StoreLogic::append_tombstones(&pool, vec![second.clone()]).unwrap();

    let loaded = StoreLogic::load_tombstones(&pool).unwrap();
    assert_eq!(loaded, vec![first, second]);
}

#[test]
fn appending_nothing_leaves_the_slot_alone() {
    let pool = open_pool("store_tombstones_empty");

    StoreLogic::append_tombstones(&pool, Vec::new()).unwrap();

    assert_eq!(slots::get(&pool, "deleted_records").unwrap(), None);
}

#[test]
fn login_flag_round_trips() {
    let pool = open_pool("store_login_flag");

    assert!(!StoreLogic::is_logged_in(&pool).unwrap());

    StoreLogic::set_logged_in(&pool, true).unwrap();
    assert!(StoreLogic::is_logged_in(&pool).unwrap());

    // Logging out removes the key instead of storing "false"
    StoreLogic::set_logged_in(&pool, false).unwrap();
    assert!(!StoreLogic::is_logged_in(&pool).unwrap());
    assert_eq!(slots::get(&pool, "logged_in").unwrap(), None);
}

#[test]
fn seeding_runs_only_while_the_slot_was_never_written() {
    let pool = open_pool("store_seed_once");

    assert!(StoreLogic::seed_if_absent(&pool).unwrap());
    assert!(!StoreLogic::seed_if_absent(&pool).unwrap());

    let records = StoreLogic::load_records(&pool).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].ticket_number, "TCK-1001");
}

#[test]
fn an_emptied_logbook_is_not_reseeded() {
    let pool = open_pool("store_seed_emptied");
    StoreLogic::save_records(&pool, &[]).unwrap();

    assert!(!StoreLogic::seed_if_absent(&pool).unwrap());
    assert!(StoreLogic::load_records(&pool).unwrap().is_empty());
}

#[test]
fn resolve_id_accepts_exact_and_unique_prefix() {
    let records = vec![
        record_with_id("aaaa00001", "TCK-1"),
        record_with_id("aaaa00002", "TCK-2"),
        record_with_id("bbbb00009", "TCK-3"),
    ];

    assert_eq!(
        StoreLogic::resolve_id(&records, "aaaa00001").unwrap(),
        "aaaa00001"
    );
    assert_eq!(StoreLogic::resolve_id(&records, "bb").unwrap(), "bbbb00009");
}

#[test]
fn resolve_id_rejects_ambiguous_and_unknown_prefixes() {
    let records = vec![
        record_with_id("aaaa00001", "TCK-1"),
        record_with_id("aaaa00002", "TCK-2"),
    ];

    assert!(matches!(
        StoreLogic::resolve_id(&records, "aaaa"),
        Err(AppError::AmbiguousId(_))
    ));
    assert!(matches!(
        StoreLogic::resolve_id(&records, "zzz"),
        Err(AppError::RecordNotFound(_))
    ));
}

#[test]
fn exact_id_wins_even_when_it_prefixes_another() {
    let records = vec![
        record_with_id("aaaa", "TCK-1"),
        record_with_id("aaaa00002", "TCK-2"),
    ];

    assert_eq!(StoreLogic::resolve_id(&records, "aaaa").unwrap(), "aaaa");
}

#[test]
fn migration_renames_legacy_slot_keys() {
    let pool = open_pool("store_migration_rename");
    slots::set(&pool, "inventoryRecords", "[]").unwrap();
    slots::set(&pool, "deletedInventoryRecords", "[]").unwrap();
    slots::set(&pool, "isLoggedIn", "true").unwrap();

    run_pending_migrations(&pool.conn).unwrap();

    assert_eq!(slots::get(&pool, "records").unwrap().as_deref(), Some("[]"));
    assert_eq!(
        slots::get(&pool, "deleted_records").unwrap().as_deref(),
        Some("[]")
    );
    assert_eq!(
        slots::get(&pool, "logged_in").unwrap().as_deref(),
        Some("true")
    );
    assert_eq!(slots::get(&pool, "inventoryRecords").unwrap(), None);
    assert_eq!(slots::get(&pool, "deletedInventoryRecords").unwrap(), None);
    assert_eq!(slots::get(&pool, "isLoggedIn").unwrap(), None);
}

#[test]
fn migration_keeps_the_modern_slot_on_conflict() {
    let pool = open_pool("store_migration_conflict");
    slots::set(&pool, "records", r#"["modern"]"#).unwrap();
    slots::set(&pool, "inventoryRecords", r#"["legacy"]"#).unwrap();

    run_pending_migrations(&pool.conn).unwrap();

    assert_eq!(
        slots::get(&pool, "records").unwrap().as_deref(),
        Some(r#"["modern"]"#)
    );
    assert_eq!(slots::get(&pool, "inventoryRecords").unwrap(), None);
}

#[test]
fn migration_runs_once() {
    let pool = open_pool("store_migration_once");
    run_pending_migrations(&pool.conn).unwrap();

    // A legacy key appearing after the marker is left alone
    slots::set(&pool, "isLoggedIn", "true").unwrap();
    run_pending_migrations(&pool.conn).unwrap();

    assert_eq!(
        slots::get(&pool, "isLoggedIn").unwrap().as_deref(),
        Some("true")
    );
    assert_eq!(slots::get(&pool, "logged_in").unwrap(), None);
}
