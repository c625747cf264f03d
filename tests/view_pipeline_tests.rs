use chrono::{Duration, TimeZone, Utc};
use shiftlog::core::view;
use shiftlog::models::{Direction, Draft, Field, Record, SortSpec};

/// Record with a deterministic timestamp, `minute` minutes past a
/// fixed base instant.
fn record(ticket: &str, operator: &str, minute: i64) -> Record {
    let now = Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap() + Duration::minutes(minute);
    Record::new(
        Draft {
            ticket_number: ticket.to_string(),
            operator_name: operator.to_string(),
            shift: "Morning".to_string(),
            region: "EMEA".to_string(),
            date: "2026-03-10".to_string(),
            source: "Phone".to_string(),
            case_details: String::new(),
            action_taken: String::new(),
            remark: String::new(),
        },
        now,
    )
}

fn by_timestamp(direction: Direction) -> SortSpec {
    SortSpec {
        key: Field::Timestamp,
        direction,
    }
}

#[test]
fn filtered_view_is_subset_of_records() {
    let records = vec![
        record("TCK-1", "Dana", 0),
        record("TCK-2", "Luis", 1),
        record("TCK-3", "Dana", 2),
        record("TCK-4", "Mara", 3),
    ];

    let view = view::apply(&records, "dana", &by_timestamp(Direction::Asc));

    assert_eq!(view.len(), 2);
    for r in &view {
        assert!(records.iter().any(|orig| orig.id == r.id));
        assert_eq!(r.operator_name, "Dana");
    }
}

#[test]
fn empty_or_blank_filter_matches_everything() {
    let records = vec![record("TCK-1", "Dana", 0), record("TCK-2", "Luis", 1)];

    assert_eq!(
        view::apply(&records, "", &by_timestamp(Direction::Asc)).len(),
        2
    );
    assert_eq!(
        view::apply(&records, "   ", &by_timestamp(Direction::Asc)).len(),
        2
    );
}

#[test]
fn filter_reaches_id_and_timestamp_too() {
    let records = vec![record("TCK-1", "Dana", 0), record("TCK-2", "Luis", 1)];

    // Every stored timestamp starts with the year
    let view = view::apply(&records, "2026-03", &by_timestamp(Direction::Asc));
    assert_eq!(view.len(), 2);

    // A full id matches exactly one record
    let needle = records[1].id.clone();
    let view = view::apply(&records, &needle, &by_timestamp(Direction::Asc));
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, records[1].id);
}

#[test]
fn sort_is_stable_for_equal_keys_in_both_directions() {
    let records = vec![
        record("TCK-1", "Same", 0),
        record("TCK-2", "Same", 1),
        record("TCK-3", "Same", 2),
    ];

    let spec = SortSpec {
        key: Field::Operator,
        direction: Direction::Asc,
    };
    let asc = view::apply(&records, "", &spec);
    let tickets: Vec<&str> = asc.iter().map(|r| r.ticket_number.as_str()).collect();
    assert_eq!(tickets, ["TCK-1", "TCK-2", "TCK-3"]);

    // Reversing the direction only reverses strict orderings; ties
    // keep their incoming order.
    let spec = SortSpec {
        key: Field::Operator,
        direction: Direction::Desc,
    };
    let desc = view::apply(&records, "", &spec);
    let tickets: Vec<&str> = desc.iter().map(|r| r.ticket_number.as_str()).collect();
    assert_eq!(tickets, ["TCK-1", "TCK-2", "TCK-3"]);
}

#[test]
fn timestamp_descending_puts_newest_first() {
    let records = vec![
        record("TCK-old", "Dana", 0),
        record("TCK-mid", "Dana", 5),
        record("TCK-new", "Dana", 10),
    ];

    let view = view::apply(&records, "", &by_timestamp(Direction::Desc));
    let tickets: Vec<&str> = view.iter().map(|r| r.ticket_number.as_str()).collect();
    assert_eq!(tickets, ["TCK-new", "TCK-mid", "TCK-old"]);
}

#[test]
fn unparseable_timestamp_sorts_as_oldest() {
    let mut broken = record("TCK-broken", "Dana", 5);
    broken.timestamp = "not-a-date".to_string();
    let records = vec![record("TCK-a", "Dana", 0), broken, record("TCK-b", "Dana", 10)];

    let view = view::apply(&records, "", &by_timestamp(Direction::Desc));
    assert_eq!(view.last().map(|r| r.ticket_number.as_str()), Some("TCK-broken"));

    let view = view::apply(&records, "", &by_timestamp(Direction::Asc));
    assert_eq!(view.first().map(|r| r.ticket_number.as_str()), Some("TCK-broken"));
}

#[test]
fn case_sort_compares_case_insensitively() {
    let records = vec![
        record("TCK-1", "zoe", 0),
        record("TCK-2", "Adam", 1),
        record("TCK-3", "mara", 2),
    ];

    let spec = SortSpec {
        key: Field::Operator,
        direction: Direction::Asc,
    };
    let view = view::apply(&records, "", &spec);
    let ops: Vec<&str> = view.iter().map(|r| r.operator_name.as_str()).collect();
    assert_eq!(ops, ["Adam", "mara", "zoe"]);
}

#[test]
fn pages_split_45_records_as_20_20_5() {
    let records: Vec<Record> = (0..45)
        .map(|i| record(&format!("TCK-{i:03}"), "Dana", i))
        .collect();
    let view = view::apply(&records, "", &by_timestamp(Direction::Asc));

    assert_eq!(view::page_count(view.len(), 20), 3);
    assert_eq!(view::page_slice(&view, 1, 20).len(), 20);
    assert_eq!(view::page_slice(&view, 2, 20).len(), 20);
    assert_eq!(view::page_slice(&view, 3, 20).len(), 5);

    // Out of range is empty, not an error
    assert!(view::page_slice(&view, 4, 20).is_empty());
    assert!(view::page_slice(&view, 100, 20).is_empty());
}

#[test]
fn page_slices_are_disjoint_and_cover_the_view() {
    let records: Vec<Record> = (0..45)
        .map(|i| record(&format!("TCK-{i:03}"), "Dana", i))
        .collect();
    let view = view::apply(&records, "", &by_timestamp(Direction::Asc));

    let mut seen = Vec::new();
    for page in 1..=view::page_count(view.len(), 20) {
        seen.extend(view::page_slice(&view, page, 20).iter().map(|r| r.id.clone()));
    }
    let all: Vec<String> = view.iter().map(|r| r.id.clone()).collect();
    assert_eq!(seen, all);
}

#[test]
fn zero_per_page_is_clamped() {
    let records: Vec<Record> = (0..3)
        .map(|i| record(&format!("TCK-{i}"), "Dana", i))
        .collect();
    let view = view::apply(&records, "", &by_timestamp(Direction::Asc));

    assert_eq!(view::page_slice(&view, 1, 0).len(), 1);
    assert_eq!(view::page_count(view.len(), 0), 3);
}
