use shiftlog::share::codec;
use shiftlog::share::link;
use shiftlog::share::Snapshot;

fn snapshot(ticket: &str, operator: &str) -> Snapshot {
    Snapshot {
        ticket_number: ticket.to_string(),
        operator_name: operator.to_string(),
        shift: "Night".to_string(),
        region: "APAC".to_string(),
        date: "2026-03-10".to_string(),
        source: "Phone".to_string(),
        case_details: "Core router flapping".to_string(),
        action_taken: "Replaced the PSU".to_string(),
        remark: String::new(),
        timestamp: "2026-03-10T09:00:00.000Z".to_string(),
    }
}

#[test]
fn encode_decode_round_trips_in_order() {
    let snapshots = vec![snapshot("TCK-1", "Dana"), snapshot("TCK-2", "Luis")];

    let payload = codec::encode(&snapshots);
    let decoded = codec::decode(&payload).expect("payload should decode");

    assert_eq!(decoded, snapshots);
}

#[test]
fn unicode_values_survive_the_trip() {
    let mut s = snapshot("TCK-Ü", "Dana");
    s.case_details = "Überlast im Rechenzentrum 東京".to_string();
    s.remark = "naïve café ✓".to_string();

    let decoded = codec::decode(&codec::encode(std::slice::from_ref(&s)))
        .expect("payload should decode");

    assert_eq!(decoded, vec![s]);
}

#[test]
fn empty_list_round_trips() {
    let payload = codec::encode(&[]);
    assert_eq!(codec::decode(&payload), Some(Vec::new()));
}

#[test]
fn payload_sticks_to_the_urlsafe_alphabet() {
    let snapshots = vec![snapshot("TCK-1", "Dana"); 8];
    let payload = codec::encode(&snapshots);

    assert!(!payload.is_empty());
    assert!(payload
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
}

#[test]
fn garbage_payload_decodes_to_none() {
    assert_eq!(codec::decode("not-valid-base64!!"), None);
}

#[test]
fn standard_alphabet_payload_is_rejected() {
    // '+' and '/' belong to the standard alphabet, not the URL-safe one
    assert_eq!(codec::decode("ab+/cd"), None);
}

#[test]
fn valid_base64_of_non_json_decodes_to_none() {
    // "hello" in base64
    assert_eq!(codec::decode("aGVsbG8"), None);
}

#[test]
fn valid_base64_of_wrong_shape_decodes_to_none() {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;

    let payload = URL_SAFE_NO_PAD.encode(r#"{"ticketNumber":"TCK-1"}"#);
    assert_eq!(codec::decode(&payload), None);
}

#[test]
fn decode_ignores_surrounding_whitespace() {
    let snapshots = vec![snapshot("TCK-1", "Dana")];
    let payload = format!("  {}\n", codec::encode(&snapshots));

    assert_eq!(codec::decode(&payload), Some(snapshots));
}

#[test]
fn snapshot_leaves_the_record_id_behind() {
    let json = serde_json::to_string(&snapshot("TCK-1", "Dana")).unwrap();

    assert!(!json.contains("\"id\""));
    assert!(json.contains("\"ticketNumber\""));
}

#[test]
fn link_carries_payload_in_the_fragment() {
    let url = link::build("https://shiftlog.app", "PAYLOAD");

    assert!(url.starts_with("https://shiftlog.app/h/"));
    assert!(url.ends_with("#PAYLOAD"));
    assert_eq!(link::extract_payload(&url), "PAYLOAD");
}

#[test]
fn build_trims_a_trailing_slash_from_the_origin() {
    let url = link::build("https://shiftlog.app/", "P");
    assert!(url.starts_with("https://shiftlog.app/h/"));
    assert!(!url.contains("//h/"));
}

#[test]
fn extract_payload_passes_bare_payloads_through() {
    assert_eq!(link::extract_payload("just-a-payload"), "just-a-payload");
    assert_eq!(link::extract_payload("a#b#c"), "b#c");
}

#[test]
fn link_ids_are_short_base36() {
    for _ in 0..20 {
        let id = link::link_id();
        assert_eq!(id.len(), 6);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}
