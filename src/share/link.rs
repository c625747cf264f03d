//! Handover link assembly: `<origin>/h/<id>#<payload>`.
//! The payload rides in the fragment so it never reaches a server; the
//! path id is decorative and nothing routes on it.

use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const LINK_ID_LEN: usize = 6;

/// Short random path segment, six base-36 characters.
pub fn link_id() -> String {
    let mut rng = rand::rng();
    (0..LINK_ID_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

pub fn build(origin: &str, payload: &str) -> String {
    format!(
        "{}/h/{}#{}",
        origin.trim_end_matches('/'),
        link_id(),
        payload
    )
}

/// Pull the payload out of a handover link. Input without a fragment
/// marker is treated as a bare payload and passed through.
pub fn extract_payload(input: &str) -> &str {
    match input.split_once('#') {
        Some((_, fragment)) => fragment,
        None => input,
    }
}
