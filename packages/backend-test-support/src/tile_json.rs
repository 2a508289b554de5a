//! JSON builders for tiles and moves, written against the wire format only
//! so wire tests do not reuse the serializer they are checking.

use serde_json::{json, Value};

/// `"5|3"` → `{"id":"3-5","a":5,"b":3}`.
///
/// Panics on a malformed token; tests only pass literals.
pub fn tile(token: &str) -> Value {
    let (a, b) = token
        .split_once('|')
        .and_then(|(a, b)| Some((a.trim().parse::<u8>().ok()?, b.trim().parse::<u8>().ok()?)))
        .unwrap_or_else(|| panic!("bad tile token {token:?}"));
    json!({ "id": format!("{}-{}", a.min(b), a.max(b)), "a": a, "b": b })
}

pub fn play(token: &str) -> Value {
    json!({ "action": "play", "tile": tile(token) })
}

pub fn pass() -> Value {
    json!({ "action": "pass" })
}
