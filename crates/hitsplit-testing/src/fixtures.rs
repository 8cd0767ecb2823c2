//! Session line fixtures.
//!
//! Lines are generated from `serde_json::json!` so each test states only the
//! fields it cares about.

use serde_json::{Value, json};

/// The reference session: one visit at epoch 1600000000 with a single PAGE hit.
pub const REFERENCE_LINE: &str = r#"{"fullVisitorId":"v1","visitId":"100","visitStartTime":"1600000000","visitNumber":"1","hits":[{"hitNumber":"1","time":"0","type":"PAGE"}]}"#;

/// A hit with digit-string fields
pub fn hit(number: u32, time_ms: u32, hit_type: &str) -> Value {
    json!({
        "hitNumber": number.to_string(),
        "time": time_ms.to_string(),
        "type": hit_type,
    })
}

/// A hit carrying page details
pub fn page_hit(number: u32, time_ms: u32, path: &str, title: &str) -> Value {
    let mut value = hit(number, time_ms, "PAGE");
    value["page"] = json!({
        "pagePath": path,
        "pageTitle": title,
        "hostname": "shop.example",
    });
    value
}

/// A session with digit-string identifiers
pub fn session(visitor: &str, visit_id: u64, start: u64, hits: Vec<Value>) -> Value {
    json!({
        "fullVisitorId": visitor,
        "visitId": visit_id.to_string(),
        "visitStartTime": start.to_string(),
        "visitNumber": "1",
        "hits": hits,
    })
}

/// Remove a top-level key
pub fn without(mut value: Value, key: &str) -> Value {
    if let Some(map) = value.as_object_mut() {
        map.remove(key);
    }
    value
}

/// Render values as NDJSON text
pub fn ndjson(lines: &[Value]) -> String {
    lines
        .iter()
        .map(|line| format!("{}\n", line))
        .collect()
}
