//! Assertions over produced tables.

use anyhow::{Context, Result};
use serde_json::Value;

/// Parse NDJSON text, failing on any line that is not JSON.
pub fn parse_rows(text: &str) -> Result<Vec<Value>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("line {} is not JSON: {}", i + 1, line))
        })
        .collect()
}

/// Assert every hit row's parent keys match some earlier visit row,
/// and hits of one visit are contiguous.
pub fn assert_hits_follow_visits(visits: &[Value], hits: &[Value]) -> Result<()> {
    let keys: Vec<(&Value, &Value)> = visits
        .iter()
        .map(|v| (&v["full_visitor_id"], &v["visit_id"]))
        .collect();

    let mut cursor = 0usize;
    for (i, hit) in hits.iter().enumerate() {
        let key = (&hit["full_visitor_id"], &hit["visit_id"]);
        let position = keys[cursor..]
            .iter()
            .position(|k| *k == key)
            .with_context(|| format!("hit {} has no matching visit at or after {}", i, cursor))?;
        cursor += position;
    }

    Ok(())
}

/// Collect the `event` and `line` of every diagnostic line in a log.
pub fn diagnostic_events(text: &str) -> Result<Vec<(String, u64)>> {
    parse_rows(text)?
        .iter()
        .map(|d| {
            let event = d["event"].as_str().context("diagnostic missing event")?;
            let line = d["line"].as_u64().context("diagnostic missing line")?;
            Ok((event.to_string(), line))
        })
        .collect()
}
