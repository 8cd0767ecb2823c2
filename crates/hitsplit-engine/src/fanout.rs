use hitsplit_types::{FanOut, HitRow, SessionRecord, VisitRow};

use crate::timestamp::{format_hit, format_visit};

/// Project a validated session into one visit row and one row per hit.
///
/// Hit rows keep input order and carry the parent's `full_visitor_id` and `visit_id`.
pub fn fan_out(record: SessionRecord) -> FanOut {
    let visit_id = record.visit_id.to_string();

    let hits = record
        .hits
        .into_iter()
        .map(|hit| HitRow {
            full_visitor_id: record.full_visitor_id.clone(),
            visit_id: visit_id.clone(),
            hit_number: hit.hit_number,
            hit_type: hit.hit_type,
            hit_timestamp: format_hit(&hit.hit_at),
            page_path: hit.page_path,
            page_title: hit.page_title,
            hostname: hit.hostname,
        })
        .collect();

    let visit = VisitRow {
        full_visitor_id: record.full_visitor_id,
        visit_id,
        visit_number: record.visit_number,
        visit_start_time: format_visit(&record.started_at),
        browser: record.browser,
        country: record.country,
    };

    FanOut { visit, hits }
}
