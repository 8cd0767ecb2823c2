use serde::{Deserialize, Serialize};

/// One line of `visits.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRow {
    pub full_visitor_id: String,
    pub visit_id: String,
    pub visit_number: i64,
    pub visit_start_time: String,
    pub browser: Option<String>,
    pub country: Option<String>,
}

/// One line of `hits.json`.
/// Parent keys are denormalized from the owning visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitRow {
    pub full_visitor_id: String,
    pub visit_id: String,
    pub hit_number: i64,
    pub hit_type: String,
    pub hit_timestamp: String,
    pub page_path: Option<String>,
    pub page_title: Option<String>,
    pub hostname: Option<String>,
}

/// Rows produced from a single session record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanOut {
    pub visit: VisitRow,
    pub hits: Vec<HitRow>,
}
