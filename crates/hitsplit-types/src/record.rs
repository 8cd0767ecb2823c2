use chrono::{DateTime, Utc};

// NOTE: Record Design
//
// Input lines arrive as loosely typed JSON: integer-like fields may be digit strings or
// native integers, optional data hides in nested objects. Records here are the post-validation
// shape: every coercion has already succeeded and every derived instant is representable.
// Nothing downstream of the validator ever sees a half-coerced session.

/// A validated session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub full_visitor_id: String,
    pub visit_id: i64,

    /// Seconds since the Unix epoch
    pub visit_start_time: i64,
    pub visit_number: i64,

    /// Instant derived from `visit_start_time`
    pub started_at: DateTime<Utc>,

    /// `device.browser`
    pub browser: Option<String>,

    /// `geoNetwork.country`
    pub country: Option<String>,

    /// Hits in input order
    pub hits: Vec<HitRecord>,
}

/// A validated hit nested under a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRecord {
    pub hit_number: i64,

    /// Milliseconds since the visit started
    pub time: i64,
    pub hit_type: String,

    /// Instant derived from the parent's `visit_start_time` plus `time`
    pub hit_at: DateTime<Utc>,

    pub page_path: Option<String>,
    pub page_title: Option<String>,
    pub hostname: Option<String>,
}

impl SessionRecord {
    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }
}
