use serde::Serialize;
use std::fmt;

/// Counters accumulated over one pass of the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Visit rows written
    pub visits: u64,

    /// Hit rows written
    pub hits: u64,

    /// Non-blank lines rejected as bad JSON or schema failures
    pub bad: u64,
}

impl RunStats {
    pub fn record_visit(&mut self, hit_count: usize) {
        self.visits += 1;
        self.hits += hit_count as u64;
    }

    pub fn record_bad(&mut self) {
        self.bad += 1;
    }
}

/// Human-readable run summary line
impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[DONE] visits={} hits={} bad={}",
            self.visits, self.hits, self.bad
        )
    }
}
