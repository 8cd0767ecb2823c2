use hitsplit_types::{HitField, HitRecord, HitViolation, SchemaViolation, SessionRecord, TopField};

use crate::timestamp::{hit_instant, visit_instant};

/// Accumulates coerced session fields.
/// Yields a `SessionRecord` only once every required field has been supplied,
/// so a failed validation never leaves a partially coerced record behind.
#[derive(Debug, Default)]
pub struct SessionBuilder {
    full_visitor_id: Option<String>,
    visit_id: Option<i64>,
    visit_start_time: Option<i64>,
    visit_number: Option<i64>,
    browser: Option<String>,
    country: Option<String>,
    hits: Vec<HitRecord>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full_visitor_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.full_visitor_id = Some(id.into());
        self
    }

    /// Store a coerced value for one of the integer-like top-level fields.
    /// Other fields are ignored.
    pub fn integer(&mut self, field: TopField, value: i64) -> &mut Self {
        match field {
            TopField::VisitId => self.visit_id = Some(value),
            TopField::VisitStartTime => self.visit_start_time = Some(value),
            TopField::VisitNumber => self.visit_number = Some(value),
            TopField::FullVisitorId | TopField::Hits => {}
        }
        self
    }

    pub fn browser(&mut self, browser: Option<String>) -> &mut Self {
        self.browser = browser;
        self
    }

    pub fn country(&mut self, country: Option<String>) -> &mut Self {
        self.country = country;
        self
    }

    pub fn push_hit(&mut self, hit: HitRecord) -> &mut Self {
        self.hits.push(hit);
        self
    }

    /// Coerced `visitStartTime`, checked to be a representable instant
    pub fn start_time(&self) -> Result<i64, SchemaViolation> {
        let start = self
            .visit_start_time
            .ok_or(SchemaViolation::Missing(TopField::VisitStartTime))?;
        visit_instant(start)
            .map(|_| start)
            .ok_or(SchemaViolation::OutOfRange(TopField::VisitStartTime))
    }

    pub fn build(self) -> Result<SessionRecord, SchemaViolation> {
        let visit_start_time = self.start_time()?;
        let started_at = visit_instant(visit_start_time)
            .ok_or(SchemaViolation::OutOfRange(TopField::VisitStartTime))?;

        Ok(SessionRecord {
            full_visitor_id: self
                .full_visitor_id
                .ok_or(SchemaViolation::Missing(TopField::FullVisitorId))?,
            visit_id: self
                .visit_id
                .ok_or(SchemaViolation::Missing(TopField::VisitId))?,
            visit_start_time,
            visit_number: self
                .visit_number
                .ok_or(SchemaViolation::Missing(TopField::VisitNumber))?,
            started_at,
            browser: self.browser,
            country: self.country,
            hits: self.hits,
        })
    }
}

/// Accumulates coerced fields of one hit.
#[derive(Debug, Default)]
pub struct HitBuilder {
    hit_number: Option<i64>,
    time: Option<i64>,
    hit_type: Option<String>,
    page_path: Option<String>,
    page_title: Option<String>,
    hostname: Option<String>,
}

impl HitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a coerced value for `hitNumber` or `time`
    pub fn integer(&mut self, field: HitField, value: i64) -> &mut Self {
        match field {
            HitField::HitNumber => self.hit_number = Some(value),
            HitField::Time => self.time = Some(value),
            HitField::Type => {}
        }
        self
    }

    pub fn hit_type(&mut self, hit_type: impl Into<String>) -> &mut Self {
        self.hit_type = Some(hit_type.into());
        self
    }

    pub fn page(
        &mut self,
        page_path: Option<String>,
        page_title: Option<String>,
        hostname: Option<String>,
    ) -> &mut Self {
        self.page_path = page_path;
        self.page_title = page_title;
        self.hostname = hostname;
        self
    }

    /// Finish the hit, deriving its instant from the parent visit's start
    pub fn build(self, visit_start_time: i64) -> Result<HitRecord, HitViolation> {
        let hit_number = self
            .hit_number
            .ok_or(HitViolation::Missing(HitField::HitNumber))?;
        let time = self.time.ok_or(HitViolation::Missing(HitField::Time))?;
        let hit_type = self
            .hit_type
            .ok_or(HitViolation::Missing(HitField::Type))?;
        let hit_at = hit_instant(visit_start_time, time)
            .ok_or(HitViolation::OutOfRange(HitField::Time))?;

        Ok(HitRecord {
            hit_number,
            time,
            hit_type,
            hit_at,
            page_path: self.page_path,
            page_title: self.page_title,
            hostname: self.hostname,
        })
    }
}
