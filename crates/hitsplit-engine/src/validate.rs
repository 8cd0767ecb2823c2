use hitsplit_types::{
    HitField, HitRecord, HitViolation, Rejection, SchemaViolation, SessionRecord, TopField,
    Validation,
};
use serde_json::{Map, Value};

use crate::builder::{HitBuilder, SessionBuilder};
use crate::coerce::coerce_int;

/// Classify one raw input line.
///
/// Surrounding ASCII whitespace is ignored. Input is taken as bytes so that
/// invalid UTF-8 is reported as a JSON error instead of failing the read.
pub fn validate_line(raw: &[u8]) -> Validation {
    let line = raw.trim_ascii();
    if line.is_empty() {
        return Validation::Skip;
    }

    let value: Value = match serde_json::from_slice(line) {
        Ok(value) => value,
        Err(err) => return Validation::Invalid(Rejection::BadJson(err.to_string())),
    };

    match validate_value(&value) {
        Ok(record) => Validation::Valid(record),
        Err(reason) => Validation::Invalid(Rejection::Schema(reason)),
    }
}

/// Check a parsed session against the schema.
///
/// Rules run in a fixed order and stop at the first violation:
/// required keys, `fullVisitorId` type, integer coercion, `hits` type,
/// start-time range, then each hit in list order.
pub fn validate_value(value: &Value) -> Result<SessionRecord, SchemaViolation> {
    let session = value.as_object().ok_or(SchemaViolation::NotObject)?;

    for field in TopField::REQUIRED {
        required(session, field)?;
    }

    let mut builder = SessionBuilder::new();

    let full_visitor_id = required(session, TopField::FullVisitorId)?
        .as_str()
        .ok_or(SchemaViolation::NotString(TopField::FullVisitorId))?;
    builder.full_visitor_id(full_visitor_id);

    for field in TopField::INTEGER_LIKE {
        let coerced =
            coerce_int(required(session, field)?).ok_or(SchemaViolation::NotInt(field))?;
        builder.integer(field, coerced);
    }

    let hits = required(session, TopField::Hits)?
        .as_array()
        .ok_or(SchemaViolation::NotList(TopField::Hits))?;

    let start = builder.start_time()?;
    for (offset, hit) in hits.iter().enumerate() {
        let index = offset + 1;
        let record = validate_hit(hit, start)
            .map_err(|violation| SchemaViolation::Hit { index, violation })?;
        builder.push_hit(record);
    }

    builder
        .browser(nested_str(session, "device", "browser"))
        .country(nested_str(session, "geoNetwork", "country"));

    builder.build()
}

fn validate_hit(value: &Value, visit_start_time: i64) -> Result<HitRecord, HitViolation> {
    let hit = value.as_object().ok_or(HitViolation::NotObject)?;
    let mut builder = HitBuilder::new();

    for field in HitField::INTEGER_LIKE {
        let raw = hit
            .get(field.as_str())
            .ok_or(HitViolation::Missing(field))?;
        let coerced = coerce_int(raw).ok_or(HitViolation::NotInt(field))?;
        builder.integer(field, coerced);
    }

    let hit_type = hit
        .get(HitField::Type.as_str())
        .ok_or(HitViolation::Missing(HitField::Type))?
        .as_str()
        .ok_or(HitViolation::NotString(HitField::Type))?;
    builder.hit_type(hit_type);

    builder.page(
        nested_str(hit, "page", "pagePath"),
        nested_str(hit, "page", "pageTitle"),
        nested_str(hit, "page", "hostname"),
    );

    builder.build(visit_start_time)
}

fn required(session: &Map<String, Value>, field: TopField) -> Result<&Value, SchemaViolation> {
    session
        .get(field.as_str())
        .ok_or(SchemaViolation::Missing(field))
}

/// `parent.key` when both levels exist and the leaf is a string
fn nested_str(map: &Map<String, Value>, parent: &str, key: &str) -> Option<String> {
    map.get(parent)?
        .as_object()?
        .get(key)?
        .as_str()
        .map(str::to_owned)
}
