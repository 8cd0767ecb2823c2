use serde::{Serialize, Serializer};
use std::fmt;

use crate::record::SessionRecord;

/// Result of classifying one raw input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// Blank line; neither processed nor counted
    Skip,
    Valid(SessionRecord),
    Invalid(Rejection),
}

/// Why a non-blank line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Not syntactically valid JSON; carries the parser's error text
    BadJson(String),

    /// Valid JSON that violates the session schema
    Schema(SchemaViolation),
}

/// Required top-level session keys, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopField {
    FullVisitorId,
    VisitId,
    VisitStartTime,
    VisitNumber,
    Hits,
}

impl TopField {
    pub const REQUIRED: [TopField; 5] = [
        TopField::FullVisitorId,
        TopField::VisitId,
        TopField::VisitStartTime,
        TopField::VisitNumber,
        TopField::Hits,
    ];

    /// Fields that accept either a digit string or a native integer.
    pub const INTEGER_LIKE: [TopField; 3] = [
        TopField::VisitId,
        TopField::VisitStartTime,
        TopField::VisitNumber,
    ];

    /// Key as it appears in the input JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullVisitorId => "fullVisitorId",
            Self::VisitId => "visitId",
            Self::VisitStartTime => "visitStartTime",
            Self::VisitNumber => "visitNumber",
            Self::Hits => "hits",
        }
    }
}

/// Required hit keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitField {
    HitNumber,
    Time,
    Type,
}

impl HitField {
    pub const INTEGER_LIKE: [HitField; 2] = [HitField::HitNumber, HitField::Time];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HitNumber => "hitNumber",
            Self::Time => "time",
            Self::Type => "type",
        }
    }
}

/// First schema rule a session line violated.
///
/// The `Display` form is the stable reason code written to diagnostics,
/// e.g. `visitNumber_missing` or `hit_3_type_not_str`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaViolation {
    /// Top-level JSON value is not an object
    NotObject,
    Missing(TopField),
    NotString(TopField),
    NotInt(TopField),
    NotList(TopField),

    /// Coerced value cannot be turned into a UTC instant
    OutOfRange(TopField),

    /// Violation inside the hit at 1-based `index`
    Hit {
        index: usize,
        violation: HitViolation,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitViolation {
    NotObject,
    Missing(HitField),
    NotInt(HitField),
    NotString(HitField),
    OutOfRange(HitField),
}

impl fmt::Display for HitViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HitViolation::NotObject => write!(f, "not_object"),
            HitViolation::Missing(field) => write!(f, "{}_missing", field.as_str()),
            HitViolation::NotInt(field) => write!(f, "{}_not_int", field.as_str()),
            HitViolation::NotString(field) => write!(f, "{}_not_str", field.as_str()),
            HitViolation::OutOfRange(field) => write!(f, "{}_out_of_range", field.as_str()),
        }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaViolation::NotObject => write!(f, "record_not_object"),
            SchemaViolation::Missing(field) => write!(f, "{}_missing", field.as_str()),
            SchemaViolation::NotString(field) => write!(f, "{}_not_str", field.as_str()),
            SchemaViolation::NotInt(field) => write!(f, "{}_not_int", field.as_str()),
            SchemaViolation::NotList(field) => write!(f, "{}_not_list", field.as_str()),
            SchemaViolation::OutOfRange(field) => write!(f, "{}_out_of_range", field.as_str()),
            SchemaViolation::Hit { index, violation } => write!(f, "hit_{}_{}", index, violation),
        }
    }
}

impl Serialize for SchemaViolation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
