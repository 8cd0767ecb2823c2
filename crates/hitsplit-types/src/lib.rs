pub mod diagnostic;
pub mod outcome;
pub mod record;
pub mod row;
pub mod stats;

pub use diagnostic::{Diagnostic, DiagnosticEvent, Level};
pub use outcome::{HitField, HitViolation, Rejection, SchemaViolation, TopField, Validation};
pub use record::{HitRecord, SessionRecord};
pub use row::{FanOut, HitRow, VisitRow};
pub use stats::RunStats;
