// Engine module - Pure record processing (validation, coercion, fan-out)
// This layer sits between raw input lines (runtime) and typed rows (types); it performs no I/O.

mod builder;
pub mod coerce;
pub mod fanout;
pub mod timestamp;
pub mod validate;

pub use builder::{HitBuilder, SessionBuilder};
pub use coerce::coerce_int;
pub use fanout::fan_out;
pub use validate::{validate_line, validate_value};
