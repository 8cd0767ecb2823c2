use serde::Serialize;

use crate::outcome::{Rejection, SchemaViolation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Warn,
}

/// Per-line diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DiagnosticEvent {
    BadJson { line: usize, err: String },
    SchemaFail { line: usize, reason: SchemaViolation },
}

/// Structured diagnostic record.
/// Serializes as `{"level":..,"event":..,"line":..,<detail>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub level: Level,
    #[serde(flatten)]
    pub event: DiagnosticEvent,
}

impl Diagnostic {
    /// Build the warning for a rejected line
    pub fn rejected(line: usize, rejection: &Rejection) -> Self {
        let event = match rejection {
            Rejection::BadJson(err) => DiagnosticEvent::BadJson {
                line,
                err: err.clone(),
            },
            Rejection::Schema(reason) => DiagnosticEvent::SchemaFail {
                line,
                reason: *reason,
            },
        };

        Self {
            level: Level::Warn,
            event,
        }
    }

    pub fn line(&self) -> usize {
        match &self.event {
            DiagnosticEvent::BadJson { line, .. } | DiagnosticEvent::SchemaFail { line, .. } => {
                *line
            }
        }
    }
}
