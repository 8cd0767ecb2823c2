use crate::{Error, Result};
use hitsplit_types::Diagnostic;
use std::io::Write;

/// Destination for per-line diagnostics.
///
/// Constructed once per run and handed to the driver, so tests can substitute
/// a `MemorySink` and inspect what was reported.
pub trait DiagnosticsSink {
    fn record(&mut self, diagnostic: &Diagnostic) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes each diagnostic as one compact JSON object per line
pub struct JsonLinesSink<W: Write> {
    writer: W,
    label: String,
}

impl<W: Write> JsonLinesSink<W> {
    /// `label` names the destination in I/O error messages
    pub fn new(writer: W, label: impl Into<String>) -> Self {
        Self {
            writer,
            label: label.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticsSink for JsonLinesSink<W> {
    fn record(&mut self, diagnostic: &Diagnostic) -> Result<()> {
        serde_json::to_writer(&mut self.writer, diagnostic)?;
        self.writer
            .write_all(b"\n")
            .map_err(|e| Error::io(format!("write {}", self.label), e))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::io(format!("flush {}", self.label), e))
    }
}

/// Forwards every diagnostic to two sinks
pub struct TeeSink<A, B> {
    first: A,
    second: B,
}

impl<A: DiagnosticsSink, B: DiagnosticsSink> TeeSink<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: DiagnosticsSink, B: DiagnosticsSink> DiagnosticsSink for TeeSink<A, B> {
    fn record(&mut self, diagnostic: &Diagnostic) -> Result<()> {
        self.first.record(diagnostic)?;
        self.second.record(diagnostic)
    }

    fn flush(&mut self) -> Result<()> {
        self.first.flush()?;
        self.second.flush()
    }
}

/// In-memory sink
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<Diagnostic>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<usize> {
        self.records.iter().map(Diagnostic::line).collect()
    }
}

impl DiagnosticsSink for MemorySink {
    fn record(&mut self, diagnostic: &Diagnostic) -> Result<()> {
        self.records.push(diagnostic.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hitsplit_types::{Rejection, SchemaViolation, TopField};

    fn schema_fail(line: usize) -> Diagnostic {
        Diagnostic::rejected(
            line,
            &Rejection::Schema(SchemaViolation::NotList(TopField::Hits)),
        )
    }

    #[test]
    fn test_json_lines_sink_writes_compact_lines() {
        let mut sink = JsonLinesSink::new(Vec::new(), "buffer");
        sink.record(&schema_fail(1)).unwrap();
        sink.record(&Diagnostic::rejected(2, &Rejection::BadJson("oops".to_string())))
            .unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            text,
            concat!(
                r#"{"level":"WARN","event":"schema_fail","line":1,"reason":"hits_not_list"}"#,
                "\n",
                r#"{"level":"WARN","event":"bad_json","line":2,"err":"oops"}"#,
                "\n",
            )
        );
    }

    #[test]
    fn test_tee_sink_reaches_both_destinations() {
        let mut tee = TeeSink::new(MemorySink::new(), MemorySink::new());
        tee.record(&schema_fail(4)).unwrap();
        tee.record(&schema_fail(9)).unwrap();
        tee.flush().unwrap();

        assert_eq!(tee.first.lines(), vec![4, 9]);
        assert_eq!(tee.second.lines(), vec![4, 9]);
    }
}
