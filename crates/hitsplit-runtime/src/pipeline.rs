use crate::diagnostics::DiagnosticsSink;
use crate::output::RowWriter;
use crate::source::RawLines;
use crate::{Error, Result};
use hitsplit_engine::{fan_out, validate_line};
use hitsplit_types::{Diagnostic, RunStats, Validation};
use std::io::{BufRead, Write};

/// Split a stream of session lines into visit and hit rows in a single forward pass.
///
/// Blank lines are skipped without counting. Rejected lines are reported to `sink`,
/// counted as bad, and never abort the run. Only I/O failures on the source,
/// the outputs, or the sink are returned as errors.
pub fn split_stream<R, V, H, D>(
    src: R,
    visits: &mut RowWriter<V>,
    hits: &mut RowWriter<H>,
    sink: &mut D,
) -> Result<RunStats>
where
    R: BufRead,
    V: Write,
    H: Write,
    D: DiagnosticsSink + ?Sized,
{
    let mut stats = RunStats::default();

    for item in RawLines::new(src) {
        let (line_no, raw) = item.map_err(|e| Error::io("read input", e))?;

        match validate_line(&raw) {
            Validation::Skip => continue,
            Validation::Invalid(rejection) => {
                tracing::debug!(line = line_no, ?rejection, "rejected line");
                sink.record(&Diagnostic::rejected(line_no, &rejection))?;
                stats.record_bad();
            }
            Validation::Valid(record) => {
                let out = fan_out(record);
                visits.write_row(&out.visit)?;
                for hit in &out.hits {
                    hits.write_row(hit)?;
                }
                stats.record_visit(out.hits.len());
            }
        }
    }

    tracing::debug!(
        visits = stats.visits,
        hits = stats.hits,
        bad = stats.bad,
        "end of input"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;
    use hitsplit_types::DiagnosticEvent;
    use std::io::Cursor;

    struct Run {
        stats: RunStats,
        visits: String,
        hits: String,
        sink: MemorySink,
    }

    fn run(input: &str) -> Run {
        let mut visits = RowWriter::new(Vec::new(), "visits");
        let mut hits = RowWriter::new(Vec::new(), "hits");
        let mut sink = MemorySink::new();

        let stats = split_stream(
            Cursor::new(input.as_bytes().to_vec()),
            &mut visits,
            &mut hits,
            &mut sink,
        )
        .unwrap();

        Run {
            stats,
            visits: String::from_utf8(visits.into_inner()).unwrap(),
            hits: String::from_utf8(hits.into_inner()).unwrap(),
            sink,
        }
    }

    const GOOD: &str = r#"{"fullVisitorId":"v1","visitId":"100","visitStartTime":"1600000000","visitNumber":"1","hits":[{"hitNumber":"1","time":"0","type":"PAGE"}]}"#;

    #[test]
    fn test_reference_scenario() {
        let out = run(GOOD);

        assert_eq!(out.stats, RunStats { visits: 1, hits: 1, bad: 0 });
        assert_eq!(
            out.visits,
            "{\"full_visitor_id\":\"v1\",\"visit_id\":\"100\",\"visit_number\":1,\"visit_start_time\":\"2020-09-13T12:26:40Z\",\"browser\":null,\"country\":null}\n"
        );
        assert_eq!(
            out.hits,
            "{\"full_visitor_id\":\"v1\",\"visit_id\":\"100\",\"hit_number\":1,\"hit_type\":\"PAGE\",\"hit_timestamp\":\"2020-09-13T12:26:40.000Z\",\"page_path\":null,\"page_title\":null,\"hostname\":null}\n"
        );
        assert!(out.sink.records.is_empty());
    }

    #[test]
    fn test_empty_and_blank_input() {
        for input in ["", "\n\n   \n\t\n"] {
            let out = run(input);
            assert_eq!(out.stats, RunStats::default());
            assert_eq!(out.visits, "");
            assert_eq!(out.hits, "");
            assert!(out.sink.records.is_empty());
        }
    }

    #[test]
    fn test_failures_are_counted_and_processing_continues() {
        let input = format!(
            "{}\n\n{{broken\n{}\n{}\n",
            r#"{"fullVisitorId":"v0","visitId":"1","visitStartTime":"0","hits":[]}"#,
            GOOD,
            r#"{"fullVisitorId":"v2","visitId":"2","visitStartTime":"0","visitNumber":"1","hits":[{"hitNumber":"2","time":"0","type":42}]}"#,
        );
        let out = run(&input);

        assert_eq!(out.stats, RunStats { visits: 1, hits: 1, bad: 3 });
        assert_eq!(out.visits.lines().count(), 1);
        assert_eq!(out.hits.lines().count(), 1);
        assert_eq!(out.sink.lines(), vec![1, 3, 5]);

        match &out.sink.records[0].event {
            DiagnosticEvent::SchemaFail { reason, .. } => {
                assert_eq!(reason.to_string(), "visitNumber_missing")
            }
            other => panic!("unexpected diagnostic {:?}", other),
        }
        match &out.sink.records[1].event {
            DiagnosticEvent::BadJson { err, .. } => assert!(!err.is_empty()),
            other => panic!("unexpected diagnostic {:?}", other),
        }
        match &out.sink.records[2].event {
            DiagnosticEvent::SchemaFail { reason, .. } => {
                assert_eq!(reason.to_string(), "hit_1_type_not_str")
            }
            other => panic!("unexpected diagnostic {:?}", other),
        }
    }

    #[test]
    fn test_hit_groups_follow_their_visit_in_order() {
        let input = [
            r#"{"fullVisitorId":"a","visitId":1,"visitStartTime":0,"visitNumber":1,"hits":[{"hitNumber":1,"time":0,"type":"PAGE"},{"hitNumber":2,"time":10,"type":"PAGE"}]}"#,
            r#"{"fullVisitorId":"b","visitId":2,"visitStartTime":0,"visitNumber":1,"hits":[]}"#,
            r#"{"fullVisitorId":"c","visitId":3,"visitStartTime":0,"visitNumber":1,"hits":[{"hitNumber":9,"time":0,"type":"EVENT"}]}"#,
        ]
        .join("\n");
        let out = run(&input);

        assert_eq!(out.stats, RunStats { visits: 3, hits: 3, bad: 0 });

        let visit_keys: Vec<String> = out
            .visits
            .lines()
            .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["full_visitor_id"].to_string())
            .collect();
        assert_eq!(visit_keys, vec!["\"a\"", "\"b\"", "\"c\""]);

        let hit_keys: Vec<(String, i64)> = out
            .hits
            .lines()
            .map(|l| {
                let v: serde_json::Value = serde_json::from_str(l).unwrap();
                (
                    v["visit_id"].as_str().unwrap().to_string(),
                    v["hit_number"].as_i64().unwrap(),
                )
            })
            .collect();
        assert_eq!(
            hit_keys,
            vec![
                ("1".to_string(), 1),
                ("1".to_string(), 2),
                ("3".to_string(), 9)
            ]
        );
    }

    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk gone"))
        }
    }

    #[test]
    fn test_source_read_error_is_fatal() {
        let mut visits = RowWriter::new(Vec::new(), "visits");
        let mut hits = RowWriter::new(Vec::new(), "hits");
        let mut sink = MemorySink::new();

        let result = split_stream(
            std::io::BufReader::new(FailingReader),
            &mut visits,
            &mut hits,
            &mut sink,
        );
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
