use crate::config::SplitConfig;
use crate::diagnostics::{DiagnosticsSink, JsonLinesSink, TeeSink};
use crate::output::OutputFiles;
use crate::pipeline::split_stream;
use crate::source::InputSource;
use crate::{Error, Result};
use hitsplit_types::RunStats;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// One end-to-end split of a single input source.
///
/// Owns every resource it opens (diagnostics log, input, both outputs);
/// each is released when the run returns, on success or error.
pub struct SplitJob {
    source: InputSource,
    config: SplitConfig,
}

impl SplitJob {
    pub fn new(source: InputSource, config: SplitConfig) -> Self {
        Self { source, config }
    }

    pub fn source(&self) -> &InputSource {
        &self.source
    }

    pub fn error_log_path(&self) -> PathBuf {
        self.config.log_dir.join(self.source.error_log_name())
    }

    /// Run with diagnostics going to stderr and the persistent error log
    pub fn run(&self) -> Result<RunStats> {
        let log_path = self.error_log_path();
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::io_path("create directory", parent, e))?;
        }
        let log_file =
            File::create(&log_path).map_err(|e| Error::io_path("create", &log_path, e))?;

        let mut sink = TeeSink::new(
            JsonLinesSink::new(io::stderr(), "stderr"),
            JsonLinesSink::new(BufWriter::new(log_file), log_path.display().to_string()),
        );

        self.run_with_sink(&mut sink)
    }

    /// Run with a caller-supplied diagnostics sink
    pub fn run_with_sink<D: DiagnosticsSink + ?Sized>(&self, sink: &mut D) -> Result<RunStats> {
        tracing::info!(source = %self.source, "starting split");

        let reader = self.source.open()?;
        let mut outputs = OutputFiles::create(&self.config.output_dir)?;

        let result = split_stream(reader, &mut outputs.visits, &mut outputs.hits, sink);

        // Flush what was written even when the pass failed part-way
        let flushed = outputs.finish().and(sink.flush());
        let stats = result?;
        flushed?;

        tracing::info!(
            visits = stats.visits,
            hits = stats.hits,
            bad = stats.bad,
            "split finished"
        );
        Ok(stats)
    }
}
