pub mod config;
pub mod diagnostics;
pub mod error;
pub mod job;
pub mod output;
pub mod pipeline;
pub mod source;

pub use config::SplitConfig;
pub use diagnostics::{DiagnosticsSink, JsonLinesSink, MemorySink, TeeSink};
pub use error::{Error, Result};
pub use job::SplitJob;
pub use output::{HITS_FILE, OutputFiles, RowWriter, VISITS_FILE};
pub use pipeline::split_stream;
pub use source::{InputSource, RawLines};
