use crate::types::LogLevel;
use tracing_subscriber::EnvFilter;

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` directives take part in filtering; `level` sets the default.
/// Per-line diagnostics do not go through here.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::from_default_env().add_directive(level.as_tracing().into());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
