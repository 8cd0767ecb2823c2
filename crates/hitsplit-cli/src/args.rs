use crate::types::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hitsplit")]
#[command(
    about = "Split session records into visits.json and hits.json",
    long_about = "Split newline-delimited session records into visits.json and hits.json.\n\n\
                  INPUT is a file path, a path ending in .gz for gzip input, or - for stdin.\n\
                  Rejected lines are reported as JSON on stderr and in <input>_error.log."
)]
#[command(version)]
pub struct Cli {
    /// Session file to split (`-` for stdin, `.gz` for gzip)
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// TOML config file (defaults to $HITSPLIT_CONFIG when set)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for visits.json and hits.json (overrides config)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}
