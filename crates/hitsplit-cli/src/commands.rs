use super::args::Cli;
use anyhow::{Context, Result};
use hitsplit_runtime::{InputSource, SplitConfig, SplitJob};

pub fn run(cli: Cli) -> Result<()> {
    let mut config =
        SplitConfig::resolve(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(output_dir) = cli.output_dir {
        config = config.with_output_dir(output_dir);
    }

    let job = SplitJob::new(InputSource::from_arg(&cli.input), config);
    let stats = job
        .run()
        .with_context(|| format!("failed to split {}", job.source()))?;

    // The summary is the status line; diagnostics stay on stderr
    println!("{}", stats);
    Ok(())
}
