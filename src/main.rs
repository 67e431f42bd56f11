use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

use wordcount::config::{JobConfig, DEFAULT_FILE_PATTERN};
use wordcount::run_job;

/// Count word occurrences across a directory of text files
#[derive(Parser)]
#[command(name = "wordcount", version)]
struct Cli {
    /// Directory holding the input text files
    input_dir: PathBuf,

    /// Directory to (re)create for part-00000 and _SUCCESS
    output_dir: PathBuf,

    /// Glob for input file names inside INPUT_DIR
    #[arg(short, long, default_value = DEFAULT_FILE_PATTERN)]
    pattern: String,

    /// Also print the final counts to stdout
    #[arg(long)]
    print: bool,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2)
        .init();

    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let config = JobConfig::new(&cli.input_dir, &cli.output_dir).with_file_pattern(cli.pattern);
    debug!("running job with {:?}", config);

    let summary = run_job(&config).await.with_context(|| {
        format!(
            "word count from {} to {} failed",
            config.input_dir.display(),
            config.output_dir.display()
        )
    })?;

    if cli.print {
        for aggregate in &summary.aggregates {
            println!("{}\t{}", aggregate.token, aggregate.total);
        }
    }

    Ok(())
}
