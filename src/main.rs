use std::path::PathBuf;

use clap::Parser;
use phrase_consolidate::config::DEFAULT_MAX_LINE_LENGTH;
use phrase_consolidate::report::{RunReport, write_report};
use phrase_consolidate::{ConsolidateConfig, ConsolidateError, Result, consolidate_files};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging(&cli).and_then(|()| run(cli)) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    info!("consolidating direct and indirect rule tables");
    let config = ConsolidateConfig::new(cli.hierarchical, cli.log_prob)
        .with_max_line_length(cli.max_line_length);
    if config.hierarchical {
        info!("processing hierarchical rules");
    }
    if config.log_prob {
        info!("using log-probabilities");
    }

    let summary = consolidate_files(&cli.direct, &cli.indirect, &cli.output, &config)?;

    if let Some(path) = &cli.report {
        let report = RunReport {
            direct: cli.direct.clone(),
            indirect: cli.indirect.clone(),
            output: cli.output.clone(),
            summary,
        };
        write_report(path, &report)?;
        info!(report = %path.display(), "run report written");
    }
    Ok(())
}

fn init_logging(cli: &Cli) -> Result<()> {
    let default_level = if cli.quiet {
        "warn"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| ConsolidateError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Consolidate direct and indirect phrase tables into a single table."
)]
struct Cli {
    /// Direct phrase table (target, source, scores).
    direct: PathBuf,

    /// Indirect phrase table, line-aligned with the direct table.
    indirect: PathBuf,

    /// Consolidated phrase table to write.
    output: PathBuf,

    /// Treat entries as hierarchical rules with labelled phrases, alignment
    /// and direct scores in separate fields.
    #[arg(long = "Hierarchical")]
    hierarchical: bool,

    /// Scores are log-probabilities; the phrase count feature becomes 1.
    #[arg(long = "LogProb")]
    log_prob: bool,

    /// Reject input lines of this many bytes or more.
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_LENGTH)]
    max_line_length: usize,

    /// Write a JSON summary of the run to this path.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Only log warnings and errors.
    #[arg(long, short, conflicts_with = "verbose")]
    quiet: bool,

    /// Log debug detail.
    #[arg(long, short)]
    verbose: bool,
}
