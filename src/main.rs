use anyhow::Result;
use clap::Parser;
use cotejar::cli::{AnalysisCommand, Cli};
use cotejar::runner::{run_batch, EvosuiteRunner};
use cotejar::subjects::Subjects;
use cotejar::{coverage, timing};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    match args.command {
        AnalysisCommand::Coverage {
            baseline,
            treatment,
            output,
        } => {
            coverage::run(&baseline, &treatment, &output)?;
        }
        AnalysisCommand::Time {
            baseline,
            treatment,
            output,
        } => {
            timing::run(&baseline, &treatment, &output)?;
        }
        AnalysisCommand::Run {
            subjects,
            jar,
            configuration_id,
            timeline_interval,
            repetitions,
        } => {
            let subjects = Subjects::from_file(&subjects)?;
            let runner = EvosuiteRunner {
                jar,
                configuration_id,
                timeline_interval,
            };
            run_batch(&subjects, &runner, repetitions)?;
        }
    }

    Ok(())
}
