//! CLI argument parsing for cotejar

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cotejar")]
#[command(version)]
#[command(about = "Statistical comparison and batch driver for test-generation experiments", long_about = None)]
pub struct Cli {
    /// Enable debug tracing to stderr
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: AnalysisCommand,
}

#[derive(Subcommand, Debug)]
pub enum AnalysisCommand {
    /// Compare per-class coverage between two configurations
    Coverage {
        /// Result table of the baseline configuration
        #[arg(long, value_name = "CSV", default_value = "Default_Version.csv")]
        baseline: PathBuf,

        /// Result table of the treatment configuration
        #[arg(long, value_name = "CSV", default_value = "RL_Version.csv")]
        treatment: PathBuf,

        /// Output report path
        #[arg(short, long, value_name = "CSV", default_value = "Data.csv")]
        output: PathBuf,
    },

    /// Compare per-class total generation time between two configurations
    Time {
        /// Result table of the baseline configuration
        #[arg(long, value_name = "CSV", default_value = "Default_Version.csv")]
        baseline: PathBuf,

        /// Result table of the treatment configuration
        #[arg(long, value_name = "CSV", default_value = "RL_Version.csv")]
        treatment: PathBuf,

        /// Output report path
        #[arg(short, long, value_name = "CSV", default_value = "Data_time.csv")]
        output: PathBuf,
    },

    /// Run the external test-generation tool over all subject classes
    Run {
        /// Job specification mapping projects to target classes
        #[arg(long, value_name = "JSON", default_value = "subjects.json")]
        subjects: PathBuf,

        /// EvoSuite jar to invoke
        #[arg(
            long,
            value_name = "JAR",
            default_value = "evosuite-shaded-1.2.1-SNAPSHOT.jar"
        )]
        jar: PathBuf,

        /// Configuration identifier recorded in the result tables
        #[arg(long, value_name = "ID", default_value = "Default")]
        configuration_id: String,

        /// Timeline sampling interval in milliseconds
        #[arg(long, value_name = "MS", default_value = "10000")]
        timeline_interval: u64,

        /// Invocations per matching class
        #[arg(long, value_name = "N", default_value = "20")]
        repetitions: usize,
    },
}
