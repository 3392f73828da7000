use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "readiness",
    version,
    about = "Startup capital readiness scoring and recommendation CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score an intake file and print the full report
    Assess(AssessCommand),
    /// Print recommendations for an existing score breakdown (JSON)
    Recommend(RecommendCommand),
    /// Write template intake.toml and readiness.toml files
    Init(InitCommand),
}

#[derive(Args)]
pub struct AssessCommand {
    pub intake: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Use this file instead of readiness.toml next to the intake
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Exit with code 2 when the overall score is below this value (takes precedence over the degraded exit code 1)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub fail_under: Option<u32>,
}

#[derive(Args)]
pub struct RecommendCommand {
    pub breakdown: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct InitCommand {
    pub path: PathBuf,
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
