use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "trustscope",
    version,
    about = "Website trust score estimation CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file (defaults to ./trustscope.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe a live website and score it
    Analyze(AnalyzeCommand),
    /// Score a signals file without touching the network
    Score(ScoreCommand),
    /// Measure review-platform diversity of a saved HTML page
    Diversity(DiversityCommand),
}

#[derive(Args)]
pub struct AnalyzeCommand {
    pub url: String,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Per-request timeout, overriding http.timeout_secs
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// TOML or JSON file with [security], [reviews], [business], [content]
    /// and [transparency] tables
    pub signals: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct DiversityCommand {
    pub html: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
