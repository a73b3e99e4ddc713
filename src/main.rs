mod analyze;
mod cli;
mod config;
mod error;
mod logging;
mod report;
mod scan;
mod types;

use crate::error::{Result, TrustError};
use crate::types::config::{ReportFormatSetting, TrustConfig};
use crate::types::report::TrustReport;
use crate::types::signals::SignalSet;
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const LOW_TRUST: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(flag: Option<cli::ReportFormat>, cfg: &TrustConfig) -> report::OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => match cfg.report.format {
            ReportFormatSetting::Json => report::OutputFormat::Json,
            ReportFormatSetting::Md => report::OutputFormat::Md,
        },
    }
}

fn score_exit_code(report: &TrustReport, cfg: &TrustConfig) -> i32 {
    match cfg.scoring.fail_under {
        Some(threshold) if report.trust_score.total_score < threshold => {
            eprintln!(
                "warning: trust score {:.2} is below fail_under {:.2}",
                report.trust_score.total_score, threshold
            );
            exit_code::LOW_TRUST
        }
        _ => exit_code::SUCCESS,
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    let mut cfg = config::load_config(cli.config.as_deref())?;

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            if let Some(timeout_secs) = cmd.timeout_secs {
                if timeout_secs == 0 {
                    return Err(TrustError::ConfigParse(
                        "--timeout-secs must be greater than 0".to_string(),
                    ));
                }
                cfg.http.timeout_secs = timeout_secs;
            }
            let url = scan::http::normalize_url(&cmd.url)?;

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            let observations = runtime.block_on(scan::collect(&url, &cfg))?;

            let signals = analyze::mapping::map_signals(&observations);
            let trust_score = analyze::score_signals(&signals)
                .with_diversity(observations.review_diversity.clone());
            let trust_report =
                TrustReport::new(url.as_str(), trust_score).with_observations(observations);

            let rendered = report::render(&trust_report, output_format(cmd.format, &cfg))?;
            println!("{rendered}");
            Ok(score_exit_code(&trust_report, &cfg))
        }
        cli::Commands::Score(cmd) => {
            let signals = SignalSet::from_file(&cmd.signals)?;
            let trust_report =
                TrustReport::new(cmd.signals.display().to_string(), analyze::score_signals(&signals));

            let rendered = report::render(&trust_report, output_format(cmd.format, &cfg))?;
            println!("{rendered}");
            Ok(score_exit_code(&trust_report, &cfg))
        }
        cli::Commands::Diversity(cmd) => {
            if !cmd.html.exists() {
                return Err(TrustError::PathNotFound(cmd.html.display().to_string()));
            }
            let html = std::fs::read_to_string(&cmd.html)?;
            let links = scan::html::extract_links(&html);
            let diversity =
                analyze::diversity::analyze_review_diversity(&links.hrefs, &links.script_srcs);

            let rendered =
                report::render_diversity(&diversity, output_format(cmd.format, &cfg))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
