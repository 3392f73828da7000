mod cli;

use clap::Parser;
use readiness::enrichment::{
    DirectoryEcosystemProvider, DirectoryLocationResolver, HeuristicNarrativeAnalyzer,
};
use readiness::error::ReadinessError;
use readiness::types::intake::Intake;
use readiness::types::scoring::ScoreBreakdown;
use readiness::{config, generator, logging, report, scoring, Assessor};
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const DEGRADED: i32 = 1;
    pub const BELOW_THRESHOLD: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run(cli: cli::Cli) -> Result<i32, ReadinessError> {
    tracing::info!("readiness v{}", env!("CARGO_PKG_VERSION"));
    let quiet = cli.quiet;
    match cli.command {
        cli::Commands::Assess(cmd) => {
            let intake = Intake::load(&cmd.intake)?;
            let root = cmd
                .intake
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));

            let loaded = config::load_config(root, cmd.config.as_deref())?;
            if loaded.is_none() && !quiet {
                eprintln!("warning: no readiness.toml found in {}", root.display());
            }
            let cfg = loaded.unwrap_or_default();

            let location = DirectoryLocationResolver::new(cfg.places.clone());
            let ecosystem =
                DirectoryEcosystemProvider::new(cfg.places.clone(), cfg.search_radius_km());
            let narrative = HeuristicNarrativeAnalyzer;
            let assessment = Assessor::new(&location, &ecosystem, &narrative)
                .with_weights(cfg.weights()?)
                .with_ecosystem_fallback_score(cfg.ecosystem_fallback_score())
                .assess(&intake)?;

            let rendered = report::render(&assessment, output_format(&cmd.format))?;
            println!("{rendered}");

            if assessment.is_degraded() && !quiet {
                eprintln!("warning: assessment used fallback enrichment values");
            }

            if let Some(threshold) = cmd.fail_under {
                if assessment.overall_score < threshold {
                    eprintln!(
                        "overall score {} is below --fail-under {}",
                        assessment.overall_score, threshold
                    );
                    return Ok(exit_code::BELOW_THRESHOLD);
                }
            }

            if assessment.is_degraded() {
                Ok(exit_code::DEGRADED)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Recommend(cmd) => {
            if !cmd.breakdown.exists() {
                return Err(ReadinessError::PathNotFound(
                    cmd.breakdown.display().to_string(),
                ));
            }
            let content = std::fs::read_to_string(&cmd.breakdown)?;
            let breakdown: ScoreBreakdown = serde_json::from_str(&content)?;
            let recommendations = scoring::generate_recommendations(&breakdown);
            let rendered =
                report::render_recommendations(&recommendations, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Init(cmd) => {
            let written = generator::write_templates(&cmd.path, cmd.force)?;
            for path in written {
                println!("wrote {}", path.display());
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    logging::init_cli_logger(cli.verbose, cli.quiet);
    match run(cli) {
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
