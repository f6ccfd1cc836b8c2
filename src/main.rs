use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "regresskit",
    about = "Fixture-driven regression harness with JSON/HTML run reports",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run regression suites and write JSON/HTML report artifacts
    Run {
        /// Directory for report artifacts
        #[arg(long, default_value = "reports")]
        output_dir: String,

        /// Suite to run (repeatable); all suites when omitted
        #[arg(long)]
        suite: Vec<String>,

        /// JSON output for machine parsing
        #[arg(long)]
        json: bool,
    },

    /// List the available regression suites
    List,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            output_dir,
            suite,
            json,
        } => {
            let suites = if suite.is_empty() {
                regresskit::suites::all()
            } else {
                let mut selected = Vec::with_capacity(suite.len());
                for name in &suite {
                    match regresskit::suites::find(name) {
                        Some(s) => selected.push(s),
                        None => anyhow::bail!(
                            "unknown suite '{name}' (available: {})",
                            regresskit::suites::SUITE_NAMES.join(", ")
                        ),
                    }
                }
                selected
            };

            tracing::info!(suites = suites.len(), %output_dir, "Running regression suites");
            let report = regresskit::run_suites(&suites, Path::new(&output_dir))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("\nRegressKit Regression Run");
                println!("{:<40} | {:<8} | Duration", "Test", "Status");
                println!("{:-<40}-|-{:-<8}-|-{:-<12}", "", "", "");
                for result in &report.results {
                    let status = if result.passed { "PASS" } else { "FAIL" };
                    println!(
                        "{:<40} | {:<8} | {:.3}s",
                        result.test_name, status, result.duration
                    );
                    if !result.error.is_empty() {
                        println!("{:<40} | {:<8} |   -> {}", "", "", result.error);
                    }
                }
                let summary = &report.summary;
                println!(
                    "\n{} total, {} passed, {} failed ({:.1}% pass rate, {:.2}s)\n",
                    summary.total_tests,
                    summary.passed,
                    summary.failed,
                    summary.pass_rate,
                    summary.total_duration
                );
            }

            if report.summary.failed > 0 {
                std::process::exit(1);
            }
        }
        Commands::List => {
            for name in regresskit::suites::SUITE_NAMES {
                println!("{name}");
            }
        }
    }

    Ok(())
}
