//! webgrade - automated grading harness CLI
//!
//! ## Commands
//!
//! - `run`: grade a submission against the builtin rubric
//! - `rubric`: print the builtin rubric as JSON with its digest

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};

use webgrade_core::init_tracing;
use webgrade_harness::{builtin_rubric, rubric_digest, HarnessConfig, HarnessPipeline};

#[derive(Parser)]
#[command(name = "webgrade")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Automated grading harness for web calculator submissions", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a submission against the builtin rubric
    Run {
        /// Path to the markup artifact
        #[arg(long, default_value = "index.html")]
        markup: PathBuf,

        /// Path to the stylesheet artifact
        #[arg(long, default_value = "style.css")]
        stylesheet: PathBuf,

        /// Path to the script artifact
        #[arg(long, default_value = "script.js")]
        script: PathBuf,

        /// Side-channel payload copied into every report bundle
        #[arg(long, default_value = "custom.ih")]
        payload: PathBuf,

        /// Grading endpoint (WEBGRADE_ENDPOINT overrides the default)
        #[arg(long)]
        endpoint: Option<String>,

        /// Directory receiving XML and flat report files
        #[arg(long, default_value = ".")]
        report_dir: PathBuf,
    },

    /// Print the builtin rubric as JSON with its digest
    Rubric,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    init_tracing(cli.json, level);

    match cli.command {
        Commands::Run {
            markup,
            stylesheet,
            script,
            payload,
            endpoint,
            report_dir,
        } => {
            cmd_run(
                markup,
                stylesheet,
                script,
                payload,
                endpoint.as_deref(),
                report_dir,
            )
            .await
        }
        Commands::Rubric => cmd_rubric(),
    }
}

async fn cmd_run(
    markup: PathBuf,
    stylesheet: PathBuf,
    script: PathBuf,
    payload: PathBuf,
    endpoint: Option<&str>,
    report_dir: PathBuf,
) -> Result<()> {
    let mut config =
        HarnessConfig::new(markup, stylesheet, script, payload).with_report_dir(report_dir);
    if let Some(endpoint) = endpoint {
        config = config.with_endpoint(endpoint);
    }

    let result = HarnessPipeline::run(config, builtin_rubric()).await;

    info!(
        passed = result.passed_count(),
        failed = result.failed_count(),
        errored = result.errored_count(),
        "run settled"
    );
    println!(
        "{} passed, {} failed, {} errored in {} ms",
        result.passed_count(),
        result.failed_count(),
        result.errored_count(),
        result.duration_ms
    );

    // Per-entry errors were already logged; the harness has no
    // exit-code contract, so a settled run exits cleanly.
    Ok(())
}

fn cmd_rubric() -> Result<()> {
    let rubric = builtin_rubric();
    let json = serde_json::to_string_pretty(&rubric).context("Failed to serialise rubric")?;
    println!("{json}");
    println!("digest: {}", rubric_digest(&rubric));
    Ok(())
}
