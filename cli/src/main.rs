//! CLI for the SCM navigator.
//!
//! This tool lists the repositories of a team or organization, filters them
//! by pattern and prints the build source proposed for each match.

use clap::Parser;
use scm_navigator::{
    CatalogSource, NavigatorConfig, RunSummary, Runner, RunnerConfig, RunnerError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// SCM Navigator - Discover repositories and propose one build source per match.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a navigator.toml file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Team or organization to discover (overrides the config file).
    #[arg(long)]
    owner: Option<String>,

    /// Full-match regular expression for repository names (overrides the config file).
    #[arg(long)]
    pattern: Option<String>,

    /// Read repositories from a catalog.toml file instead of GitHub.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN")]
    token: Option<String>,

    /// GitHub API base URL (overrides the config file).
    #[arg(long)]
    api_url: Option<String>,

    /// Print the run summary as JSON.
    #[arg(long)]
    json: bool,
}

/// Errors detected before a run starts.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("no owner given; pass --owner or --config")]
    MissingOwner,

    #[error("no catalog given; pass --catalog or set GITHUB_TOKEN")]
    MissingCatalog,

    #[error(transparent)]
    Config(#[from] scm_navigator::ConfigError),

    #[error(transparent)]
    Runner(#[from] RunnerError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();
    let json = args.json;

    // Run the main logic
    match run(args).await {
        Ok(summary) => match print_summary(&summary, json) {
            Ok(()) => ExitCode::from(0),
            Err(e) => {
                error!(error = %e, "Failed to print summary");
                ExitCode::from(2)
            }
        },
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so `--json` output stays machine readable. Filtering
/// follows `RUST_LOG`, defaulting to "info".
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, CliError> {
    let catalog = match (args.catalog, args.token) {
        (Some(path), _) => CatalogSource::File(path),
        (None, Some(token)) => CatalogSource::GitHub { token },
        (None, None) => return Err(CliError::MissingCatalog),
    };

    let mut config = match (args.config, args.owner) {
        (Some(path), owner) => {
            let mut navigator = NavigatorConfig::load(&path)?;
            if let Some(owner) = owner {
                navigator.owner = owner;
                navigator.validate(&path)?;
            }
            RunnerConfig::from_navigator_config(navigator, catalog)
        }
        (None, Some(owner)) => RunnerConfig::new(owner, catalog),
        (None, None) => return Err(CliError::MissingOwner),
    };

    if let Some(pattern) = args.pattern {
        config = config.with_pattern(pattern);
    }
    if let Some(api_url) = args.api_url {
        config = config.with_api_url(api_url);
    }

    let runner = Runner::new(config)?;
    Ok(runner.run().await?)
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    println!("\nSummary:");
    println!("  Owner: {}", summary.owner);
    println!(
        "  Pattern: {}",
        summary.pattern.as_deref().unwrap_or("(all repositories)")
    );
    println!("  Repositories scanned: {}", summary.discovery.scanned);
    println!("  Repositories matched: {}", summary.discovery.matched);

    for project in &summary.record.projects {
        for source in &project.sources {
            println!(
                "    {} ({}, pull requests: {})",
                source.full_name,
                source.repository_type.as_str(),
                if source.supports_pull_requests { "yes" } else { "no" }
            );
        }
    }

    Ok(())
}
