use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use palisade::age::rdap::RdapAgeProvider;
use palisade::age::table::StaticAgeTable;
use palisade::age::traits::DomainAgeProvider;
use palisade::config::{AgeBackend, Config};
use palisade::scoring::scorer::RiskScorer;

/// Palisade: URL reputation scoring with a user feedback loop.
///
/// Classifies candidate URLs as ALLOW, WARN, or BLOCK from a set of
/// additive phishing heuristics. Domains the user has explicitly trusted
/// override every future verdict for that domain.
#[derive(Parser)]
#[command(name = "palisade", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single URL
    Score {
        /// The URL to classify
        url: String,

        /// Pre-seed the trusted list with this URL's domain (repeatable)
        #[arg(long)]
        trust: Vec<String>,

        /// Emit the result as JSON instead of the terminal view
        #[arg(long)]
        json: bool,
    },

    /// Score URLs from a file, one per line
    Batch {
        /// Path to a file of URLs (blank lines and # comments are skipped)
        file: String,

        /// Pre-seed the trusted list with this URL's domain (repeatable)
        #[arg(long)]
        trust: Vec<String>,

        /// Only show results at or above this score
        #[arg(long, default_value = "0")]
        min_score: u32,

        /// Emit results as JSON instead of the terminal table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("palisade=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Score { url, trust, json } => {
            let scorer = build_scorer(&config)?;
            for trusted_url in &trust {
                scorer.add_trusted(trusted_url);
            }

            let result = scorer.score(&url).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                palisade::output::terminal::display_result(&url, &result);
            }
        }

        Commands::Batch {
            file,
            trust,
            min_score,
            json,
        } => {
            let scorer = build_scorer(&config)?;
            for trusted_url in &trust {
                scorer.add_trusted(trusted_url);
            }

            let contents =
                std::fs::read_to_string(&file).with_context(|| format!("Failed to read {file}"))?;
            let urls: Vec<&str> = contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .collect();

            info!(count = urls.len(), "Scoring batch");

            let mut results = Vec::with_capacity(urls.len());
            for url in urls {
                let result = scorer.score(url).await;
                if result.score >= min_score {
                    results.push((url.to_string(), result));
                }
            }

            if json {
                let payload: Vec<serde_json::Value> = results
                    .iter()
                    .map(|(url, result)| {
                        serde_json::json!({
                            "url": url,
                            "verdict": result.verdict,
                            "score": result.score,
                            "reasons": &result.reasons,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                palisade::output::terminal::display_batch(&results);
            }
        }
    }

    Ok(())
}

/// Create a scorer wired to the configured age backend.
fn build_scorer(config: &Config) -> Result<RiskScorer> {
    let provider: Box<dyn DomainAgeProvider> = match config.age_backend {
        AgeBackend::Static => {
            info!("Using static age table");
            Box::new(StaticAgeTable::new())
        }
        AgeBackend::Rdap => {
            info!("Using RDAP age provider");
            Box::new(RdapAgeProvider::new(&config.rdap_url, config.rdap_timeout)?)
        }
    };
    Ok(RiskScorer::new(provider))
}
