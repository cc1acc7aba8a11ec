// Billstance - Congress bill stance classification service
// Main entry point

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use billstance::config::load_config;
use billstance::congress::CongressClient;
use billstance::gemini::GeminiClient;
use billstance::model::StancePipeline;
use billstance::server::{self, AppState, ServerConfig};
use billstance::training::run_training;

#[derive(Parser)]
#[command(name = "billstance", about = "Fetch, classify and summarize Congress bills")]
struct Cli {
    /// Path to the configuration file (default: ~/.billstance/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the labeled bill set, train the stance classifier and save the artifact
    Train {
        /// Where to write the trained pipeline (overrides config)
        #[arg(long)]
        model: Option<PathBuf>,
    },
    /// Serve the bill stance HTTP API
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        bind: Option<String>,
        /// Path to the trained pipeline (overrides config)
        #[arg(long)]
        model: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Train { model } => {
            let client = CongressClient::new(config.congress_api_key.clone())?;
            let model_path = model.unwrap_or_else(|| config.model_path.clone());

            let report = run_training(&client, &model_path).await?;
            println!("{}", report);
        }
        Command::Serve { bind, model } => {
            let model_path = model.unwrap_or_else(|| config.model_path.clone());
            let pipeline = StancePipeline::load(&model_path).with_context(|| {
                format!(
                    "Failed to load trained pipeline from {} (run `billstance train` first)",
                    model_path.display()
                )
            })?;

            let gemini_api_key = config
                .gemini_api_key
                .clone()
                .context("No Gemini API key configured; [gemini_api] api_key is required to serve")?;

            let congress = CongressClient::new(config.congress_api_key.clone())?;
            let gemini = GeminiClient::new(gemini_api_key)?;

            let state = AppState::new(congress, gemini, Arc::new(pipeline));
            let server_config = ServerConfig {
                bind_address: bind.unwrap_or_else(|| config.bind_address.clone()),
            };

            server::serve(state, server_config).await?;
        }
    }

    Ok(())
}
