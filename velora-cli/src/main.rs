//! Velora CLI - ask the ocean analysis backend questions from a terminal.

use clap::Parser;
use velora_ocean::config::DEFAULT_API_URL;
use velora_ocean::ApiConfig;

#[derive(Parser)]
#[command(name = "velora-cli", version, about = "Velora AI ocean data assistant")]
struct Cli {
    /// Base URL of the analysis backend
    #[arg(long, env = "VELORA_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Maximum number of answers kept in the query cache
    #[arg(long, default_value_t = velora_cache::DEFAULT_CAPACITY)]
    cache_capacity: usize,

    #[command(subcommand)]
    command: velora_cmd::Command,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    velora_cmd::run(cli.command, ApiConfig::new(&cli.api_url), cli.cache_capacity).await
}
