//! Command implementations for the Velora CLI.
//!
//! Every command talks to the analysis backend through the same dispatcher
//! the dashboard uses, so answers are cached per process and errors end up
//! as chat messages before they reach the terminal.

use clap::Subcommand;
use velora_cache::QueryCache;
use velora_chat::Dispatcher;
use velora_ocean::client::HttpBackend;
use velora_ocean::ApiConfig;

pub mod ask;
pub mod chat;
pub mod export;

#[derive(Subcommand)]
pub enum Command {
    /// Ask a single question and print the answer
    Ask {
        /// The question, e.g. "Show temperature in Indian Ocean from 2020 to 2022"
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// Write the merged historical + forecast series to this CSV file
        #[arg(long)]
        csv: Option<String>,
    },

    /// Interactive session; type /quit or send EOF to leave
    Chat,

    /// Probe the backend and report whether it is reachable
    Health,
}

pub async fn run(command: Command, config: ApiConfig, cache_capacity: usize) -> anyhow::Result<()> {
    log::info!("Analysis backend: {}", config.base_url());
    let backend = HttpBackend::new(config);
    let dispatcher = Dispatcher::new(QueryCache::new(cache_capacity));

    match command {
        Command::Ask { question, csv } => {
            ask::run_ask(&backend, dispatcher, &question.join(" "), csv.as_deref()).await
        }
        Command::Chat => chat::run_chat(&backend, dispatcher).await,
        Command::Health => ask::run_health(&backend).await,
    }
}
