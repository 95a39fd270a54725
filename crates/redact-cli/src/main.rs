mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use redact_client::{ApiClient, SessionStore};
use redact_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();
    let config = Config::load()?;

    let client = ApiClient::new(&config.api.base_url, config.timeout())?;
    let store = SessionStore::new(None);

    match cli.command {
        cli::Commands::Auth(cmd) => commands::auth::handle(cmd, &client, &store).await,
        cli::Commands::Text { text, out, print } => {
            commands::redact::text(&client, &store, text, out, print).await
        }
        cli::Commands::File {
            path,
            columns,
            entities,
            list,
            out,
        } => commands::redact::file(&client, &store, path, columns, entities, list, out).await,
        cli::Commands::Config(cmd) => commands::config::handle(cmd, &config),
    }
}
