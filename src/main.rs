mod client;
mod config;
mod error;
mod models;
mod render;
mod repl;

use clap::Parser;
use tokio::io::BufReader;
use tracing::{info, Level};

use client::EmbeddingClient;
use config::Config;
use repl::Repl;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // stdout belongs to the session, logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(if config.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Using model {} at {} (timeout: {:?})",
        config.model,
        config.url,
        config.timeout()
    );

    let client = EmbeddingClient::new(&config)?;
    let repl = Repl::new(client, &config);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl.run(stdin, &mut stdout).await?;

    Ok(())
}
