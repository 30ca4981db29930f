//! guestbook binary: run the HTTP server or a maintenance command. Config from env.

use anyhow::Result;
use clap::Parser;
use guestbook_core::init_tracing;
use guestbook_server::{open_repository, run_server, Cli, Commands, ServerConfig};
use storage::MessageStore;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let bind = match &cli.command {
        Commands::Serve { bind } => bind.clone(),
        _ => None,
    };
    let config = ServerConfig::load(bind)?;
    config.validate()?;
    init_tracing(&config.log_file)?;

    match cli.command {
        Commands::Serve { .. } => run_server(config).await,
        Commands::Count => {
            let repo = open_repository(&config).await?;
            println!("Current message count: {}", repo.count().await?);
            Ok(())
        }
        Commands::Clear => {
            let repo = open_repository(&config).await?;
            let deleted = repo.clear().await?;
            println!("Cleared {} message(s) from database", deleted);
            Ok(())
        }
        Commands::SeedSamples => {
            let repo = open_repository(&config).await?;
            let added = repo.seed_samples().await?;
            println!("Added {} sample messages", added);
            Ok(())
        }
    }
}
