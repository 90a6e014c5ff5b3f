use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use trivia_storage::StorageBackend;

mod commands;

#[derive(Parser)]
#[command(name = "trivia")]
#[command(about = "Trivia question API with a random-question quiz mode", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, default_value = "5000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Create the schema and exit
    Migrate,
    /// Print every category as JSON
    Categories,
    /// Print one page of questions matching a term as JSON
    Search {
        term: String,
        #[arg(short, long, default_value = "1")]
        page: u32,
    },
}

pub(crate) fn database_url() -> Result<String> {
    std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable must be set"))
}

/// Connects to PostgreSQL; schema migrations run as part of connecting.
pub(crate) async fn connect() -> Result<Arc<StorageBackend>> {
    let url = database_url()?;
    Ok(Arc::new(StorageBackend::new_postgres(&url).await?))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await,
        Commands::Migrate => commands::migrate::run().await,
        Commands::Categories => commands::categories::run().await,
        Commands::Search { term, page } => commands::search::run(term, page).await,
    }
}
