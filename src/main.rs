//! Chatlog CLI - serve and inspect the message store

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use chatlog::config;
use chatlog::storage::SqliteStore;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "chatlog")]
#[command(version)]
#[command(about = "Message-logging backend - HTTP CRUD over a SQLite message store")]
#[command(long_about = r#"
Chatlog stores chat messages with a generated bot response and exposes
them over four HTTP endpoints:

  POST   /messages/        create a message
  GET    /messages/        list messages (skip/limit query params)
  PUT    /messages/{id}/   update a message
  DELETE /messages/{id}/   delete a message

Example usage:
  chatlog serve --port 8000 --database messages.db
  chatlog stats --database messages.db
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on (default 8000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the database file (default "messages.db")
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Path to a chatlog.toml config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show statistics about the message store
    Stats {
        /// Path to the database file
        #[arg(short, long, default_value = "messages.db")]
        database: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Serve { port, database, config } => {
            let file_config = config::load_config(config.as_deref())?.unwrap_or_default();

            let port = port.or(file_config.port).unwrap_or(8000);
            let database = database
                .or(file_config.database.map(PathBuf::from))
                .unwrap_or_else(config::default_database_path);

            config::ensure_db_dir(&database)?;
            chatlog::server::start_server(port, database).await?;
        }

        Commands::Stats { database } => {
            let store = SqliteStore::open(&database)?;
            let count = store.count()?;

            println!("Chatlog statistics ({:?})", database);
            println!("  Messages: {}", count);
        }
    }

    Ok(())
}
