//! # Docman CLI
//!
//! Command-line interface for the Docman document management service.
//!
//! ## Usage
//!
//! ```bash
//! docman serve                                   # Start the API server (runs migrations automatically)
//! docman migrate                                 # Run database migrations
//! docman user create --username ops --email ops@example.com --staff
//! docman --help                                  # Show help
//! ```

mod commands;
mod config;
mod server;

use clap::{CommandFactory as _, Parser};
use commands::{Commands, UserCommands};
use config::{DatabaseConfig, ServerConfig};
use error::Result;

/// Docman - document management API
#[derive(Parser, Debug)]
#[command(name = "docman")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level or filter directive (debug, info, `server=debug,sqlx=warn`)
    #[arg(short = 'L', long, env = "RUST_LOG", default_value = "info")]
    log_level: String,

    /// Output format (json, pretty, compact)
    #[arg(short, long, env = "DOCMAN_LOG_FORMAT", default_value = "pretty")]
    log_format: String,

    /// Also write logs to this file, rotated daily
    #[arg(long, env = "DOCMAN_LOG_FILE")]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    logging::init(&cli.log_level, &cli.log_format, cli.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    logging::info!(target: "app", command = ?cli.command, "Docman CLI starting...");

    match &cli.command {
        Commands::Serve(args) => {
            let db_config = DatabaseConfig::from_env()?;
            let server_config = ServerConfig::from_env()?;
            server::serve(&db_config, &server_config, args).await?;
        },
        Commands::Migrate(args) => {
            let db_config = DatabaseConfig::from_env()?;
            commands::migrate::migrate(&db_config, args).await?;
        },
        Commands::User(UserCommands::Create(args)) => {
            let db_config = DatabaseConfig::from_env()?;
            let jwt = ServerConfig::from_env().ok().map(|c| c.jwt);
            let db = migration::connect_to_database(&db_config.database_url())
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to database: {}", e))?;
            commands::user::create(&db, jwt.as_ref(), args).await?;
        },
        Commands::Completions(args) => commands::completions::completions(args.shell, &mut Cli::command())?,
        Commands::Validate => commands::validate::validate()?,
    }

    logging::info!(target: "app", "Docman CLI completed successfully");
    Ok(())
}
