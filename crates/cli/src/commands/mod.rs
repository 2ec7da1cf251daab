//! # CLI Commands
//!
//! Implementation of CLI commands for Docman.

pub mod completions;
pub mod migrate;
pub mod user;
pub mod validate;

use clap::{Args, Subcommand};
use uuid::Uuid;

/// Available commands for the Docman CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the API server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Manage API users
    #[command(subcommand)]
    User(UserCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Verify configuration
    Validate,
}

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Server host to bind to
    #[arg(long, env = "DOCMAN_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port to bind to
    #[arg(short, long, env = "DOCMAN_PORT", default_value = "8000")]
    pub port: u16,
}

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// List pending migrations without applying them
    #[arg(long, conflicts_with = "rollback")]
    pub dry_run: bool,

    /// Rollback the last migration
    #[arg(long)]
    pub rollback: bool,
}

/// User management subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Create a user the API will accept tokens for
    Create(CreateUserArgs),
}

/// Arguments for `user create`
#[derive(Args, Debug, Clone)]
pub struct CreateUserArgs {
    /// Unique login name
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub email: String,

    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    /// Grant staff status
    #[arg(long)]
    pub staff: bool,

    /// Role granting permission names
    #[arg(long)]
    pub role: Option<Uuid>,

    /// Company the user administers
    #[arg(long)]
    pub company: Option<Uuid>,

    /// Brand the user administers
    #[arg(long)]
    pub brand: Option<Uuid>,

    /// Branch the user administers
    #[arg(long)]
    pub branch: Option<Uuid>,

    /// Print a signed access token for the new user
    #[arg(long)]
    pub print_token: bool,
}

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
