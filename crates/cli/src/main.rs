//! GoalGrocer CLI - catalogue seeding and user management.
//!
//! # Usage
//!
//! ```bash
//! # Write the seed catalogue into the document store
//! gg-cli seed
//!
//! # Overwrite existing documents while seeding
//! gg-cli seed --force
//!
//! # Grant a user the admin role
//! gg-cli promote-admin -u u-thandi
//! ```
//!
//! # Commands
//!
//! - `seed` - Write the seed catalogue into the document store
//! - `promote-admin` - Grant a user the admin role

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gg-cli")]
#[command(author, version, about = "GoalGrocer CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the seed catalogue into the document store
    Seed {
        /// Overwrite documents that already exist
        #[arg(long)]
        force: bool,
    },
    /// Grant a user the admin role
    PromoteAdmin {
        /// Id of the user to promote
        #[arg(short, long)]
        user_id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { force } => commands::seed::run(force).await?,
        Commands::PromoteAdmin { user_id } => commands::promote::run(&user_id).await?,
    }
    Ok(())
}
