// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! codehub - a local-first shared code projects hub.
//!
//! This is the binary entry point. Every subcommand maps onto one of the
//! hub views: it loads the store from persistent storage, performs the
//! view's operations, and prints the result.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// codehub - a local-first shared code projects hub.
#[derive(Parser, Debug)]
#[command(name = "codehub", version, about, long_about = None)]
struct Cli {
    /// Keep all state in memory; nothing is written to disk.
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Browse the catalog, optionally filtered by name or language.
    Catalog {
        /// Case-insensitive search over project names and languages.
        query: Option<String>,
    },
    /// Show one project in full, including its content.
    Show { id: String },
    /// Like a project.
    Like { id: String },
    /// Download a project's content (and count the download).
    Download { id: String },
    /// Share a new project. Requires a logged-in admin.
    Share(commands::ShareArgs),
    /// Remove one of your projects. Requires a logged-in admin.
    Remove { id: String },
    /// Post a message to the community chat.
    Chat { text: String },
    /// Show the hub's admin team.
    Legends,
    /// Log in as one of the built-in admins.
    Login {
        username: String,
        password: String,
    },
    /// Log out and clear the persisted session.
    Logout,
    /// Show the currently logged-in admin.
    Whoami,
    /// Edit the logged-in admin's profile.
    Profile(commands::ProfileArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match codehub_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            codehub_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.hub.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let ctx = match commands::Context::open(config, cli.ephemeral).await {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("codehub: {e}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Catalog { query } => commands::catalog(&ctx, query.as_deref()).await,
        Commands::Show { id } => commands::show(&ctx, &id).await,
        Commands::Like { id } => commands::like(&ctx, &id).await,
        Commands::Download { id } => commands::download(&ctx, &id).await,
        Commands::Share(args) => commands::share(&ctx, args).await,
        Commands::Remove { id } => commands::remove(&ctx, &id).await,
        Commands::Chat { text } => commands::chat(&ctx, &text).await,
        Commands::Legends => commands::legends().await,
        Commands::Login { username, password } => {
            commands::login(&ctx, &username, &password).await
        }
        Commands::Logout => commands::logout(&ctx).await,
        Commands::Whoami => commands::whoami(&ctx).await,
        Commands::Profile(args) => commands::profile(&ctx, args).await,
    };

    if let Err(e) = result {
        eprintln!("codehub: {e}");
        std::process::exit(1);
    }
}
