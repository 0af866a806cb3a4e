//! Recommend CLI - drive the board form actions from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Create an account and log in
//! recommend-cli register -e ada@example.com -f Ada -l Lovelace -u ada -p secret -r secret
//! recommend-cli login -u ada@example.com -p secret
//!
//! # Boards and cards
//! recommend-cli board create -n "Movies to watch" --private
//! recommend-cli board list
//! recommend-cli card create <BOARD_ID> --url https://example.org --title Example
//! ```
//!
//! # Commands
//!
//! - `register`, `login`, `logout` - Account and session
//! - `user update|password|show` - Profile
//! - `board create|update|delete|show|list` - Boards
//! - `card create|update|delete|show` - Cards
//!
//! # Environment Variables
//!
//! See `recommend_client::config`. `login` prints the session token as a
//! `RECOMMEND_ACCESS_TOKEN=` line for reuse in later invocations.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use recommend_client::{ApiClient, ClientConfig, FormActions, LogFormat, Outcome};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod browser;
mod commands;

use browser::LoggingBrowser;
use commands::{BoardAction, CardAction, CommandError, UserAction};

#[derive(Parser)]
#[command(name = "recommend-cli")]
#[command(author, version, about = "Recommend board CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new account
    Register {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// First name
        #[arg(short, long)]
        first_name: String,

        /// Last name
        #[arg(short, long)]
        last_name: String,

        /// User name
        #[arg(short, long)]
        user_name: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Password confirmation
        #[arg(short, long)]
        repeat_password: String,
    },
    /// Start a session
    Login {
        /// Email address or user name
        #[arg(short, long)]
        username: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// End the current session
    Logout,
    /// Manage the signed-in user
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Manage boards
    Board {
        #[command(subcommand)]
        action: BoardAction,
    },
    /// Manage cards
    Card {
        #[command(subcommand)]
        action: CardAction,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt::init();
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(2);
        }
    };

    init_tracing(config.log_format);

    let result = run(cli, &config).await;

    match result {
        Ok(Some(outcome)) if !outcome.is_navigation() => std::process::exit(1),
        Ok(_) => {}
        Err(e) => {
            tracing::error!("Command failed: {e}");
            std::process::exit(2);
        }
    }
}

/// Text logs by default, JSON when `RECOMMEND_LOG_FORMAT=json`.
fn init_tracing(format: LogFormat) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "recommend_cli=info,recommend_client=info".into());

    let json_layer = (format == LogFormat::Json)
        .then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (format == LogFormat::Text).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

/// Run one command. Read commands yield no [`Outcome`].
async fn run(cli: Cli, config: &ClientConfig) -> Result<Option<Outcome>, CommandError> {
    let api = ApiClient::new(config)?;
    let mut actions = FormActions::new(api, LoggingBrowser);

    match cli.command {
        Commands::Register {
            email,
            first_name,
            last_name,
            user_name,
            password,
            repeat_password,
        } => {
            let form = commands::register_form(
                email,
                first_name,
                last_name,
                user_name,
                password,
                repeat_password,
            );
            Ok(Some(actions.register(&form).await?))
        }
        Commands::Login { username, password } => {
            commands::login(&mut actions, username, password).await
        }
        Commands::Logout => Ok(Some(actions.logout().await)),
        Commands::User { action } => commands::user(&mut actions, action).await,
        Commands::Board { action } => commands::board(&mut actions, action).await,
        Commands::Card { action } => commands::card(&mut actions, action).await,
    }
}
