//! Sushi Shop CLI - Menu browsing and cart scripting.
//!
//! # Usage
//!
//! ```bash
//! # List the whole menu
//! sushi-cli menu
//!
//! # List one category as JSON
//! sushi-cli menu --category maki --json
//!
//! # Apply a YAML list of cart commands to a fresh cart
//! sushi-cli cart replay demos/cart.yaml
//!
//! # Drive a cart interactively from stdin
//! sushi-cli cart shell
//! ```
//!
//! # Commands
//!
//! - `menu` - List catalog products
//! - `cart replay` - Replay a cart command script
//! - `cart shell` - Interactive cart session

#![cfg_attr(not(test), forbid(unsafe_code))]
// The CLI's output is its stdout
#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use sushi_shop_storefront::AppState;
use sushi_shop_storefront::catalog::Catalog;
use sushi_shop_storefront::config::StorefrontConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "sushi-cli")]
#[command(author, version, about = "Sushi Shop CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List menu products
    Menu {
        /// Only list products in this category (e.g. `maki`)
        #[arg(short, long)]
        category: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Drive a shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Apply a YAML list of cart commands to a fresh cart and print the result
    Replay {
        /// Path to the YAML script
        script: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Read cart commands from stdin, one per line
    Shell,
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(config.environment.as_str().into()),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn init_tracing() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sushi_shop_storefront=info,sushi_cli=info".into());

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing();
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Sentry must be initialized before the tracing subscriber
    let _sentry_guard = init_sentry(&config);
    init_tracing();

    tracing::debug!(environment = %config.environment, "configuration loaded");
    let state = AppState::new(config, Catalog::sample());

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, &state).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Menu { category, json } => {
            commands::menu::list(state, category.as_deref(), json)?;
        }
        Commands::Cart { action } => match action {
            CartAction::Replay { script, json } => {
                commands::cart::replay(state, &script, json).await?;
            }
            CartAction::Shell => commands::cart::shell(state).await?,
        },
    }
    Ok(())
}
