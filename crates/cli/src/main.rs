//! Online shop terminal storefront.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! shop catalog
//!
//! # Create a product
//! shop create --name Pen --price 2 --weight 0.1
//!
//! # Interactive session (browse, cart, create)
//! shop session
//! ```
//!
//! # Commands
//!
//! - `catalog` - Fetch and print the catalog
//! - `create` - Submit a new product
//! - `session` - Interactive shopping session

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use online_shop_storefront::StorefrontConfig;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about = "Online shop storefront")]
struct Cli {
    /// Product authority base URL (overrides `SHOP_API_URL`)
    #[arg(long, global = true)]
    api_url: Option<Url>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print the product catalog
    Catalog,
    /// Create a new product
    Create {
        /// Product name
        #[arg(short, long)]
        name: String,

        /// Product description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Product image URL
        #[arg(short, long, default_value = "")]
        image_url: String,

        /// Unit price
        #[arg(short, long, default_value = "")]
        price: String,

        /// Weight in kilograms
        #[arg(short, long, default_value = "1")]
        weight: String,
    },
    /// Start an interactive shopping session
    Session,
}

fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Maps tracing levels to Sentry: errors and warnings become events,
/// info and debug become breadcrumbs.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        tracing::Level::TRACE => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt::init();
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    if let Some(url) = cli.api_url.clone() {
        config.api.base_url = url;
    }

    // Sentry must be initialized before the tracing subscriber
    let _sentry_guard = init_sentry(&config);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "online_shop_storefront=info,online_shop_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    if let Err(e) = run(cli, &config).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog => commands::catalog::list(config).await?,
        Commands::Create {
            name,
            description,
            image_url,
            price,
            weight,
        } => {
            let input = commands::create::ProductInput {
                name,
                description,
                image_url,
                price,
                weight,
            };
            commands::create::create(config, input).await?;
        }
        Commands::Session => commands::session::run(config).await?,
    }
    Ok(())
}
