//! Storefront CLI
//!
//! Command-line interface for the storefront commerce API.
//!
//! # Usage
//!
//! ```bash
//! storefront products list --page 1 --size 20
//! storefront products versions p-123 --format json
//! storefront brands search acme
//! storefront reviews stats v-42
//! storefront endpoints
//! storefront robots --sitemap https://shop.example/sitemap.xml
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(version)]
#[command(about = "Storefront Command Line Interface", long_about = None)]
struct Cli {
    /// API base URL
    #[arg(long, env = "STOREFRONT_API_URL")]
    api_url: Option<String>,

    /// Bearer token for authenticated endpoints
    #[arg(long, env = "STOREFRONT_TOKEN")]
    token: Option<String>,

    /// Output format
    #[arg(long, short)]
    format: Option<output::OutputFormat>,

    /// Profile name from config file
    #[arg(long, short)]
    profile: Option<String>,

    /// Fail on responses that break contract rules
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse products
    Products {
        #[command(subcommand)]
        action: ProductCommands,
    },
    /// Browse brands
    Brands {
        #[command(subcommand)]
        action: ReferenceCommands,
    },
    /// Browse categories
    Categories {
        #[command(subcommand)]
        action: ReferenceCommands,
    },
    /// Browse suppliers
    Suppliers {
        #[command(subcommand)]
        action: ReferenceCommands,
    },
    /// Manage customers
    Customers {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Manage employees
    Employees {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// View promotions
    Promotions {
        #[command(subcommand)]
        action: PromotionCommands,
    },
    /// View reviews
    Reviews {
        #[command(subcommand)]
        action: ReviewCommands,
    },
    /// Authenticate
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// List every registered endpoint
    Endpoints,
    /// Print the crawl-control policy as robots.txt
    Robots {
        #[arg(long)]
        sitemap: Option<String>,
    },
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ProductCommands {
    /// List products
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        size: u32,
        #[arg(long)]
        keyword: Option<String>,
    },
    /// Get product details
    Get { id: String },
    /// List versions of a product
    Versions { id: String },
}

#[derive(Subcommand)]
enum ReferenceCommands {
    /// List entries page by page
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        size: u32,
    },
    /// Get entry details
    Get { id: String },
    /// Search entries by keyword
    Search { keyword: String },
}

#[derive(Subcommand)]
enum UserCommands {
    /// List accounts
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        size: u32,
        #[arg(long)]
        keyword: Option<String>,
    },
    /// Get account details
    Get { id: String },
}

#[derive(Subcommand)]
enum PromotionCommands {
    /// List promotions
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        size: u32,
    },
    /// Get promotion details
    Get { id: String },
}

#[derive(Subcommand)]
enum ReviewCommands {
    /// Rating statistics for a product version
    Stats { version_id: String },
    /// Reviews of a product version
    List {
        version_id: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        size: u32,
    },
}

#[derive(Subcommand)]
enum AuthCommands {
    /// Sign in and store the access token in the active profile
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long, env = "STOREFRONT_PASSWORD")]
        password: String,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set configuration value
    Set { key: String, value: String },
    /// Get configuration value
    Get { key: String },
    /// List all configuration
    List,
    /// Initialize configuration
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        let not_found = e
            .downcast_ref::<storefront::Error>()
            .is_some_and(storefront::Error::is_not_found_error);
        if not_found {
            eprintln!("{} {}", "Not found:".red().bold(), e);
        } else {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let profile = cli.profile.as_deref();
    let config = config::Config::load(profile).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config file");
        config::Config::default()
    });

    let format = cli
        .format
        .or_else(|| config.default_format.as_deref().and_then(output::OutputFormat::parse))
        .unwrap_or(output::OutputFormat::Table);

    let mut client_config = storefront::ClientConfig::default()
        .with_base_url(storefront::resolve_base_url(cli.api_url.or(config.api_url.clone())));
    if let Some(token) = cli.token.or(config.access_token.clone()) {
        client_config = client_config.with_access_token(token);
    }
    if cli.strict {
        client_config = client_config.strict();
    }
    let client = storefront::Client::with_config(client_config)?;

    match cli.command {
        Commands::Products { action } => commands::products::handle(action, &client, format).await,
        Commands::Brands { action } => {
            commands::catalog::handle(action, &client.brands(), format).await
        }
        Commands::Categories { action } => {
            commands::catalog::handle(action, &client.categories(), format).await
        }
        Commands::Suppliers { action } => {
            commands::catalog::handle(action, &client.suppliers(), format).await
        }
        Commands::Customers { action } => {
            commands::users::handle_customers(action, &client, format).await
        }
        Commands::Employees { action } => {
            commands::users::handle_employees(action, &client, format).await
        }
        Commands::Promotions { action } => {
            commands::promotions::handle(action, &client, format).await
        }
        Commands::Reviews { action } => commands::reviews::handle(action, &client, format).await,
        Commands::Auth { action } => commands::auth::handle(action, &client, profile).await,
        Commands::Endpoints => commands::site::list_endpoints(&client, format),
        Commands::Robots { sitemap } => commands::site::robots(sitemap),
        Commands::Config { action } => commands::config::handle(action, profile),
    }
}
