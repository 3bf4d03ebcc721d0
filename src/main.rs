use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brainbuzz_admin::{
    client::ApiClient,
    config::Config,
    store::Stores,
    theme::{FileThemeStorage, ThemeStore},
    web::WebServer,
};

#[derive(Parser)]
#[command(name = "brainbuzz-admin")]
#[command(version)]
#[command(about = "Admin service for the BrainBuzz educational content platform")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Upstream API base URL (overrides config file)
    #[arg(short = 'a', long, value_name = "URL")]
    api_url: Option<String>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = if cli.log_level == "trace" {
        format!("brainbuzz_admin={},tower_http=trace", cli.log_level)
    } else {
        format!("brainbuzz_admin={}", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting BrainBuzz admin service v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration from specified file
    std::env::set_var("CONFIG_FILE", &cli.config);
    let mut config = Config::load()?;
    info!("Configuration loaded from: {}", cli.config);

    // Override config with CLI arguments
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }
    if let Some(api_url) = cli.api_url {
        config.api.base_url = api_url;
    }

    info!("Using upstream API: {}", config.api.base_url);

    let client = ApiClient::new(&config.api)?;
    let stores = Stores::new();

    let theme_storage = Arc::new(FileThemeStorage::new(config.storage.theme_path.clone()));
    let theme = ThemeStore::load(theme_storage).await?;
    info!("Theme store initialized");

    let server = WebServer::new(config, client, stores, theme)?;
    server.serve().await
}
