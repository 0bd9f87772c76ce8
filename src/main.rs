//! hateoas-messages - versioned message API server.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hateoas_messages::config::Args;
use hateoas_messages::http::{self, AppState};
use hateoas_messages::store::MessageStore;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("hateoas_messages={},info", args.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }
    let config = args.server_config();

    info!("Starting application: hateoas-messages");
    info!("Listen: {}", config.listen);
    info!("Page size: {}", config.page_size);
    if let Some(url) = &config.public_url {
        info!("Public URL: {}", url);
    }

    let store = MessageStore::new();
    let mut state = AppState::new(store, config.page_size);
    if let Some(url) = config.public_url {
        state = state.with_public_url(url);
    }

    if let Err(e) = http::serve(state, &config.listen.to_string()).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
