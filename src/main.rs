//! Artsy Relay - an authenticating proxy for the Artsy art-catalog API.
//!
//! This binary starts the HTTP server and configures all components.

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use artsy_relay::{
    catalog::CatalogService,
    config::{Config, DEFAULT_CLIENT_ID},
    server::{create_router, RouterConfig},
    token::TokenManager,
    upstream::HttpUpstream,
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    // Initialize logging
    init_logging(config.verbose);

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Configuration:");
    info!("  Upstream API: {}", config.upstream_base);
    info!(
        "  Token retry: every {}ms, {}",
        config.token_retry_ms,
        match config.token_max_attempts {
            Some(n) => format!("at most {} attempt(s)", n),
            None => "unbounded".to_string(),
        }
    );
    info!("  Index page: {}", config.index_file);
    info!("  Static dir: {}", config.static_dir);

    if config.client_id == DEFAULT_CLIENT_ID {
        warn!("  Credentials: using the built-in client id/secret");
        warn!("               Override with ARTSY_CLIENT_ID / ARTSY_CLIENT_SECRET");
    }

    if !Path::new(&config.index_file).is_file() {
        warn!(
            "  Index page '{}' not found; GET / will return 404",
            config.index_file
        );
    }

    // Wire upstream client, token manager, and catalog service
    let upstream = Arc::new(HttpUpstream::new(&config.upstream_base));
    let tokens = TokenManager::with_policy(
        Arc::clone(&upstream),
        &config.client_id,
        &config.client_secret,
        config.retry_policy(),
    );
    let catalog = CatalogService::new(upstream, tokens);

    // Build router
    let router_config = build_router_config(&config);
    let router = create_router(catalog, router_config);

    // Bind and serve
    let addr = config.bind_address();

    info!("");
    info!("────────────────────────────────────────────────────────");
    info!("  Server listening on: http://{}", addr);
    info!("");
    info!("  Try these endpoints:");
    info!("    curl http://{}/health", addr);
    info!("    curl 'http://{}/search?keyword=picasso'", addr);
    info!("");
    info!("  Open the front end in your browser:");
    info!("    open http://{}/", addr);
    info!("────────────────────────────────────────────────────────");
    info!("");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "artsy_relay=debug,tower_http=debug"
    } else {
        "artsy_relay=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build RouterConfig from the application Config.
fn build_router_config(config: &Config) -> RouterConfig {
    let mut router_config =
        RouterConfig::new().with_frontend(&config.index_file, &config.static_dir);

    if let Some(ref origins) = config.cors_origins {
        router_config = router_config.with_cors_origins(origins.clone());
    }

    router_config.with_tracing(!config.no_tracing)
}
