#![allow(clippy::doc_markdown)]
//! Storefront Server - REST API for faceted product search.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use axum::Router;
use storefront_core::StorefrontConfig;
use storefront_server::{api_router, ApiDoc, AppState, RestIndex};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Storefront Server - faceted product search over a vector index
#[derive(Parser, Debug)]
#[command(name = "storefront-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file
    #[arg(short, long, default_value = "storefront.toml", env = "STOREFRONT_CONFIG")]
    config: PathBuf,

    /// Host address to bind to (overrides `server.host`)
    #[arg(long, env = "STOREFRONT_HOST")]
    host: Option<String>,

    /// Port to listen on (overrides `server.port`)
    #[arg(short, long, env = "STOREFRONT_PORT")]
    port: Option<u16>,

    /// Vector index base URL (overrides `index.endpoint`)
    #[arg(long, env = "STOREFRONT_INDEX_URL")]
    index_url: Option<String>,

    /// Vector index bearer token (overrides `index.token`)
    #[arg(long, env = "STOREFRONT_INDEX_TOKEN", hide_env_values = true)]
    index_token: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = StorefrontConfig::load_from_path(&args.config)?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(url) = args.index_url {
        config.index.endpoint = url;
    }
    if let Some(token) = args.index_token {
        config.index.token = token;
    }
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("{},tower_http=debug", config.logging.level)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting storefront server...");
    tracing::info!("Vector index: {}", config.index.endpoint);

    let index = RestIndex::new(&config.index)?;
    let state = Arc::new(AppState::new(&config, Arc::new(index)));

    // Swagger UI (stateless router)
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    let app = api_router(state)
        .merge(Router::<()>::new().merge(swagger_ui))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Storefront server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
