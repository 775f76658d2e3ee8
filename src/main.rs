use std::{env, sync::Arc};

use anyhow::Result;
use axum::{Router, serve};
use dotenv::dotenv;
use prismhr_mcp::mcp::{
    PrismHrMcpFactory, catalog, streamable_http_config,
    config::{PrismConfig, bind_address},
    tools::relay::Relay,
};
use rmcp::transport::{
    StreamableHttpService, streamable_http_server::session::local::LocalSessionManager,
};
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load variables from .env file if it exists into the environment
    dotenv().ok();

    // Initialize tracing, LOG_FORMAT=json switches to structured output
    let json_logs = env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".to_string().into()))
        .with(json_logs.then(|| fmt::layer().json()))
        .with((!json_logs).then(fmt::layer))
        .init();

    let config = PrismConfig::from_env()?;
    info!(
        base_url = config.base_url(),
        session_ttl = ?config.session_ttl(),
        tools = catalog::endpoints().count() + 1,
        "PrismHR relay configured"
    );
    let relay = Arc::new(Relay::new(config)?);

    // Setting up the stateless Streamable HTTP Service, one factory per request
    info!("Setting up the Streamable HTTP Service");
    let service = StreamableHttpService::new(
        move || Ok(PrismHrMcpFactory::new(Arc::clone(&relay))),
        LocalSessionManager::default().into(),
        streamable_http_config(),
    );

    // Starting the server... Setting up the router and TCP listener
    let bind_address = bind_address()?;
    info!("Starting server on {bind_address}");
    let router = Router::new().nest_service("/mcp", service);
    let tcp_listener = TcpListener::bind(&bind_address).await?;

    // Graceful shutdown on CTRL+C
    let shutdown = async {
        signal::ctrl_c().await.unwrap_or_else(|e| {
            eprintln!("failed to install CTRL+C handler: {e}");
        });
    };

    serve(tcp_listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
