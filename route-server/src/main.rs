use std::process;

use route_server::config::ServerConfig;
use route_server::data::{read_graph_data, validate_data};
use route_server::web::{AppState, create_router};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            process::exit(1);
        }
    };

    // Load the network before binding so a bad data file fails fast
    let data = match read_graph_data(&config.cities_path, &config.routes_path) {
        Ok(data) => data,
        Err(e) => {
            error!(error = %e, "failed to read graph data");
            process::exit(1);
        }
    };
    let report = validate_data(&data);
    for problem in &report.errors {
        warn!(problem = %problem, "data validation");
    }
    let graph = match data.to_graph() {
        Ok(graph) => graph,
        Err(e) => {
            error!(error = %e, "failed to build graph");
            process::exit(1);
        }
    };
    info!(
        cities = graph.city_count(),
        routes = graph.route_count(),
        "graph loaded"
    );

    let state = AppState::new(graph);
    let app = create_router(state, &config.allowed_origins);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, error = %e, "failed to bind");
            process::exit(1);
        }
    };
    info!(addr = %config.addr, "route optimizer listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "server error");
        process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
