use std::net::SocketAddr;
use std::process::ExitCode;
use std::str::FromStr;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use transit_server::network::TransitNetwork;
use transit_server::planner::PlannerConfig;
use transit_server::web::{AppState, ENDPOINTS, create_router};

const DEFAULT_NETWORK_PATH: &str = "data/network.json";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Read an optional numeric override, keeping `default` if unset or invalid.
fn env_override<T: FromStr + Copy>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(name, value = %raw, "ignoring unparseable environment override");
            default
        }),
        Err(_) => default,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let network_path =
        std::env::var("NETWORK_PATH").unwrap_or_else(|_| DEFAULT_NETWORK_PATH.to_string());
    let network = match TransitNetwork::load(&network_path) {
        Ok(network) => network,
        Err(e) => {
            error!(path = %network_path, "failed to load network: {e}");
            return ExitCode::FAILURE;
        }
    };

    let defaults = PlannerConfig::default();
    let config = PlannerConfig {
        max_tour_stations: env_override("MAX_TOUR_STATIONS", defaults.max_tour_stations),
        default_max_depth: env_override("DEFAULT_MAX_DEPTH", defaults.default_max_depth),
        ..defaults
    };
    if config.default_max_depth > config.max_depth_limit {
        warn!(
            default_max_depth = config.default_max_depth,
            limit = config.max_depth_limit,
            "default depth exceeds the depth limit; path enumeration without maxDepth will be rejected"
        );
    }

    let state = AppState::new(network, config);
    let app = create_router(state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let addr: SocketAddr = match bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(addr = %bind_addr, "invalid bind address: {e}");
            return ExitCode::FAILURE;
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Transit route planner listening on http://{addr}");
    info!("API endpoints:");
    for e in ENDPOINTS {
        info!("  {:<4} {:<38} - {}", e.method, e.path, e.summary);
    }

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
