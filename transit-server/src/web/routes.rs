//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{LineId, StationId};
use crate::network::StationSupplier;
use crate::planner::PlanError;

use super::dto::*;
use super::state::AppState;

/// An endpoint served by [`create_router`].
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub summary: &'static str,
}

const fn endpoint(method: &'static str, path: &'static str, summary: &'static str) -> Endpoint {
    Endpoint {
        method,
        path,
        summary,
    }
}

/// Every endpoint the router serves, for start-up logging.
pub const ENDPOINTS: &[Endpoint] = &[
    endpoint("GET", "/health", "Health check"),
    endpoint("GET", "/api/stations/all", "All stations"),
    endpoint("GET", "/api/stations/sorted", "Stations by name"),
    endpoint("GET", "/api/stations/minimumRoute", "Fewest-hops route (?from&to)"),
    endpoint("GET", "/api/stations/greedyRoute", "Heuristic route (?from&to)"),
    endpoint("GET", "/api/stations/fastest/:from/:to", "Fastest route by name"),
    endpoint("GET", "/api/stations/line/:line", "Stations on a line"),
    endpoint("POST", "/api/stations/tsp", "Optimal round trip"),
    endpoint("GET", "/api/stations/:id", "Station by id"),
    endpoint("GET", "/api/lines/all", "All lines"),
    endpoint("GET", "/api/path/exists/:from/:to", "Whether two stations connect"),
    endpoint("GET", "/api/path/all-paths/:from/:to", "Every simple path (?maxDepth)"),
    endpoint("GET", "/api/knapsack/:time_limit", "Best visits within a budget"),
];

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations/all", get(all_stations))
        .route("/api/stations/sorted", get(sorted_stations))
        .route("/api/stations/minimumRoute", get(minimum_route))
        .route("/api/stations/greedyRoute", get(greedy_route))
        .route("/api/stations/fastest/:from/:to", get(fastest_route))
        .route("/api/stations/line/:line", get(stations_on_line))
        .route("/api/stations/tsp", post(optimal_tour))
        .route("/api/stations/:id", get(station_by_id))
        .route("/api/lines/all", get(all_lines))
        .route("/api/path/exists/:from/:to", get(path_exists))
        .route("/api/path/all-paths/:from/:to", get(all_paths))
        .route("/api/knapsack/:time_limit", get(maximize_interest))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

fn parse_station_id(raw: &str) -> Result<StationId, AppError> {
    StationId::parse(raw).map_err(|e| AppError::BadRequest {
        message: format!("Invalid station id {raw:?}: {e}"),
    })
}

fn no_route(from: &str, to: &str) -> AppError {
    AppError::NotFound {
        message: format!("No route from {from} to {to}"),
    }
}

/// Every station, in network file order.
async fn all_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    Json(StationsResponse::from_stations(
        &state.network.all_stations(),
    ))
}

/// Every station, ordered by name.
async fn sorted_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    Json(StationsResponse::from_stations(
        &state.planner().stations_sorted_by_name(),
    ))
}

/// A single station by id.
async fn station_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StationView>, AppError> {
    let id = parse_station_id(&id)?;
    let station = state.network.station(&id).ok_or_else(|| AppError::NotFound {
        message: format!("Unknown station {id}"),
    })?;
    Ok(Json(StationView::from_station(&station)))
}

/// Stations whose home line is `line`.
async fn stations_on_line(
    State(state): State<AppState>,
    Path(line): Path<String>,
) -> Result<Json<StationsResponse>, AppError> {
    let line = LineId::parse(&line).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;
    Ok(Json(StationsResponse::from_stations(
        &state.network.stations_on_line(&line),
    )))
}

/// Every line named in the network.
async fn all_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let lines = state
        .network
        .lines()
        .into_iter()
        .map(String::from)
        .collect();
    Json(LinesResponse { lines })
}

/// Fewest-hops route between two station ids.
async fn minimum_route(
    State(state): State<AppState>,
    Query(req): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    let from = parse_station_id(&req.from)?;
    let to = parse_station_id(&req.to)?;

    let route = state
        .planner()
        .minimum_route(&from, &to)
        .ok_or_else(|| no_route(&req.from, &req.to))?;
    Ok(Json(RouteResponse::from_route(&route)))
}

/// Heuristic route between two station ids.
async fn greedy_route(
    State(state): State<AppState>,
    Query(req): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    let from = parse_station_id(&req.from)?;
    let to = parse_station_id(&req.to)?;

    let route = state
        .planner()
        .greedy_route(&from, &to)
        .ok_or_else(|| no_route(&req.from, &req.to))?;
    Ok(Json(RouteResponse::from_route(&route)))
}

/// Minimum-time route between two station names.
async fn fastest_route(
    State(state): State<AppState>,
    Path((from, to)): Path<(String, String)>,
) -> Result<Json<RouteResponse>, AppError> {
    let route = state
        .planner()
        .fastest_route(&from, &to)
        .ok_or_else(|| no_route(&from, &to))?;
    Ok(Json(RouteResponse::from_route(&route)))
}

/// Cheapest round trip over the requested stations.
async fn optimal_tour(
    State(state): State<AppState>,
    Json(req): Json<TourRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let ids = req
        .station_ids
        .iter()
        .map(|raw| parse_station_id(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let tour = state
        .planner()
        .optimal_tour(&ids)?
        .ok_or_else(|| AppError::NotFound {
            message: "No tour connects the requested stations".to_string(),
        })?;
    Ok(Json(RouteResponse::from_route(&tour)))
}

/// Whether two named stations are connected.
async fn path_exists(
    State(state): State<AppState>,
    Path((from, to)): Path<(String, String)>,
) -> Json<ExistsResponse> {
    Json(ExistsResponse {
        exists: state.planner().path_exists(&from, &to),
    })
}

/// Every simple path between two named stations.
async fn all_paths(
    State(state): State<AppState>,
    Path((from, to)): Path<(String, String)>,
    Query(req): Query<AllPathsQuery>,
) -> Result<Json<PathsResponse>, AppError> {
    let paths = state.planner().all_paths(&from, &to, req.max_depth)?;
    Ok(Json(PathsResponse::from_paths(&paths)))
}

/// Most interesting stations to visit within a time budget.
async fn maximize_interest(
    State(state): State<AppState>,
    Path(time_limit): Path<i64>,
) -> Result<Json<KnapsackResponse>, AppError> {
    let selection = state.planner().maximize_interest(time_limit)?;
    Ok(Json(KnapsackResponse::from_selection(&selection)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidRequest(message) => AppError::BadRequest { message },
            PlanError::Domain(e) => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
