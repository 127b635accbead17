//! HTTP route handlers.

use std::collections::BTreeMap;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::planner::SearchError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `allowed_origins` restricts CORS to the listed origins; an empty list
/// allows any origin.
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health))
        .route("/cities", get(list_cities))
        .route("/cities/:name", get(get_city))
        .route("/routes", get(list_routes))
        .route("/routes/from/:name", get(routes_from_city))
        .route("/find-path", post(find_path))
        .route("/compare-paths", post(compare_paths))
        .route("/reachable/:name", get(reachable_cities))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// API information.
async fn api_info() -> Json<ApiInfoResponse> {
    let endpoints = [
        ("health", "/health"),
        ("cities", "/cities"),
        ("city", "/cities/{name}"),
        ("routes", "/routes"),
        ("routes_from", "/routes/from/{name}"),
        ("find_path", "/find-path"),
        ("compare_paths", "/compare-paths"),
        ("reachable", "/reachable/{name}"),
    ];

    Json(ApiInfoResponse {
        name: "Travel Route Optimizer API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
        endpoints: endpoints
            .into_iter()
            .map(|(name, path)| (name.to_string(), path.to_string()))
            .collect::<BTreeMap<_, _>>(),
    })
}

/// Health check endpoint.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let graph = state.graph();
    Json(HealthResponse {
        status: "healthy".to_string(),
        cities_loaded: graph.city_count(),
        routes_loaded: graph.route_count(),
    })
}

/// All cities, sorted by name.
async fn list_cities(State(state): State<AppState>) -> Json<Vec<CityResult>> {
    let mut cities: Vec<CityResult> = state
        .graph()
        .get_all_cities()
        .iter()
        .map(CityResult::from_city)
        .collect();
    cities.sort_by(|a, b| a.name.cmp(&b.name));
    Json(cities)
}

async fn get_city(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CityResult>, AppError> {
    let city = state
        .graph()
        .get_city(&name)
        .ok_or_else(|| AppError::city_not_found(&name))?;
    Ok(Json(CityResult::from_city(city)))
}

/// Every route once, regardless of direction.
async fn list_routes(State(state): State<AppState>) -> Json<Vec<RouteResult>> {
    let routes = state
        .graph()
        .get_all_routes()
        .into_iter()
        .map(RouteResult::from_route)
        .collect();
    Json(routes)
}

async fn routes_from_city(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<RouteResult>>, AppError> {
    let graph = state.graph();
    let city = graph
        .get_city(&name)
        .ok_or_else(|| AppError::city_not_found(&name))?;
    let routes = graph
        .get_neighbors(city)
        .into_iter()
        .map(RouteResult::from_route)
        .collect();
    Ok(Json(routes))
}

/// Find the optimal path between two cities.
async fn find_path(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TripResult>, AppError> {
    let req: FindPathRequest = parse_body(&body)?;

    let trip = state
        .finder
        .find_path_by(&req.origin, &req.destination, &req.optimize_by)?;

    Ok(Json(TripResult::from_trip(&trip)))
}

/// Find the shortest and the cheapest path and compare them.
async fn compare_paths(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ComparePathsResponse>, AppError> {
    let req: ComparePathsRequest = parse_body(&body)?;

    let trips = state.finder.find_all_paths(&req.origin, &req.destination)?;

    Ok(Json(ComparePathsResponse::from_trips(&trips)))
}

async fn reachable_cities(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<String>>, AppError> {
    if state.graph().get_city(&name).is_none() {
        return Err(AppError::city_not_found(&name));
    }
    Ok(Json(state.finder.get_reachable_cities(&name)))
}

/// Parse a JSON body, logging it on failure.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "JSON parse error");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl AppError {
    fn city_not_found(name: &str) -> Self {
        AppError::NotFound {
            message: format!("City '{name}' not found"),
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::OriginNotFound(_) | SearchError::DestinationNotFound(_) => {
                AppError::NotFound {
                    message: e.to_string(),
                }
            }
            SearchError::Invalid(_) => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
