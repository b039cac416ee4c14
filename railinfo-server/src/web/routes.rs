//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{Station, StationCode, Train, TrainNumber};
use crate::pnr::{PnrStatus, is_valid_pnr};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/trains", get(list_trains))
        .route("/api/trains/:number", get(get_train))
        .route("/api/stations", get(list_stations))
        .route("/api/stations/:code", get(get_station))
        .route("/api/search", get(search))
        .route("/api/pnr/:pnr", get(pnr_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Look up a train by number, with remote fallback on local miss.
async fn get_train(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<Train>, AppError> {
    let number = TrainNumber::parse(&number).map_err(|_| AppError::BadRequest {
        message: format!("Invalid train number: {}", number),
    })?;

    match state.lookup.get_train(&number).await {
        Some(train) => Ok(Json(train.as_ref().clone())),
        None => Err(AppError::NotFound {
            message: format!("Train {} not found", number),
        }),
    }
}

/// Look up a station by code. Codes are case-normalized.
async fn get_station(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Station>, AppError> {
    let code = StationCode::parse_normalized(&code).map_err(|_| AppError::BadRequest {
        message: format!("Invalid station code: {}", code),
    })?;

    match state.lookup.get_station(&code).await {
        Some(station) => Ok(Json(station.as_ref().clone())),
        None => Err(AppError::NotFound {
            message: format!("Station {} not found", code),
        }),
    }
}

/// Enumerate all locally-known train numbers.
async fn list_trains(State(state): State<AppState>) -> Json<TrainKeysResponse> {
    let mut numbers: Vec<String> = state
        .lookup
        .train_numbers()
        .iter()
        .map(|n| n.as_str().to_string())
        .collect();
    numbers.sort();
    Json(TrainKeysResponse { numbers })
}

/// Enumerate all locally-known station codes.
async fn list_stations(State(state): State<AppState>) -> Json<StationKeysResponse> {
    let mut codes: Vec<String> = state
        .lookup
        .station_codes()
        .iter()
        .map(|c| c.as_str().to_string())
        .collect();
    codes.sort();
    Json(StationKeysResponse { codes })
}

/// Search the directory by name, number, or code.
async fn search(
    State(state): State<AppState>,
    Query(req): Query<SearchRequest>,
) -> Json<SearchResponse> {
    let limit = req.limit.unwrap_or(10).min(50);
    let matches = state.directory.search(&req.q, limit).await;
    Json(SearchResponse::from(matches))
}

/// Look up the booking status for a PNR.
///
/// Pure proxy glue: every upstream failure collapses to "not found", the
/// only failure signal the site surfaces.
async fn pnr_status(
    State(state): State<AppState>,
    Path(pnr): Path<String>,
) -> Result<Json<PnrStatus>, AppError> {
    if !is_valid_pnr(&pnr) {
        return Err(AppError::BadRequest {
            message: format!("Invalid PNR: {}", pnr),
        });
    }

    let Some(client) = &state.pnr else {
        return Err(AppError::NotFound {
            message: "PNR status unavailable".to_string(),
        });
    };

    match client.fetch_status(&pnr).await {
        Ok(Some(status)) => Ok(Json(status)),
        Ok(None) => Err(AppError::NotFound {
            message: format!("PNR {} not found", pnr),
        }),
        Err(e) => {
            warn!(pnr = %pnr, error = %e, "PNR status lookup failed");
            Err(AppError::NotFound {
                message: "PNR status unavailable".to_string(),
            })
        }
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            warn!(%status, %message, "request failed");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
