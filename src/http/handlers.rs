//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{
    FlightListResponse, HealthResponse, RegisterAircraftRequest, ValidationFailureResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{Aircraft, FlightInput};
use crate::services::{self, FlightOutcome};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Verify the service is running and the repository is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Aircraft
// =============================================================================

/// PUT /v1/aircrafts/{aircraft_id}
///
/// Register an aircraft or update its settings. Stored flights are kept.
pub async fn put_aircraft(
    State(state): State<AppState>,
    Path(aircraft_id): Path<String>,
    Json(request): Json<RegisterAircraftRequest>,
) -> HandlerResult<Aircraft> {
    let aircraft = Aircraft {
        id: aircraft_id,
        registration: request.registration,
        settings: request.settings,
        counters: request.counters,
    };
    state.repository.store_aircraft(aircraft.clone()).await?;
    Ok(Json(aircraft))
}

/// GET /v1/aircrafts/{aircraft_id}
pub async fn get_aircraft(
    State(state): State<AppState>,
    Path(aircraft_id): Path<String>,
) -> HandlerResult<Aircraft> {
    let aircraft = state
        .repository
        .fetch_aircraft(&aircraft_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("aircraft `{aircraft_id}` is not registered")))?;
    Ok(Json(aircraft))
}

// =============================================================================
// Flights
// =============================================================================

/// GET /v1/aircrafts/{aircraft_id}/flights
///
/// List the aircraft's flights, newest first, soft-deleted records included.
pub async fn list_flights(
    State(state): State<AppState>,
    Path(aircraft_id): Path<String>,
) -> HandlerResult<FlightListResponse> {
    let flights = state.repository.fetch_flights(&aircraft_id).await?;
    let total = flights.len();
    Ok(Json(FlightListResponse { flights, total }))
}

/// POST /v1/aircrafts/{aircraft_id}/flights
///
/// Validate a flight entry, derive counters, and store the record. Returns
/// 201 with the stored record, or 422 with the per-field validation errors.
pub async fn create_flight(
    State(state): State<AppState>,
    Path(aircraft_id): Path<String>,
    Json(input): Json<FlightInput>,
) -> Result<Response, AppError> {
    let outcome =
        services::create_flight(state.repository.as_ref(), &aircraft_id, input).await?;
    match outcome {
        FlightOutcome::Created(record) => {
            Ok((StatusCode::CREATED, Json(record)).into_response())
        }
        FlightOutcome::Invalid(errors) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationFailureResponse { errors }),
        )
            .into_response()),
    }
}

/// DELETE /v1/aircrafts/{aircraft_id}/flights/{flight_id}
///
/// Soft-delete a flight; it stays stored but leaves the counter chain's
/// visibility.
pub async fn delete_flight(
    State(state): State<AppState>,
    Path((aircraft_id, flight_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    services::delete_flight(state.repository.as_ref(), &aircraft_id, &flight_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
