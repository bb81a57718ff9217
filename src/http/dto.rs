//! Data Transfer Objects for the HTTP API.
//!
//! The domain types already serialize with their wire names, so most
//! payloads are re-exported directly; this module adds the request/response
//! envelopes.

use serde::{Deserialize, Serialize};

// Re-export domain types that appear in API payloads.
pub use crate::models::{
    Aircraft, AircraftSettings, CounterSeeds, FlightInput, FlightRecord, FuelType,
};
pub use crate::services::ValidationErrors;

/// Request body for registering or updating an aircraft.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAircraftRequest {
    pub registration: String,
    #[serde(default)]
    pub settings: AircraftSettings,
    #[serde(default)]
    pub counters: CounterSeeds,
}

/// Response for flight listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightListResponse {
    pub flights: Vec<FlightRecord>,
    pub total: usize,
}

/// Response body when validation rejects a flight entry.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationFailureResponse {
    pub errors: ValidationErrors,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}
