//! Repository trait for aircraft and flight-chain storage.

pub mod error;

use async_trait::async_trait;

use crate::models::{Aircraft, FlightRecord};

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

/// Storage collaborator for aircraft and their flight chains.
///
/// `latest_flight` is the history provider the cross-record ordering check
/// depends on. `store_flight` persists a record and advances the aircraft's
/// counter seeds to the record's interval ends in one step; for a given
/// aircraft, implementations must not interleave two `store_flight` calls,
/// so a validated snapshot of the seeds stays consistent through the
/// read-validate-derive-write sequence.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Insert or update an aircraft document. Stored flights of an existing
    /// aircraft are preserved.
    async fn store_aircraft(&self, aircraft: Aircraft) -> RepositoryResult<()>;

    /// Fetch an aircraft document, or `None` if it is not registered.
    async fn fetch_aircraft(&self, aircraft_id: &str) -> RepositoryResult<Option<Aircraft>>;

    /// The chronologically last non-deleted flight of an aircraft, ordered by
    /// block-off time descending, or `None` when the logbook is empty.
    async fn latest_flight(&self, aircraft_id: &str) -> RepositoryResult<Option<FlightRecord>>;

    /// All flights of an aircraft, newest first. Includes soft-deleted
    /// records; callers filter by the `deleted` flag where needed.
    async fn fetch_flights(&self, aircraft_id: &str) -> RepositoryResult<Vec<FlightRecord>>;

    /// Persist a new flight record and advance the aircraft's counter seeds
    /// to the record's interval ends. The record's `id` is assigned here;
    /// the stored record is returned.
    async fn store_flight(
        &self,
        aircraft_id: &str,
        record: FlightRecord,
    ) -> RepositoryResult<FlightRecord>;

    /// Soft-delete a flight. The record stays stored but becomes invisible
    /// to the ordering check.
    async fn delete_flight(&self, aircraft_id: &str, flight_id: &str) -> RepositoryResult<()>;

    /// Whether the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
