//! Flight creation orchestration.
//!
//! Wires the validation phases, the counter reconciliation engine, and the
//! repository into the single entry point the API layer calls. The sequence
//! for one aircraft must not interleave with another creation for the same
//! aircraft; the repository's `store_flight` is the serialization point.

use crate::db::repository::{FlightRepository, RepositoryError};
use crate::models::time;
use crate::models::{CounterSet, FlightInput, FlightRecord};
use crate::services::counters::{derive_counters, CounterError};
use crate::services::validation::{validate_flight, ValidationErrors};

/// Outcome of a flight-creation request.
#[derive(Debug, Clone)]
pub enum FlightOutcome {
    /// The record was stored; counters are derived and the aircraft's seeds
    /// advanced.
    Created(FlightRecord),
    /// Validation rejected the entry; nothing was stored.
    Invalid(ValidationErrors),
}

/// Failures outside the validation contract.
#[derive(Debug, thiserror::Error)]
pub enum FlightLogError {
    #[error("aircraft `{0}` is not registered")]
    UnknownAircraft(String),
    /// A field validation guarantees was absent while assembling the record.
    /// Indicates a bug, not a user error.
    #[error("validated flight entry lost required field `{0}`")]
    IncompleteRecord(&'static str),
    #[error(transparent)]
    Counter(#[from] CounterError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Validate a flight entry, derive its counters from the aircraft's current
/// seeds, and store the enriched record.
pub async fn create_flight(
    repository: &dyn FlightRepository,
    aircraft_id: &str,
    input: FlightInput,
) -> Result<FlightOutcome, FlightLogError> {
    let aircraft = repository
        .fetch_aircraft(aircraft_id)
        .await?
        .ok_or_else(|| FlightLogError::UnknownAircraft(aircraft_id.to_string()))?;

    let errors = validate_flight(&input, &aircraft.settings, aircraft_id, repository).await?;
    if !errors.is_empty() {
        log::debug!(
            "aircraft {aircraft_id}: rejected flight entry with {} error(s)",
            errors.len()
        );
        return Ok(FlightOutcome::Invalid(errors));
    }

    let counters = derive_counters(&aircraft.counters, &input)?;
    let record = build_record(input, counters)?;
    let stored = repository.store_flight(aircraft_id, record).await?;
    log::info!(
        "aircraft {aircraft_id}: stored flight {} (#{})",
        stored.id,
        stored.counters.flights.end
    );
    Ok(FlightOutcome::Created(stored))
}

/// Soft-delete a flight, removing it from the chain's visibility.
pub async fn delete_flight(
    repository: &dyn FlightRepository,
    aircraft_id: &str,
    flight_id: &str,
) -> Result<(), FlightLogError> {
    repository.delete_flight(aircraft_id, flight_id).await?;
    log::info!("aircraft {aircraft_id}: deleted flight {flight_id}");
    Ok(())
}

/// Assemble the immutable record from a validated entry and its derived
/// counters. The repository assigns the id on store.
fn build_record(input: FlightInput, counters: CounterSet) -> Result<FlightRecord, FlightLogError> {
    fn required<T>(value: Option<T>, field: &'static str) -> Result<T, FlightLogError> {
        value.ok_or(FlightLogError::IncompleteRecord(field))
    }

    let date = required(
        input.date.as_deref().and_then(time::parse_date),
        "date",
    )?;
    let block_off_time = required(
        input.block_off_time.as_deref().and_then(time::parse_date_time),
        "blockOffTime",
    )?;
    let take_off_time = required(
        input.take_off_time.as_deref().and_then(time::parse_date_time),
        "takeOffTime",
    )?;
    let landing_time = required(
        input.landing_time.as_deref().and_then(time::parse_date_time),
        "landingTime",
    )?;
    let block_on_time = required(
        input.block_on_time.as_deref().and_then(time::parse_date_time),
        "blockOnTime",
    )?;
    let landings = required(input.landings.filter(|n| *n >= 1), "landings")? as u32;
    let persons_on_board =
        required(input.persons_on_board.filter(|n| *n >= 1), "personsOnBoard")? as u32;

    Ok(FlightRecord {
        id: String::new(),
        date,
        pilot: required(input.pilot, "pilot")?,
        instructor: input.instructor,
        nature: required(input.nature, "nature")?,
        departure_aerodrome: required(input.departure_aerodrome, "departureAerodrome")?,
        destination_aerodrome: required(input.destination_aerodrome, "destinationAerodrome")?,
        block_off_time,
        take_off_time,
        landing_time,
        block_on_time,
        landings,
        persons_on_board,
        fuel_uplift: required(input.fuel_uplift, "fuelUplift")?,
        fuel_type: input.fuel_type,
        oil_uplift: input.oil_uplift,
        preflight_check: required(input.preflight_check.filter(|v| *v), "preflightCheck")?,
        troubles_observations: required(input.troubles_observations, "troublesObservations")?,
        techlog_entry_description: input.techlog_entry_description,
        techlog_entry_status: input.techlog_entry_status,
        remarks: input.remarks,
        counters,
        deleted: false,
    })
}
