//! Flight entry validation.
//!
//! Validation runs in two phases, and both must pass before a flight is
//! accepted:
//!
//! 1. synchronous field and consistency checks ([`validate_sync`])
//! 2. an asynchronous ordering check against the chronologically previous
//!    flight of the same aircraft ([`validate_ordering`])
//!
//! Violations are collected as data keyed by field path, with stable codes
//! the presentation layer maps to localized messages. Independent errors are
//! all reported at once; a dependent check (e.g. an ordering comparison) only
//! runs when its prerequisite fields passed their own checks, so one
//! malformed input does not cascade into nonsensical follow-up errors.
//!
//! The second phase only runs when the first produced no errors, which both
//! avoids an unnecessary history lookup and keeps ordering errors from being
//! reported on top of basic field errors.

use std::collections::btree_map;
use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::db::repository::{FlightRepository, RepositoryResult};
use crate::models::time;
use crate::models::{AircraftSettings, CounterReading, FlightInput, TroublesObservations};

/// Stable validation error codes. The string forms are the contract with the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationCode {
    Required,
    Invalid,
    NotBeforeLockDate,
    NotBeforeBlockOffTime,
    NotBeforeTakeOffTime,
    NotBeforeLandingTime,
    NotBeforeStartCounter,
    NotBeforeBlockOnTimeLastFlight,
}

impl ValidationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationCode::Required => "required",
            ValidationCode::Invalid => "invalid",
            ValidationCode::NotBeforeLockDate => "not_before_lock_date",
            ValidationCode::NotBeforeBlockOffTime => "not_before_block_off_time",
            ValidationCode::NotBeforeTakeOffTime => "not_before_take_off_time",
            ValidationCode::NotBeforeLandingTime => "not_before_landing_time",
            ValidationCode::NotBeforeStartCounter => "not_before_start_counter",
            ValidationCode::NotBeforeBlockOnTimeLastFlight => {
                "not_before_block_on_time_last_flight"
            }
        }
    }
}

/// Field-path to error-code map accumulated during validation. Empty means
/// the entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, ValidationCode>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<ValidationCode> {
        self.0.get(field).copied()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ValidationCode> {
        self.0.iter()
    }

    fn set(&mut self, field: &str, code: ValidationCode) {
        self.0.insert(field.to_string(), code);
    }
}

/// Phase 1: synchronous field and consistency validation.
pub fn validate_sync(data: &FlightInput, settings: &AircraftSettings) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    match data.date.as_deref().and_then(time::parse_date) {
        None => errors.set("date", ValidationCode::Invalid),
        Some(date) => {
            if let Some(lock_date) = settings.lock_date {
                if date < lock_date {
                    errors.set("date", ValidationCode::NotBeforeLockDate);
                }
            }
        }
    }

    if data.pilot.is_none() {
        errors.set("pilot", ValidationCode::Required);
    }
    if data.nature.is_none() {
        errors.set("nature", ValidationCode::Required);
    }
    if data.departure_aerodrome.is_none() {
        errors.set("departureAerodrome", ValidationCode::Required);
    }
    if data.destination_aerodrome.is_none() {
        errors.set("destinationAerodrome", ValidationCode::Required);
    }

    let block_off = checked_date_time(&mut errors, "blockOffTime", data.block_off_time.as_deref());
    let take_off = checked_date_time(&mut errors, "takeOffTime", data.take_off_time.as_deref());
    let landing = checked_date_time(&mut errors, "landingTime", data.landing_time.as_deref());
    let block_on = checked_date_time(&mut errors, "blockOnTime", data.block_on_time.as_deref());

    let departure_tz = data.departure_aerodrome.as_ref().map(|a| a.timezone);
    let destination_tz = data.destination_aerodrome.as_ref().map(|a| a.timezone);

    // Each ordering check only fires when both operands parsed and the
    // earlier check in the chain did not already flag its field.
    if let (Some(off), Some(take), Some(dep_tz)) = (block_off, take_off, departure_tz) {
        if !errors.contains("takeOffTime") && time::is_before(take, dep_tz, off, dep_tz) {
            errors.set("takeOffTime", ValidationCode::NotBeforeBlockOffTime);
        }
    }
    if let (Some(take), Some(land), Some(dep_tz), Some(dest_tz)) =
        (take_off, landing, departure_tz, destination_tz)
    {
        if !errors.contains("takeOffTime")
            && !errors.contains("landingTime")
            && time::is_before(land, dest_tz, take, dep_tz)
        {
            errors.set("landingTime", ValidationCode::NotBeforeTakeOffTime);
        }
    }
    if let (Some(land), Some(on), Some(dest_tz)) = (landing, block_on, destination_tz) {
        if !errors.contains("landingTime")
            && !errors.contains("blockOnTime")
            && time::is_before(on, dest_tz, land, dest_tz)
        {
            errors.set("blockOnTime", ValidationCode::NotBeforeLandingTime);
        }
    }

    if !matches!(data.landings, Some(n) if n >= 1) {
        errors.set("landings", ValidationCode::Required);
    }
    if !matches!(data.persons_on_board, Some(n) if n >= 1) {
        errors.set("personsOnBoard", ValidationCode::Required);
    }

    match data.fuel_uplift {
        Some(uplift) if uplift >= 0.0 => {
            let fuel_type_blank = data
                .fuel_type
                .as_deref()
                .map_or(true, |value| value.trim().is_empty());
            if uplift > 0.0 && fuel_type_blank {
                errors.set("fuelType", ValidationCode::Required);
            }
        }
        _ => errors.set("fuelUplift", ValidationCode::Required),
    }

    if let Some(uplift) = data.oil_uplift {
        if uplift < 0.0 {
            errors.set("oilUplift", ValidationCode::Invalid);
        }
    }

    check_counter_reading(
        &mut errors,
        "counters.flightTimeCounter",
        data.counters.flight_time_counter,
    );
    if settings.engine_hours_counter_enabled {
        check_counter_reading(
            &mut errors,
            "counters.engineTimeCounter",
            data.counters.engine_time_counter,
        );
    }

    if data.preflight_check != Some(true) {
        errors.set("preflightCheck", ValidationCode::Required);
    }

    match data.troubles_observations {
        None => errors.set("troublesObservations", ValidationCode::Required),
        Some(TroublesObservations::Troubles) => {
            if settings.techlog_enabled && data.techlog_entry_status.is_none() {
                errors.set("techlogEntryStatus", ValidationCode::Required);
            }
            let description_blank = data
                .techlog_entry_description
                .as_deref()
                .map_or(true, |value| value.trim().is_empty());
            if description_blank {
                errors.set("techlogEntryDescription", ValidationCode::Required);
            }
        }
        Some(TroublesObservations::Nil) => {}
    }

    errors
}

/// Phase 2: ordering check against the previous flight of the aircraft.
///
/// Only new records are checked; timing fields of stored flights are
/// immutable, so an amendment cannot change its position in the chain. The
/// comparison is made on true instants: the new flight's block-off in its
/// departure timezone against the previous flight's block-on in that
/// flight's destination timezone.
pub async fn validate_ordering(
    data: &FlightInput,
    aircraft_id: &str,
    repository: &dyn FlightRepository,
) -> RepositoryResult<ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if data.id.is_some() {
        return Ok(errors);
    }

    let Some(last_flight) = repository.latest_flight(aircraft_id).await? else {
        return Ok(errors);
    };

    // Both guaranteed by phase 1; bail out quietly if phase 1 was skipped.
    let block_off = data.block_off_time.as_deref().and_then(time::parse_date_time);
    let (Some(block_off), Some(departure)) = (block_off, data.departure_aerodrome.as_ref()) else {
        return Ok(errors);
    };

    let before_last = time::is_before(
        block_off,
        departure.timezone,
        last_flight.block_on_time,
        last_flight.destination_aerodrome.timezone,
    );
    log::debug!(
        "aircraft {aircraft_id}: block off {block_off} ({}) vs last block on {} ({}): before={before_last}",
        departure.timezone,
        last_flight.block_on_time,
        last_flight.destination_aerodrome.timezone,
    );
    if before_last {
        errors.set(
            "blockOffTime",
            ValidationCode::NotBeforeBlockOnTimeLastFlight,
        );
    }

    Ok(errors)
}

/// Run both phases. The ordering check only runs when the synchronous phase
/// produced no errors.
pub async fn validate_flight(
    data: &FlightInput,
    settings: &AircraftSettings,
    aircraft_id: &str,
    repository: &dyn FlightRepository,
) -> RepositoryResult<ValidationErrors> {
    let errors = validate_sync(data, settings);
    if !errors.is_empty() {
        return Ok(errors);
    }
    validate_ordering(data, aircraft_id, repository).await
}

fn checked_date_time(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&str>,
) -> Option<NaiveDateTime> {
    let parsed = value.and_then(time::parse_date_time);
    if parsed.is_none() {
        errors.set(field, ValidationCode::Invalid);
    }
    parsed
}

fn check_counter_reading(
    errors: &mut ValidationErrors,
    prefix: &str,
    reading: Option<CounterReading>,
) {
    let start = reading.and_then(|r| r.start);
    let end = reading.and_then(|r| r.end);
    if start.is_none() {
        errors.set(&format!("{prefix}.start"), ValidationCode::Required);
    }
    if end.is_none() {
        errors.set(&format!("{prefix}.end"), ValidationCode::Required);
    }
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            errors.set(&format!("{prefix}.end"), ValidationCode::NotBeforeStartCounter);
        }
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod validation_tests;
