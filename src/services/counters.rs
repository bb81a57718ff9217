//! Counter reconciliation engine.
//!
//! Derives the cumulative counter set stored with a new flight from the
//! aircraft's current counter seeds and the flight's raw inputs. A failure
//! here is a contract violation: the inputs have already passed validation,
//! so a missing seed or timestamp indicates a chain-integrity bug upstream,
//! and the operation must abort instead of storing a wrong counter.

use chrono::NaiveDateTime;

use crate::models::time;
use crate::models::{CounterReading, CounterSeeds, CounterSet, FlightInput, Interval};

/// Contract violation while deriving counters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CounterError {
    #[error("counter seed `{0}` missing")]
    MissingSeed(&'static str),
    #[error("flight field `{0}` missing or malformed")]
    MissingField(&'static str),
    #[error("meter reading `{0}` is incomplete")]
    IncompleteReading(&'static str),
}

/// Derive the counter set for a new flight.
///
/// - `flights` advances by exactly one.
/// - `landings` advances by the flight's landing count.
/// - `flightHours` advances by the flight-time meter delta when a reading was
///   supplied, otherwise by the take-off to landing wall-clock duration.
/// - `engineHours` advances only from an explicit engine-time meter reading;
///   it is never derived from wall-clock time.
/// - Raw meter readings are passed through unchanged for audit.
///
/// Pure function of its two inputs; no side effects.
pub fn derive_counters(
    seeds: &CounterSeeds,
    input: &FlightInput,
) -> Result<CounterSet, CounterError> {
    let flights_start = seeds.flights.ok_or(CounterError::MissingSeed("flights"))?;
    let landings_start = seeds.landings.ok_or(CounterError::MissingSeed("landings"))?;
    let flight_hours_start = seeds
        .flight_hours
        .ok_or(CounterError::MissingSeed("flightHours"))?;

    let landings = input.landings.ok_or(CounterError::MissingField("landings"))?;
    let take_off = required_time(input.take_off_time.as_deref(), "takeOffTime")?;
    let landing = required_time(input.landing_time.as_deref(), "landingTime")?;
    // Block times do not enter the arithmetic, but an entry without them
    // never passed validation and must not reach the chain.
    required_time(input.block_off_time.as_deref(), "blockOffTime")?;
    required_time(input.block_on_time.as_deref(), "blockOnTime")?;

    let flight_time_counter =
        reading_interval(input.counters.flight_time_counter, "flightTimeCounter")?;
    let engine_time_counter =
        reading_interval(input.counters.engine_time_counter, "engineTimeCounter")?;

    let flight_duration = match flight_time_counter {
        Some(reading) => reading.delta(),
        None => time::duration_in_hundredths_of_hour(take_off, landing),
    };

    let engine_hours = match engine_time_counter {
        Some(reading) => {
            let start = seeds
                .engine_hours
                .ok_or(CounterError::MissingSeed("engineHours"))?;
            Some(Interval::new(start, start + reading.delta()))
        }
        None => None,
    };

    Ok(CounterSet {
        flights: Interval::new(flights_start, flights_start + 1),
        landings: Interval::new(landings_start, landings_start + landings),
        flight_hours: Interval::new(flight_hours_start, flight_hours_start + flight_duration),
        engine_hours,
        flight_time_counter,
        engine_time_counter,
    })
}

fn required_time(
    value: Option<&str>,
    field: &'static str,
) -> Result<NaiveDateTime, CounterError> {
    value
        .and_then(time::parse_date_time)
        .ok_or(CounterError::MissingField(field))
}

fn reading_interval(
    reading: Option<CounterReading>,
    field: &'static str,
) -> Result<Option<Interval>, CounterError> {
    match reading {
        None => Ok(None),
        Some(reading) => match (reading.start, reading.end) {
            (Some(start), Some(end)) => Ok(Some(Interval::new(start, end))),
            _ => Err(CounterError::IncompleteReading(field)),
        },
    }
}

#[cfg(test)]
#[path = "counters_tests.rs"]
mod counters_tests;
