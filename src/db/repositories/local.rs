//! In-memory repository for unit testing and local development.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::db::repository::{
    ErrorContext, FlightRepository, RepositoryError, RepositoryResult,
};
use crate::models::{Aircraft, FlightRecord};

#[derive(Debug, Clone)]
struct AircraftEntry {
    aircraft: Aircraft,
    flights: Vec<FlightRecord>,
}

/// In-memory implementation of [`FlightRepository`].
///
/// Flight ids are sequential per repository instance. `store_flight` appends
/// the record and advances the aircraft's counter seeds under a single write
/// lock, which serializes flight creation per aircraft.
#[derive(Debug, Default)]
pub struct LocalRepository {
    state: RwLock<HashMap<String, AircraftEntry>>,
    next_flight_id: AtomicU64,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn missing_aircraft(aircraft_id: &str, operation: &str) -> RepositoryError {
        RepositoryError::not_found_with_context(
            format!("aircraft `{aircraft_id}` is not registered"),
            ErrorContext::new(operation)
                .with_entity("aircraft")
                .with_entity_id(aircraft_id),
        )
    }
}

#[async_trait]
impl FlightRepository for LocalRepository {
    async fn store_aircraft(&self, aircraft: Aircraft) -> RepositoryResult<()> {
        let mut state = self.state.write();
        match state.get_mut(&aircraft.id) {
            Some(entry) => entry.aircraft = aircraft,
            None => {
                state.insert(
                    aircraft.id.clone(),
                    AircraftEntry {
                        aircraft,
                        flights: Vec::new(),
                    },
                );
            }
        }
        Ok(())
    }

    async fn fetch_aircraft(&self, aircraft_id: &str) -> RepositoryResult<Option<Aircraft>> {
        Ok(self
            .state
            .read()
            .get(aircraft_id)
            .map(|entry| entry.aircraft.clone()))
    }

    async fn latest_flight(&self, aircraft_id: &str) -> RepositoryResult<Option<FlightRecord>> {
        let state = self.state.read();
        let entry = state
            .get(aircraft_id)
            .ok_or_else(|| Self::missing_aircraft(aircraft_id, "latest_flight"))?;
        Ok(entry
            .flights
            .iter()
            .filter(|flight| !flight.deleted)
            .max_by_key(|flight| flight.block_off_time)
            .cloned())
    }

    async fn fetch_flights(&self, aircraft_id: &str) -> RepositoryResult<Vec<FlightRecord>> {
        let state = self.state.read();
        let entry = state
            .get(aircraft_id)
            .ok_or_else(|| Self::missing_aircraft(aircraft_id, "fetch_flights"))?;
        let mut flights = entry.flights.clone();
        flights.sort_by(|a, b| b.block_off_time.cmp(&a.block_off_time));
        Ok(flights)
    }

    async fn store_flight(
        &self,
        aircraft_id: &str,
        mut record: FlightRecord,
    ) -> RepositoryResult<FlightRecord> {
        let mut state = self.state.write();
        let entry = state
            .get_mut(aircraft_id)
            .ok_or_else(|| Self::missing_aircraft(aircraft_id, "store_flight"))?;

        let sequence = self.next_flight_id.fetch_add(1, Ordering::Relaxed) + 1;
        record.id = format!("f{sequence:06}");

        let seeds = &mut entry.aircraft.counters;
        seeds.flights = Some(record.counters.flights.end);
        seeds.landings = Some(record.counters.landings.end);
        seeds.flight_hours = Some(record.counters.flight_hours.end);
        if let Some(engine_hours) = record.counters.engine_hours {
            seeds.engine_hours = Some(engine_hours.end);
        }

        entry.flights.push(record.clone());
        Ok(record)
    }

    async fn delete_flight(&self, aircraft_id: &str, flight_id: &str) -> RepositoryResult<()> {
        let mut state = self.state.write();
        let entry = state
            .get_mut(aircraft_id)
            .ok_or_else(|| Self::missing_aircraft(aircraft_id, "delete_flight"))?;
        let flight = entry
            .flights
            .iter_mut()
            .find(|flight| flight.id == flight_id)
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("flight `{flight_id}` does not exist"),
                    ErrorContext::new("delete_flight")
                        .with_entity("flight")
                        .with_entity_id(flight_id),
                )
            })?;
        flight.deleted = true;
        Ok(())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
