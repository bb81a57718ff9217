//! Shared fixtures for integration tests.
#![allow(dead_code)]

use flightlog::models::{
    Aerodrome, Aircraft, AircraftSettings, CounterReading, CounterSeeds, FlightInput,
    FlightInputCounters, FlightNature, MemberRef, TroublesObservations,
};

pub fn aerodrome(identifier: &str, timezone: chrono_tz::Tz) -> Aerodrome {
    Aerodrome {
        identifier: identifier.to_string(),
        name: identifier.to_string(),
        timezone,
    }
}

pub fn member(id: &str) -> MemberRef {
    MemberRef {
        id: id.to_string(),
        firstname: "Erika".to_string(),
        lastname: "Beispiel".to_string(),
    }
}

pub fn test_aircraft(id: &str, settings: AircraftSettings) -> Aircraft {
    Aircraft {
        id: id.to_string(),
        registration: "HB-ABC".to_string(),
        settings,
        counters: CounterSeeds {
            flights: Some(100),
            landings: Some(250),
            flight_hours: Some(50000),
            engine_hours: Some(60000),
        },
    }
}

/// A flight entry that passes every synchronous check against default
/// settings: one hour on the flight-time meter, one landing, no troubles.
pub fn valid_flight_input() -> FlightInput {
    FlightInput {
        date: Some("2020-05-01".to_string()),
        pilot: Some(member("m1")),
        nature: Some(FlightNature::Local),
        departure_aerodrome: Some(aerodrome("LSZK", chrono_tz::Europe::Zurich)),
        destination_aerodrome: Some(aerodrome("LSZK", chrono_tz::Europe::Zurich)),
        block_off_time: Some("2020-05-01 10:00".to_string()),
        take_off_time: Some("2020-05-01 10:10".to_string()),
        landing_time: Some("2020-05-01 11:10".to_string()),
        block_on_time: Some("2020-05-01 11:15".to_string()),
        landings: Some(1),
        persons_on_board: Some(2),
        fuel_uplift: Some(0.0),
        preflight_check: Some(true),
        troubles_observations: Some(TroublesObservations::Nil),
        counters: FlightInputCounters {
            flight_time_counter: Some(CounterReading {
                start: Some(50000),
                end: Some(50100),
            }),
            engine_time_counter: None,
        },
        ..FlightInput::default()
    }
}

/// Shift every timestamp of the fixture to the given day/hour so successive
/// entries respect the chain ordering.
pub fn flight_input_at(day: u32, hour: u32) -> FlightInput {
    let mut input = valid_flight_input();
    input.date = Some(format!("2020-05-{day:02}"));
    input.block_off_time = Some(format!("2020-05-{day:02} {hour:02}:00"));
    input.take_off_time = Some(format!("2020-05-{day:02} {hour:02}:10"));
    input.landing_time = Some(format!("2020-05-{day:02} {:02}:10", hour + 1));
    input.block_on_time = Some(format!("2020-05-{day:02} {:02}:15", hour + 1));
    input
}
