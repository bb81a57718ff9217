//! End-to-end tests of the flight chain: creation, ordering enforcement,
//! seed advancement, and soft deletion through the service layer backed by
//! the in-memory repository.

use flightlog::db::repositories::LocalRepository;
use flightlog::db::repository::FlightRepository;
use flightlog::models::{AircraftSettings, CounterReading, Interval};
use flightlog::services::{create_flight, delete_flight, FlightLogError, FlightOutcome};

mod support;

use support::{flight_input_at, test_aircraft, valid_flight_input};

fn created(outcome: FlightOutcome) -> flightlog::models::FlightRecord {
    match outcome {
        FlightOutcome::Created(record) => record,
        FlightOutcome::Invalid(errors) => panic!("expected created flight, got {errors:?}"),
    }
}

async fn repo_with_aircraft(settings: AircraftSettings) -> LocalRepository {
    let repo = LocalRepository::new();
    repo.store_aircraft(test_aircraft("hb-abc", settings))
        .await
        .unwrap();
    repo
}

#[tokio::test]
async fn test_create_flight_derives_and_stores() {
    let repo = repo_with_aircraft(AircraftSettings::default()).await;

    let record = created(
        create_flight(&repo, "hb-abc", valid_flight_input())
            .await
            .unwrap(),
    );

    assert_eq!(record.id, "f000001");
    assert_eq!(record.counters.flights, Interval::new(100, 101));
    assert_eq!(record.counters.landings, Interval::new(250, 251));
    // Meter reading delta of 100 hundredths.
    assert_eq!(record.counters.flight_hours, Interval::new(50000, 50100));
    assert!(record.counters.engine_hours.is_none());
    assert!(!record.deleted);

    // The aircraft's seeds advanced to the record's interval ends.
    let aircraft = repo.fetch_aircraft("hb-abc").await.unwrap().unwrap();
    assert_eq!(aircraft.counters.flights, Some(101));
    assert_eq!(aircraft.counters.landings, Some(251));
    assert_eq!(aircraft.counters.flight_hours, Some(50100));
    // Engine seed untouched without an engine reading.
    assert_eq!(aircraft.counters.engine_hours, Some(60000));
}

#[tokio::test]
async fn test_chain_links_consecutive_flights() {
    let repo = repo_with_aircraft(AircraftSettings::default()).await;

    let first = created(
        create_flight(&repo, "hb-abc", flight_input_at(1, 10))
            .await
            .unwrap(),
    );
    let second = created(
        create_flight(&repo, "hb-abc", flight_input_at(2, 10))
            .await
            .unwrap(),
    );

    assert_eq!(second.counters.flights.start, first.counters.flights.end);
    assert_eq!(second.counters.landings.start, first.counters.landings.end);
    assert_eq!(
        second.counters.flight_hours.start,
        first.counters.flight_hours.end
    );
    assert_eq!(second.id, "f000002");

    let flights = repo.fetch_flights("hb-abc").await.unwrap();
    assert_eq!(flights.len(), 2);
    // Newest first.
    assert_eq!(flights[0].id, second.id);
}

#[tokio::test]
async fn test_out_of_order_flight_is_rejected_and_not_stored() {
    let repo = repo_with_aircraft(AircraftSettings::default()).await;

    created(
        create_flight(&repo, "hb-abc", flight_input_at(2, 10))
            .await
            .unwrap(),
    );
    let before = repo.fetch_aircraft("hb-abc").await.unwrap().unwrap();

    // Blocks off the day before the stored flight blocked on.
    let outcome = create_flight(&repo, "hb-abc", flight_input_at(1, 10))
        .await
        .unwrap();
    match outcome {
        FlightOutcome::Invalid(errors) => {
            assert_eq!(
                errors.get("blockOffTime").map(|c| c.as_str()),
                Some("not_before_block_on_time_last_flight")
            );
        }
        FlightOutcome::Created(record) => panic!("expected rejection, stored {}", record.id),
    }

    assert_eq!(repo.fetch_flights("hb-abc").await.unwrap().len(), 1);
    let after = repo.fetch_aircraft("hb-abc").await.unwrap().unwrap();
    assert_eq!(after.counters, before.counters);
}

#[tokio::test]
async fn test_deleted_flight_leaves_the_chain() {
    let repo = repo_with_aircraft(AircraftSettings::default()).await;

    let late = created(
        create_flight(&repo, "hb-abc", flight_input_at(2, 10))
            .await
            .unwrap(),
    );
    delete_flight(&repo, "hb-abc", &late.id).await.unwrap();

    // With the later flight soft-deleted, an earlier block-off is accepted.
    let outcome = create_flight(&repo, "hb-abc", flight_input_at(1, 10))
        .await
        .unwrap();
    let record = created(outcome);
    // The deleted record still occupies its chain slot; the new flight seeds
    // from the advanced counters.
    assert_eq!(record.counters.flights.start, late.counters.flights.end);

    let flights = repo.fetch_flights("hb-abc").await.unwrap();
    assert_eq!(flights.len(), 2);
    assert!(flights.iter().any(|f| f.id == late.id && f.deleted));
}

#[tokio::test]
async fn test_engine_hours_flow_when_enabled() {
    let settings = AircraftSettings {
        engine_hours_counter_enabled: true,
        ..AircraftSettings::default()
    };
    let repo = repo_with_aircraft(settings).await;

    let mut input = valid_flight_input();
    input.counters.engine_time_counter = Some(CounterReading {
        start: Some(70000),
        end: Some(70110),
    });
    let record = created(create_flight(&repo, "hb-abc", input).await.unwrap());

    assert_eq!(record.counters.engine_hours, Some(Interval::new(60000, 60110)));
    assert_eq!(
        record.counters.engine_time_counter,
        Some(Interval::new(70000, 70110))
    );

    let aircraft = repo.fetch_aircraft("hb-abc").await.unwrap().unwrap();
    assert_eq!(aircraft.counters.engine_hours, Some(60110));
}

#[tokio::test]
async fn test_engine_reading_required_when_enabled() {
    let settings = AircraftSettings {
        engine_hours_counter_enabled: true,
        ..AircraftSettings::default()
    };
    let repo = repo_with_aircraft(settings).await;

    let outcome = create_flight(&repo, "hb-abc", valid_flight_input())
        .await
        .unwrap();
    match outcome {
        FlightOutcome::Invalid(errors) => {
            assert!(errors.contains("counters.engineTimeCounter.start"));
            assert!(errors.contains("counters.engineTimeCounter.end"));
        }
        FlightOutcome::Created(_) => panic!("expected rejection"),
    }
}

#[tokio::test]
async fn test_unknown_aircraft_fails() {
    let repo = LocalRepository::new();
    let result = create_flight(&repo, "missing", valid_flight_input()).await;
    assert!(matches!(result, Err(FlightLogError::UnknownAircraft(id)) if id == "missing"));
}

#[tokio::test]
async fn test_field_errors_reported_before_ordering() {
    let repo = repo_with_aircraft(AircraftSettings::default()).await;
    created(
        create_flight(&repo, "hb-abc", flight_input_at(2, 10))
            .await
            .unwrap(),
    );

    // Out of order AND missing preflight check; only the field error shows.
    let mut input = flight_input_at(1, 10);
    input.preflight_check = None;
    let outcome = create_flight(&repo, "hb-abc", input).await.unwrap();
    match outcome {
        FlightOutcome::Invalid(errors) => {
            assert_eq!(
                errors.get("preflightCheck").map(|c| c.as_str()),
                Some("required")
            );
            assert!(!errors.contains("blockOffTime"));
        }
        FlightOutcome::Created(_) => panic!("expected rejection"),
    }
}
