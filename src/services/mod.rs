//! Service layer for business logic and orchestration.
//!
//! The validation and reconciliation services are pure over their explicit
//! inputs; `flight_log` ties them to the repository for the full
//! validate-derive-store sequence.

pub mod counters;

pub mod flight_log;

pub mod validation;

pub use counters::{derive_counters, CounterError};
pub use flight_log::{create_flight, delete_flight, FlightLogError, FlightOutcome};
pub use validation::{
    validate_flight, validate_ordering, validate_sync, ValidationCode, ValidationErrors,
};
