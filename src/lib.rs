//! # Flightlog Backend
//!
//! Flight-record validation and counter reconciliation engine for
//! aircraft-club logbooks.
//!
//! Every flight entered into an aircraft's logbook is validated against
//! temporal, numeric, and sequencing rules, and the aircraft's cumulative
//! operational counters (flights, landings, flight hours, engine hours) are
//! derived from the chain of flight records and externally-read mechanical
//! counters. The optional REST API exposes the engine via Axum.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain types (flight records, counters, aircraft settings)
//!   and timezone-aware time utilities
//! - [`services`]: Business logic: field validation, cross-record ordering
//!   checks, counter derivation, and flight creation orchestration
//! - [`db`]: Repository trait and in-memory implementation
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Counter chain
//!
//! Each flight's counters form an interval `{start, end}` seeded from the
//! previous flight's `end`. The chain is append-only: counters are computed
//! once at creation and never mutated afterwards. Editing timing fields of a
//! stored flight is not supported; flights are removed from the chain only by
//! soft deletion.

pub mod db;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod config;

#[cfg(feature = "http-server")]
pub mod http;
