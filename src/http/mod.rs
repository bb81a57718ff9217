//! HTTP server module for the flightlog backend.
//!
//! An axum-based REST API over the service layer and repository. The engine
//! itself owns no wire format beyond the JSON shapes of the domain types;
//! this module adds request/response envelopes, error mapping, and the
//! router middleware stack.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
