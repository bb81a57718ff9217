//! Storage abstractions for aircraft and flight chains.
//!
//! The repository trait is the seam between the validation/reconciliation
//! core and whatever stores the logbook. The core only ever asks for the
//! previous flight of an aircraft and hands back an enriched record to
//! persist; everything else about storage is a collaborator concern.
//!
//! The module includes:
//! - `repository`: trait definition and error types
//! - `repositories::local`: in-memory implementation for unit testing and
//!   local development

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod repositories;
pub mod repository;

pub use repositories::LocalRepository;
pub use repository::{FlightRepository, RepositoryError, RepositoryResult};
