//! Flight record domain types.

use chrono::{NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::counters::{CounterSet, FlightInputCounters};
use super::time::date_time_format;

/// Aerodrome reference carried on both ends of a flight. The timezone is the
/// IANA identifier of the aerodrome's location and governs how that end's
/// naive timestamps are interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aerodrome {
    /// ICAO location indicator, e.g. `LSZK`.
    pub identifier: String,
    pub name: String,
    pub timezone: Tz,
}

/// Club member snapshot referenced by a flight as pilot or instructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRef {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
}

/// Nature of a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightNature {
    Local,
    Training,
    Crosscountry,
    Transfer,
}

/// Whether the crew observed troubles during the flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TroublesObservations {
    Nil,
    Troubles,
}

/// Status of the techlog entry opened for an observed trouble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechlogEntryStatus {
    Open,
    Closed,
    Deferred,
}

/// Raw flight entry as submitted for creation.
///
/// Every field is optional at this stage; `services::validation` decides
/// which are required and reports violations per field path. Date and time
/// fields stay strings here because a malformed value must surface as an
/// `invalid` validation code, not as a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlightInput {
    /// Present when an existing record is amended. Timing fields of stored
    /// flights are immutable, so the cross-record ordering check only runs
    /// when this is `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub date: Option<String>,
    pub pilot: Option<MemberRef>,
    pub instructor: Option<MemberRef>,
    pub nature: Option<FlightNature>,
    pub departure_aerodrome: Option<Aerodrome>,
    pub destination_aerodrome: Option<Aerodrome>,
    pub block_off_time: Option<String>,
    pub take_off_time: Option<String>,
    pub landing_time: Option<String>,
    pub block_on_time: Option<String>,
    pub landings: Option<i64>,
    pub persons_on_board: Option<i64>,
    /// Litres.
    pub fuel_uplift: Option<f64>,
    pub fuel_type: Option<String>,
    /// Litres.
    pub oil_uplift: Option<f64>,
    pub preflight_check: Option<bool>,
    pub troubles_observations: Option<TroublesObservations>,
    pub techlog_entry_description: Option<String>,
    pub techlog_entry_status: Option<TechlogEntryStatus>,
    pub remarks: Option<String>,
    pub counters: FlightInputCounters,
}

/// Validated flight record as stored in an aircraft's logbook.
///
/// Fields that validation guarantees are concrete here. The counter set is
/// computed once at creation and never mutated; its `end` values seed the
/// next flight in the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    /// Assigned by the repository on store.
    pub id: String,
    pub date: NaiveDate,
    pub pilot: MemberRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<MemberRef>,
    pub nature: FlightNature,
    pub departure_aerodrome: Aerodrome,
    pub destination_aerodrome: Aerodrome,
    #[serde(with = "date_time_format")]
    pub block_off_time: NaiveDateTime,
    #[serde(with = "date_time_format")]
    pub take_off_time: NaiveDateTime,
    #[serde(with = "date_time_format")]
    pub landing_time: NaiveDateTime,
    #[serde(with = "date_time_format")]
    pub block_on_time: NaiveDateTime,
    pub landings: u32,
    pub persons_on_board: u32,
    pub fuel_uplift: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oil_uplift: Option<f64>,
    pub preflight_check: bool,
    pub troubles_observations: TroublesObservations,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub techlog_entry_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub techlog_entry_status: Option<TechlogEntryStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    pub counters: CounterSet,
    pub deleted: bool,
}
