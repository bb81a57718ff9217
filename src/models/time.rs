//! Timezone-aware time utilities for flight records.
//!
//! Flight timestamps are entered as naive local date-time strings
//! (`YYYY-MM-DD HH:mm`) and interpreted in the timezone of the aerodrome they
//! belong to. Comparisons between timestamps therefore go through a
//! local-to-instant conversion; only durations are computed on the wall
//! clock (see [`duration_in_hundredths_of_hour`]).

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use super::counters::div_round_half_away;

/// Entry format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Entry format for local date-times.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a `YYYY-MM-DD` date string. Zero-padded components only.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Parse a `YYYY-MM-DD HH:mm` local date-time string. Zero-padded components
/// only.
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    if value.len() != 16 {
        return None;
    }
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT).ok()
}

/// Convert a naive local date-time to the absolute instant it denotes in the
/// given timezone.
///
/// DST transitions make some local times ambiguous and others nonexistent.
/// The mapping is deterministic: an ambiguous time (fall-back) resolves to
/// the earlier instant, a nonexistent time (spring-forward gap) is shifted
/// forward by one hour.
pub fn to_instant(local: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&local).earliest() {
        Some(dt) => dt.with_timezone(&Utc),
        None => {
            let shifted = local + Duration::hours(1);
            tz.from_local_datetime(&shifted)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|| DateTime::from_naive_utc_and_offset(local, Utc))
        }
    }
}

/// Whether instant `a` (local time in `tz_a`) strictly precedes instant `b`
/// (local time in `tz_b`).
pub fn is_before(a: NaiveDateTime, tz_a: Tz, b: NaiveDateTime, tz_b: Tz) -> bool {
    to_instant(a, tz_a) < to_instant(b, tz_b)
}

/// Wall-clock difference between two local date-times in hundredths of an
/// hour, rounded half away from zero.
///
/// e.g. `2018-11-20 10:00` to `2018-11-20 11:00` is 100.
///
/// The difference is taken on the naive values: a flight spanning a DST
/// transition is measured on the local clock, not on elapsed absolute time.
/// This matches how the flight-time meter alternative behaves (a crew
/// transcribes local clock readings) and is an accepted approximation.
pub fn duration_in_hundredths_of_hour(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let minutes = (end - start).num_minutes();
    div_round_half_away(minutes * 100, 60)
}

/// Serde helpers for `YYYY-MM-DD HH:mm` date-time fields on stored records.
pub mod date_time_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_TIME_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(DATE_TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&value, DATE_TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod time_tests;
