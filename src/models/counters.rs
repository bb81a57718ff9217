//! Counter intervals and decimal formatting.
//!
//! All hour-based counters are stored as integer hundredths of an hour, the
//! granularity of the mechanical hour-meters installed in club aircraft.
//! Landings and flight counts use plain integer units.

use serde::{Deserialize, Serialize};

/// A `{start, end}` counter range.
///
/// Pure data carrier: ordering of the bounds is enforced by validation and by
/// the derivation paths, not by the constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Width of the range in counter units.
    pub fn delta(&self) -> i64 {
        self.end - self.start
    }
}

/// Raw meter reading transcribed from a physical hour-meter, in hundredths of
/// an hour. Bounds stay optional until validation has run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterReading {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

/// Meter readings supplied with a flight entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlightInputCounters {
    pub flight_time_counter: Option<CounterReading>,
    pub engine_time_counter: Option<CounterReading>,
}

/// Cumulative counter values of an aircraft, carried as the `start` seed of
/// every interval derived for its next flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CounterSeeds {
    pub flights: Option<i64>,
    pub landings: Option<i64>,
    pub flight_hours: Option<i64>,
    pub engine_hours: Option<i64>,
}

/// Derived cumulative counters, stored immutably with a flight record. The
/// `end` values become the seeds of the next flight in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterSet {
    pub flights: Interval,
    pub landings: Interval,
    pub flight_hours: Interval,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_hours: Option<Interval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_time_counter: Option<Interval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_time_counter: Option<Interval>,
}

/// Display precision for hour counters, configured per aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum FractionDigits {
    One,
    Two,
}

impl FractionDigits {
    fn factor(self) -> i64 {
        match self {
            FractionDigits::One => 10,
            FractionDigits::Two => 100,
        }
    }

    fn digits(self) -> usize {
        match self {
            FractionDigits::One => 1,
            FractionDigits::Two => 2,
        }
    }
}

impl From<FractionDigits> for u8 {
    fn from(value: FractionDigits) -> Self {
        match value {
            FractionDigits::One => 1,
            FractionDigits::Two => 2,
        }
    }
}

impl TryFrom<u8> for FractionDigits {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(FractionDigits::One),
            2 => Ok(FractionDigits::Two),
            other => Err(format!("fraction digits must be 1 or 2, got {other}")),
        }
    }
}

/// Integer division rounding half away from zero. `d` must be positive.
pub(crate) fn div_round_half_away(n: i64, d: i64) -> i64 {
    debug_assert!(d > 0);
    if n >= 0 {
        (n + d / 2) / d
    } else {
        -((-n + d / 2) / d)
    }
}

/// Format a hundredths-of-an-hour value as a decimal string with exactly the
/// requested number of fraction digits.
///
/// Rounds half away from zero at the chosen precision. This matches the
/// rounding the entry form applies before a value is stored, so formatted
/// counters never drift from their stored hundredths by an off-by-one.
pub fn format_decimal(hundredths: i64, digits: FractionDigits) -> String {
    let scaled = match digits {
        FractionDigits::Two => hundredths,
        FractionDigits::One => div_round_half_away(hundredths, 10),
    };
    let factor = digits.factor();
    let sign = if scaled < 0 { "-" } else { "" };
    let abs = scaled.abs();
    format!(
        "{sign}{}.{:0width$}",
        abs / factor,
        abs % factor,
        width = digits.digits()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_delta() {
        assert_eq!(Interval::new(100, 150).delta(), 50);
        assert_eq!(Interval::new(7, 7).delta(), 0);
    }

    #[test]
    fn test_format_decimal_two_digits() {
        assert_eq!(format_decimal(12345, FractionDigits::Two), "123.45");
        assert_eq!(format_decimal(100, FractionDigits::Two), "1.00");
        assert_eq!(format_decimal(5, FractionDigits::Two), "0.05");
        assert_eq!(format_decimal(0, FractionDigits::Two), "0.00");
    }

    #[test]
    fn test_format_decimal_one_digit_rounds_half_away() {
        // 123.45 at one digit rounds up to 123.5.
        assert_eq!(format_decimal(12345, FractionDigits::One), "123.5");
        assert_eq!(format_decimal(12344, FractionDigits::One), "123.4");
        assert_eq!(format_decimal(12355, FractionDigits::One), "123.6");
        assert_eq!(format_decimal(4, FractionDigits::One), "0.0");
        assert_eq!(format_decimal(5, FractionDigits::One), "0.1");
    }

    #[test]
    fn test_format_decimal_negative() {
        assert_eq!(format_decimal(-12345, FractionDigits::Two), "-123.45");
        assert_eq!(format_decimal(-12345, FractionDigits::One), "-123.5");
    }

    #[test]
    fn test_fraction_digits_serde() {
        assert_eq!(serde_json::to_string(&FractionDigits::One).unwrap(), "1");
        let two: FractionDigits = serde_json::from_str("2").unwrap();
        assert_eq!(two, FractionDigits::Two);
        assert!(serde_json::from_str::<FractionDigits>("3").is_err());
    }

    #[test]
    fn test_counter_set_serialization_omits_absent_engine_hours() {
        let counters = CounterSet {
            flights: Interval::new(10, 11),
            landings: Interval::new(20, 21),
            flight_hours: Interval::new(100, 150),
            engine_hours: None,
            flight_time_counter: None,
            engine_time_counter: None,
        };
        let json = serde_json::to_value(&counters).unwrap();
        assert!(json.get("engineHours").is_none());
        assert!(json.get("flightTimeCounter").is_none());
        assert_eq!(json["flights"]["end"], 11);
    }
}
