//! Aircraft documents and per-aircraft settings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::counters::{CounterSeeds, FractionDigits};

/// Fuel type an organization configures for an aircraft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelType {
    pub name: String,
    pub description: String,
}

/// Per-aircraft settings governing validation and counter derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftSettings {
    /// Flights dated before this are rejected (`not_before_lock_date`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_date: Option<NaiveDate>,
    /// When enabled, engine-hour meter readings are required on every flight
    /// and an engine-hours interval is carried in the counter chain.
    pub engine_hours_counter_enabled: bool,
    pub engine_hours_counter_fraction_digits: FractionDigits,
    /// When enabled, an observed trouble requires a techlog entry status.
    pub techlog_enabled: bool,
    #[serde(default)]
    pub fuel_types: Vec<FuelType>,
}

impl Default for AircraftSettings {
    fn default() -> Self {
        Self {
            lock_date: None,
            engine_hours_counter_enabled: false,
            engine_hours_counter_fraction_digits: FractionDigits::Two,
            techlog_enabled: false,
            fuel_types: Vec::new(),
        }
    }
}

/// Aircraft document: registration, settings, and the cumulative counter
/// seeds the next flight starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aircraft {
    pub id: String,
    pub registration: String,
    #[serde(default)]
    pub settings: AircraftSettings,
    #[serde(default)]
    pub counters: CounterSeeds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = AircraftSettings::default();
        assert!(!settings.engine_hours_counter_enabled);
        assert_eq!(
            settings.engine_hours_counter_fraction_digits,
            FractionDigits::Two
        );
        assert!(settings.lock_date.is_none());
    }

    #[test]
    fn test_settings_wire_names() {
        let settings: AircraftSettings = serde_json::from_str(
            r#"{
                "lockDate": "2020-01-01",
                "engineHoursCounterEnabled": true,
                "engineHoursCounterFractionDigits": 1,
                "techlogEnabled": true,
                "fuelTypes": [{ "name": "avgas", "description": "AvGas 100LL" }]
            }"#,
        )
        .unwrap();
        assert!(settings.engine_hours_counter_enabled);
        assert_eq!(
            settings.engine_hours_counter_fraction_digits,
            FractionDigits::One
        );
        assert_eq!(settings.fuel_types.len(), 1);
        assert_eq!(settings.lock_date.unwrap().to_string(), "2020-01-01");
    }
}
