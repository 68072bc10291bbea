use crate::types::measurement::Temperature;
use crate::types::units::UnitConversion;
use crate::weather_data::extractor::{get_opt_f64, get_opt_time, JsonObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Real-feel temperatures of a data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApparentTemperature {
    pub current: Option<Temperature>,
    /// Maximum real-feel temperature during a given day. (only on daily)
    pub max: Option<Temperature>,
    pub max_time: Option<DateTime<Utc>>,
    /// Minimum real-feel temperature during a given day. (only on daily)
    pub min: Option<Temperature>,
    pub min_time: Option<DateTime<Utc>>,
}

impl ApparentTemperature {
    pub(crate) fn from_json(json: &JsonObject, units: &UnitConversion) -> Option<Self> {
        let apparent = Self {
            current: get_opt_f64(json, "apparentTemperature").map(|t| units.temperature(t)),
            max: get_opt_f64(json, "apparentTemperatureMax").map(|t| units.temperature(t)),
            max_time: get_opt_time(json, "apparentTemperatureMaxTime"),
            min: get_opt_f64(json, "apparentTemperatureMin").map(|t| units.temperature(t)),
            min_time: get_opt_time(json, "apparentTemperatureMinTime"),
        };
        apparent.has_data().then_some(apparent)
    }

    fn has_data(&self) -> bool {
        self.current.is_some()
            || self.max.is_some()
            || self.max_time.is_some()
            || self.min.is_some()
            || self.min_time.is_some()
    }
}

/// Current, maximum and minimum temperatures of a data point, plus their real-feel
/// counterparts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Temperatures {
    pub current: Option<Temperature>,
    /// Maximum temperature during a given day. (only on daily)
    pub max: Option<Temperature>,
    pub max_time: Option<DateTime<Utc>>,
    /// Minimum temperature during a given day. (only on daily)
    pub min: Option<Temperature>,
    pub min_time: Option<DateTime<Utc>>,
    pub apparent: Option<ApparentTemperature>,
}

impl Temperatures {
    pub(crate) fn from_json(json: &JsonObject, units: &UnitConversion) -> Option<Self> {
        let temperatures = Self {
            current: get_opt_f64(json, "temperature").map(|t| units.temperature(t)),
            max: get_opt_f64(json, "temperatureMax").map(|t| units.temperature(t)),
            max_time: get_opt_time(json, "temperatureMaxTime"),
            min: get_opt_f64(json, "temperatureMin").map(|t| units.temperature(t)),
            min_time: get_opt_time(json, "temperatureMinTime"),
            apparent: ApparentTemperature::from_json(json, units),
        };
        temperatures.has_data().then_some(temperatures)
    }

    fn has_data(&self) -> bool {
        self.current.is_some()
            || self.max.is_some()
            || self.max_time.is_some()
            || self.min.is_some()
            || self.min_time.is_some()
            || self.apparent.is_some()
    }
}
