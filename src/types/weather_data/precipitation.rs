use crate::types::measurement::{Accumulation, Intensity};
use crate::types::percentage::Percentage;
use crate::types::units::UnitConversion;
use crate::weather_data::extractor::{get_opt_f64, get_opt_string, get_opt_time, JsonObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of precipitation occurring at the given time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecipitationType {
    Rain,
    Snow,
    /// Freezing rain, ice pellets, or a wintery mix.
    Sleet,
    Hail,
}

impl PrecipitationType {
    /// Maps the API's `precipType` string. Unknown kinds yield `None`.
    pub fn from_api(value: &str) -> Option<Self> {
        match value {
            "rain" => Some(PrecipitationType::Rain),
            "snow" => Some(PrecipitationType::Snow),
            "sleet" => Some(PrecipitationType::Sleet),
            "hail" => Some(PrecipitationType::Hail),
            _ => None,
        }
    }
}

/// Type, intensity, accumulation and probability of precipitation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Precipitation {
    pub kind: Option<PrecipitationType>,
    /// Snowfall accumulation expected to occur. (only on hourly and daily)
    pub accumulation: Option<Accumulation>,
    pub intensity: Option<Intensity>,
    /// Maximum intensity during a given day. (only on daily)
    pub max_intensity: Option<Intensity>,
    pub max_intensity_time: Option<DateTime<Utc>>,
    pub probability: Option<Percentage>,
}

impl Precipitation {
    pub(crate) fn from_json(json: &JsonObject, units: &UnitConversion) -> Option<Self> {
        let precipitation = Self {
            kind: get_opt_string(json, "precipType")
                .as_deref()
                .and_then(PrecipitationType::from_api),
            accumulation: get_opt_f64(json, "precipAccumulation").map(|a| units.accumulation(a)),
            intensity: get_opt_f64(json, "precipIntensity").map(|i| units.intensity(i)),
            max_intensity: get_opt_f64(json, "precipIntensityMax").map(|i| units.intensity(i)),
            max_intensity_time: get_opt_time(json, "precipIntensityMaxTime"),
            probability: get_opt_f64(json, "precipProbability").map(Percentage::new),
        };
        precipitation.has_data().then_some(precipitation)
    }

    fn has_data(&self) -> bool {
        self.kind.is_some()
            || self.accumulation.is_some()
            || self.intensity.is_some()
            || self.max_intensity.is_some()
            || self.max_intensity_time.is_some()
            || self.probability.is_some()
    }
}
