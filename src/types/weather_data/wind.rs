use crate::types::bearing::Bearing;
use crate::types::measurement::Speed;
use crate::types::units::UnitConversion;
use crate::weather_data::extractor::{get_opt_f64, JsonObject};
use serde::{Deserialize, Serialize};

/// Direction, speed and gust of the wind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Direction the wind is coming from. Absent when the wind speed is zero.
    pub bearing: Option<Bearing>,
    pub speed: Option<Speed>,
    pub gust: Option<Speed>,
}

impl Wind {
    pub(crate) fn from_json(json: &JsonObject, units: &UnitConversion) -> Option<Self> {
        let wind = Self {
            bearing: get_opt_f64(json, "windBearing").map(Bearing::new),
            speed: get_opt_f64(json, "windSpeed").map(|s| units.speed(s)),
            gust: get_opt_f64(json, "windGust").map(|s| units.speed(s)),
        };
        wind.has_data().then_some(wind)
    }

    fn has_data(&self) -> bool {
        self.bearing.is_some() || self.speed.is_some() || self.gust.is_some()
    }
}
