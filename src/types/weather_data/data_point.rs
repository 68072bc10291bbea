use crate::forecast::LatLon;
use crate::types::measurement::{Distance, Pressure, Temperature};
use crate::types::moon::MoonValue;
use crate::types::ozone::Ozone;
use crate::types::percentage::Percentage;
use crate::types::units::UnitConversion;
use crate::types::weather_data::precipitation::Precipitation;
use crate::types::weather_data::storm::Storm;
use crate::types::weather_data::temperature::Temperatures;
use crate::types::weather_data::wind::Wind;
use crate::weather_data::extractor::{
    get_opt_f64, get_opt_int, get_opt_string, get_opt_time, JsonObject,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weather conditions at, or averaged over, one period of time: a moment for
/// `currently`, a minute, an hour or a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    /// Start of the period. Minutes, hours and days are aligned to the local time zone.
    /// The UNIX epoch when the payload carried no time.
    pub time: DateTime<Utc>,
    pub temperature: Option<Temperatures>,
    pub precipitation: Option<Precipitation>,
    /// Only on `currently`.
    pub nearest_storm: Option<Storm>,
    pub wind: Option<Wind>,
    pub dew_point: Option<Temperature>,
    /// Only on daily.
    pub moon: Option<MoonValue>,
    pub pressure: Option<Pressure>,
    pub cloud_cover: Option<Percentage>,
    pub humidity: Option<Percentage>,
    pub ozone: Option<Ozone>,
    /// Capped at 10 miles.
    pub visibility: Option<Distance>,
    /// Only on daily. Absent when the sun does not rise on that day.
    pub sunrise: Option<DateTime<Utc>>,
    /// Only on daily. Absent when the sun does not set on that day.
    pub sunset: Option<DateTime<Utc>>,
    pub uv_index: Option<i64>,
    pub summary: Option<String>,
    /// Machine-readable summary meant for picking an icon, such as `clear-day`,
    /// `rain` or `partly-cloudy-night`. More values may appear at any time.
    pub icon: Option<String>,
}

impl DataPoint {
    /// Builds a point from one payload record. `origin` is the forecast location,
    /// used to place the nearest storm.
    pub(crate) fn from_json(
        json: &JsonObject,
        units: &UnitConversion,
        origin: Option<LatLon>,
    ) -> Self {
        Self {
            time: get_opt_time(json, "time").unwrap_or(DateTime::UNIX_EPOCH),
            temperature: Temperatures::from_json(json, units),
            precipitation: Precipitation::from_json(json, units),
            nearest_storm: Storm::from_json(json, units, origin),
            wind: Wind::from_json(json, units),
            dew_point: get_opt_f64(json, "dewPoint").map(|t| units.temperature(t)),
            moon: get_opt_f64(json, "moonPhase").map(MoonValue::new),
            pressure: get_opt_f64(json, "pressure").map(|p| units.pressure(p)),
            cloud_cover: get_opt_f64(json, "cloudCover").map(Percentage::new),
            humidity: get_opt_f64(json, "humidity").map(Percentage::new),
            ozone: get_opt_f64(json, "ozone").map(Ozone::new),
            visibility: get_opt_f64(json, "visibility").map(|d| units.distance(d)),
            sunrise: get_opt_time(json, "sunriseTime"),
            sunset: get_opt_time(json, "sunsetTime"),
            uv_index: get_opt_int(json, "uvIndex"),
            summary: get_opt_string(json, "summary"),
            icon: get_opt_string(json, "icon"),
        }
    }
}
