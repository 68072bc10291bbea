use crate::archive::error::ArchiveError;
use crate::archive::forecast_archive::ForecastArchive;
use crate::request::error::RequestError;
use crate::types::units::{ApiUnitProfile, UnitConversion, UnitProfile};
use crate::types::weather_data::alert::Alert;
use crate::types::weather_data::data_block::DataBlock;
use crate::types::weather_data::data_point::DataPoint;
use crate::weather_data::extractor::{
    get_opt_bool, get_opt_f64, get_opt_object, get_opt_object_list, get_opt_string,
    get_opt_string_list, JsonObject,
};
use bon::bon;
use chrono_tz::Tz;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

/// HTTP response headers of a forecast call. Names are matched case-insensitively.
pub type Headers = BTreeMap<String, String>;

/// Latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

/// Parses `"latitude,longitude"`, e.g. `"52.37,4.89"`.
impl FromStr for LatLon {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RequestError::InvalidLocation(s.to_string());
        let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
        let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;
        if !lat.is_finite() || !lon.is_finite() {
            return Err(invalid());
        }
        Ok(LatLon(lat, lon))
    }
}

/// Provenance of a forecast response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Number of API calls made with this key today, from `X-Forecast-API-Calls`.
    pub total_calls: Option<u64>,
    /// Server-side processing time from `X-Response-Time`.
    pub response_time_ms: Option<f64>,
    /// Set when the location is supported but a temporary outage, such as a radar
    /// station down for maintenance, made the data unavailable.
    pub darksky_unavailable: Option<bool>,
    /// Ids of the data sources used to build the forecast, e.g. `gfs` or `isd`.
    pub sources: Option<Vec<String>>,
}

impl Metadata {
    fn from_parts(flags: &JsonObject, headers: Option<&Headers>) -> Self {
        let header = |name: &str| headers.and_then(|h| find_header(h, name));
        Self {
            total_calls: header("X-Forecast-API-Calls").and_then(|v| v.trim().parse().ok()),
            response_time_ms: header("X-Response-Time").and_then(parse_response_time),
            darksky_unavailable: get_opt_bool(flags, "darksky-unavailable"),
            sources: get_opt_string_list(flags, "sources"),
        }
    }
}

fn find_header<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

fn parse_response_time(value: &str) -> Option<f64> {
    value
        .trim_matches(|c: char| c.is_alphabetic() || c.is_whitespace())
        .parse()
        .ok()
}

/// A weather forecast for one location, with every measurement expressed in the
/// display units chosen when it was assembled.
///
/// Serializes without its archive; keep [`Forecast::archive`] to rebuild it later.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Forecast {
    pub location: Option<LatLon>,
    pub timezone: Option<Tz>,
    pub current: Option<DataPoint>,
    pub minutes: Option<DataBlock>,
    pub hours: Option<DataBlock>,
    pub days: Option<DataBlock>,
    pub alerts: Option<Vec<Alert>>,
    pub metadata: Option<Metadata>,
    #[serde(skip)]
    archive: Option<Vec<u8>>,
}

#[bon]
impl Forecast {
    /// Assembles a forecast from a decoded API response.
    ///
    /// Never fails: a payload that is not an object, or that has no `flags` object,
    /// yields the empty forecast (see [`Forecast::is_empty`]). Individual fields that
    /// are missing or malformed are left out.
    ///
    /// # Arguments
    ///
    /// * `.payload(&Value)`: **Required.** The response body.
    /// * `.headers(&Headers)`: Optional. Response headers, used for [`Metadata`].
    /// * `.units(UnitProfile)`: Optional. Display units, defaults to [`UnitProfile::default`].
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use vremeto::{Forecast, TemperatureUnit, UnitProfile};
    ///
    /// let payload = json!({
    ///     "latitude": 52.37,
    ///     "longitude": 4.89,
    ///     "timezone": "Europe/Amsterdam",
    ///     "currently": { "time": 1509993277, "temperature": 10.0 },
    ///     "flags": { "units": "si" },
    /// });
    /// let units = UnitProfile { temperature: TemperatureUnit::Fahrenheit, ..UnitProfile::default() };
    /// let forecast = Forecast::parse().payload(&payload).units(units).call();
    ///
    /// let temperature = forecast.current.and_then(|c| c.temperature).and_then(|t| t.current);
    /// assert_eq!(temperature.map(|t| t.label()).as_deref(), Some("50℉"));
    /// ```
    #[builder]
    pub fn parse(
        payload: &Value,
        headers: Option<&Headers>,
        #[builder(default)] units: UnitProfile,
    ) -> Forecast {
        let Some(json) = payload.as_object() else {
            debug!("Forecast payload is not an object, returning empty forecast");
            return Forecast::empty();
        };
        let Some(flags) = get_opt_object(json, "flags") else {
            debug!("Forecast payload has no flags, returning empty forecast");
            return Forecast::empty();
        };

        let archive = ForecastArchive::new(payload, headers)
            .and_then(|archive| archive.encode())
            .map_err(|e| warn!("Could not archive forecast payload: {}", e))
            .ok();

        let source = match get_opt_string(flags, "units") {
            Some(identifier) => ApiUnitProfile::parse(&identifier).unwrap_or_else(|| {
                warn!("Unknown unit profile '{}', assuming us", identifier);
                ApiUnitProfile::Us
            }),
            None => ApiUnitProfile::Us,
        };
        let conversion = UnitConversion::new(source.units(), units);

        let location = match (get_opt_f64(json, "latitude"), get_opt_f64(json, "longitude")) {
            (Some(lat), Some(lon)) => Some(LatLon(lat, lon)),
            _ => None,
        };
        let timezone = get_opt_string(json, "timezone").and_then(|zone| {
            zone.parse::<Tz>()
                .map_err(|_| warn!("Unknown time zone '{}'", zone))
                .ok()
        });

        let block = |key: &str| {
            get_opt_object(json, key).map(|b| DataBlock::from_json(b, &conversion, location))
        };

        Forecast {
            location,
            timezone,
            current: get_opt_object(json, "currently")
                .map(|c| DataPoint::from_json(c, &conversion, location)),
            minutes: block("minutely"),
            hours: block("hourly"),
            days: block("daily"),
            alerts: get_opt_object_list(json, "alerts")
                .map(|alerts| alerts.into_iter().map(Alert::from_json).collect()),
            metadata: Some(Metadata::from_parts(flags, headers)),
            archive,
        }
    }

    /// The forecast with every field absent, returned for unusable payloads.
    pub fn empty() -> Forecast {
        Forecast::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Forecast::empty()
    }

    /// The encoded [`ForecastArchive`] this forecast was assembled from, absent on the
    /// empty forecast.
    pub fn archive(&self) -> Option<&[u8]> {
        self.archive.as_deref()
    }

    /// Rebuilds a forecast from bytes returned by [`Forecast::archive`].
    pub fn restore(bytes: &[u8], units: UnitProfile) -> Result<Forecast, ArchiveError> {
        let archive = ForecastArchive::decode(bytes)?;
        let payload = archive.payload()?;
        debug!("Restoring forecast from archive ({} bytes)", bytes.len());
        Ok(Forecast::parse()
            .payload(&payload)
            .maybe_headers(archive.headers.as_ref())
            .units(units)
            .call())
    }

    /// Same as [`Forecast::restore`], but an undecodable archive yields the empty
    /// forecast.
    pub fn from_archive(bytes: &[u8], units: UnitProfile) -> Forecast {
        Self::restore(bytes, units).unwrap_or_else(|e| {
            warn!("Discarding unreadable forecast archive: {}", e);
            Forecast::empty()
        })
    }

    /// Re-assembles this forecast from its archive under other display units.
    pub fn reload(&self, units: UnitProfile) -> Forecast {
        match self.archive() {
            Some(bytes) => Forecast::from_archive(bytes, units),
            None => Forecast::empty(),
        }
    }
}
