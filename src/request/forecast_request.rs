use crate::forecast::{Forecast, Headers, LatLon};
use crate::request::error::RequestError;
use crate::settings::ForecastSettings;
use crate::types::data_type::{DataType, HourAmount};
use bon::bon;
use chrono::{DateTime, Utc};
use serde_json::Value;
use url::Url;

const API_BASE_URL: &str = "https://api.darksky.net/forecast";

/// A validated forecast call: which location, which sections, and in which language
/// and units.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    secret: String,
    location: LatLon,
    include: Vec<DataType>,
    time: Option<DateTime<Utc>>,
    settings: ForecastSettings,
}

#[bon]
impl ForecastRequest {
    /// Validates the parts of a forecast call.
    ///
    /// # Arguments
    ///
    /// * `.secret(impl Into<String>)`: The Dark Sky secret key. Leaving it out, or
    ///   passing a blank key, fails with [`RequestError::NoApiKey`].
    /// * `.location(LatLon)`: **Required.** Coordinates to forecast.
    /// * `.include(Vec<DataType>)`: Optional. Sections to fetch, all of them by default.
    /// * `.time(DateTime<Utc>)`: Optional. Requests a forecast for a past or future
    ///   moment instead of now.
    /// * `.settings(ForecastSettings)`: Optional. Units, language and hourly range.
    ///
    /// # Examples
    ///
    /// ```
    /// use vremeto::{DataType, ForecastRequest, LatLon};
    ///
    /// let request = ForecastRequest::builder()
    ///     .secret("0123456789abcdef")
    ///     .location(LatLon(52.37, 4.89))
    ///     .include(vec![DataType::Current, DataType::Days])
    ///     .build()?;
    ///
    /// assert_eq!(
    ///     request.url()?.as_str(),
    ///     "https://api.darksky.net/forecast/0123456789abcdef/52.37,4.89\
    ///      ?lang=en&units=us&exclude=minutely%2Chourly%2Calerts"
    /// );
    /// # Ok::<(), vremeto::RequestError>(())
    /// ```
    #[builder]
    pub fn new(
        #[builder(into)] secret: Option<String>,
        location: LatLon,
        #[builder(default = DataType::ALL.to_vec())] include: Vec<DataType>,
        time: Option<DateTime<Utc>>,
        #[builder(default)] settings: ForecastSettings,
    ) -> Result<Self, RequestError> {
        let secret = secret
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(RequestError::NoApiKey)?;
        if include.is_empty() {
            return Err(RequestError::NoDataRequested);
        }
        let LatLon(lat, lon) = location;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(RequestError::InvalidLocation(format!("{},{}", lat, lon)));
        }
        Ok(Self {
            secret,
            location,
            include,
            time,
            settings,
        })
    }

    pub fn location(&self) -> LatLon {
        self.location
    }

    pub fn settings(&self) -> &ForecastSettings {
        &self.settings
    }

    /// Sections left out of the response, in declaration order of [`DataType`].
    pub fn excluded(&self) -> Vec<DataType> {
        DataType::ALL
            .into_iter()
            .filter(|data_type| !self.include.contains(data_type))
            .collect()
    }

    /// Query parameters of the call, in the order they are sent.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("lang", self.settings.language.shortcode().to_string()),
            ("units", self.settings.units.shortcode().to_string()),
        ];
        if self.settings.hour_amount == HourAmount::HundredSixtyEight {
            pairs.push(("extend", "hourly".to_string()));
        }
        let excluded = self.excluded();
        if !excluded.is_empty() {
            let excluded: Vec<&str> = excluded.iter().map(DataType::as_str).collect();
            pairs.push(("exclude", excluded.join(",")));
        }
        pairs
    }

    pub fn url(&self) -> Result<Url, RequestError> {
        let LatLon(lat, lon) = self.location;
        let mut raw = format!("{}/{}/{},{}", API_BASE_URL, self.secret, lat, lon);
        if let Some(time) = self.time {
            raw.push_str(&format!(",{}", time.timestamp()));
        }
        let mut url = Url::parse(&raw).map_err(|e| RequestError::UrlParse(raw.clone(), e))?;
        url.query_pairs_mut().extend_pairs(self.query_pairs());
        Ok(url)
    }

    /// Assembles the response to this request in the requested display units.
    pub fn parse_response(&self, payload: &Value, headers: Option<&Headers>) -> Forecast {
        Forecast::parse()
            .payload(payload)
            .maybe_headers(headers)
            .units(self.settings.units)
            .call()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::language::Language;
    use crate::types::units::{ApiUnitProfile, SpeedUnit, TemperatureUnit, UnitProfile};
    use chrono::TimeZone;

    const SECRET: &str = "0123456789abcdef";

    #[test]
    fn test_requires_secret() {
        let missing = ForecastRequest::builder().location(LatLon(0.0, 0.0)).build();
        assert!(matches!(missing, Err(RequestError::NoApiKey)));
        let blank = ForecastRequest::builder()
            .secret("   ")
            .location(LatLon(0.0, 0.0))
            .build();
        assert!(matches!(blank, Err(RequestError::NoApiKey)));
    }

    #[test]
    fn test_requires_data() {
        let request = ForecastRequest::builder()
            .secret(SECRET)
            .location(LatLon(0.0, 0.0))
            .include(vec![])
            .build();
        assert!(matches!(request, Err(RequestError::NoDataRequested)));
    }

    #[test]
    fn test_rejects_out_of_range_location() {
        for location in [LatLon(91.0, 0.0), LatLon(0.0, -181.0), LatLon(f64::NAN, 0.0)] {
            let request = ForecastRequest::builder()
                .secret(SECRET)
                .location(location)
                .build();
            assert!(matches!(request, Err(RequestError::InvalidLocation(_))));
        }
    }

    #[test]
    fn test_default_query() -> Result<(), RequestError> {
        let request = ForecastRequest::builder()
            .secret(SECRET)
            .location(LatLon(52.37, 4.89))
            .build()?;
        assert!(request.excluded().is_empty());
        assert_eq!(
            request.query_pairs(),
            vec![("lang", "en".to_string()), ("units", "us".to_string())]
        );
        Ok(())
    }

    #[test]
    fn test_query_with_settings() -> Result<(), RequestError> {
        let settings = ForecastSettings {
            units: UnitProfile {
                speed: SpeedUnit::MeterPerSecond,
                ..ApiUnitProfile::Ca.units()
            },
            language: Language::Norwegian,
            hour_amount: HourAmount::HundredSixtyEight,
        };
        let request = ForecastRequest::builder()
            .secret(SECRET)
            .location(LatLon(59.91, 10.75))
            .include(vec![DataType::Alerts, DataType::Hours])
            .settings(settings)
            .build()?;
        assert_eq!(
            request.query_pairs(),
            vec![
                ("lang", "nb".to_string()),
                ("units", "si".to_string()),
                ("extend", "hourly".to_string()),
                ("exclude", "currently,minutely,daily".to_string()),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_url_with_time() -> Result<(), RequestError> {
        let time = Utc.with_ymd_and_hms(2017, 11, 6, 18, 34, 37).unwrap();
        let request = ForecastRequest::builder()
            .secret(SECRET)
            .location(LatLon(-33.9, 151.2))
            .include(vec![DataType::Current])
            .time(time)
            .build()?;
        let url = request.url()?;
        assert_eq!(url.host_str(), Some("api.darksky.net"));
        assert_eq!(
            url.path(),
            "/forecast/0123456789abcdef/-33.9,151.2,1509993277"
        );
        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            query,
            vec![
                ("lang".to_string(), "en".to_string()),
                ("units".to_string(), "us".to_string()),
                (
                    "exclude".to_string(),
                    "minutely,hourly,daily,alerts".to_string()
                ),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_parse_response_uses_request_units() -> Result<(), RequestError> {
        let settings = ForecastSettings {
            units: UnitProfile {
                temperature: TemperatureUnit::Kelvin,
                ..UnitProfile::default()
            },
            ..ForecastSettings::default()
        };
        let request = ForecastRequest::builder()
            .secret(SECRET)
            .location(LatLon(0.0, 0.0))
            .settings(settings)
            .build()?;
        let payload = serde_json::json!({
            "flags": { "units": "si" },
            "currently": { "temperature": 0.0 },
        });
        let forecast = request.parse_response(&payload, None);
        let temperature = forecast
            .current
            .and_then(|c| c.temperature)
            .and_then(|t| t.current)
            .map(|t| t.label());
        assert_eq!(temperature.as_deref(), Some("273K"));
        Ok(())
    }
}
