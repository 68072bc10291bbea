use crate::error::VremetoError;
use crate::types::data_type::HourAmount;
use crate::types::language::Language;
use crate::types::units::UnitProfile;
use serde::{Deserialize, Serialize};

/// User preferences applied to every forecast call: display units, summary language and
/// how many hours of hourly data to fetch.
///
/// Missing keys fall back to their defaults when deserializing.
///
/// # Examples
///
/// ```
/// use vremeto::{ForecastSettings, HourAmount, Language, TemperatureUnit};
///
/// let settings = ForecastSettings::from_json_str(
///     r#"{ "units": { "temperature": "celsius" }, "language": "nl" }"#,
/// )?;
/// assert_eq!(settings.units.temperature, TemperatureUnit::Celsius);
/// assert_eq!(settings.language, Language::Dutch);
/// assert_eq!(settings.hour_amount, HourAmount::FortyEight);
/// # Ok::<(), vremeto::VremetoError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForecastSettings {
    pub units: UnitProfile,
    pub language: Language,
    pub hour_amount: HourAmount,
}

impl ForecastSettings {
    pub fn from_json_str(json: &str) -> Result<Self, VremetoError> {
        serde_json::from_str(json).map_err(VremetoError::Settings)
    }

    pub fn to_json_string(&self) -> Result<String, VremetoError> {
        serde_json::to_string_pretty(self).map_err(VremetoError::Settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::units::{PressureUnit, SpeedUnit};

    #[test]
    fn test_empty_object_is_default() -> Result<(), VremetoError> {
        assert_eq!(ForecastSettings::from_json_str("{}")?, ForecastSettings::default());
        Ok(())
    }

    #[test]
    fn test_round_trip_through_json() -> Result<(), VremetoError> {
        let settings = ForecastSettings {
            units: UnitProfile {
                speed: SpeedUnit::Beaufort,
                pressure: PressureUnit::InchesOfMercury,
                ..Default::default()
            },
            language: Language::SimplifiedChinese,
            hour_amount: HourAmount::HundredSixtyEight,
        };
        let json = settings.to_json_string()?;
        assert!(json.contains("\"hourAmount\": \"hundredSixtyEight\""));
        assert!(json.contains("\"speed\": \"beaufort\""));
        assert_eq!(ForecastSettings::from_json_str(&json)?, settings);
        Ok(())
    }

    #[test]
    fn test_rejects_unknown_values() {
        let result = ForecastSettings::from_json_str(r#"{ "language": "tlh" }"#);
        assert!(matches!(result, Err(VremetoError::Settings(_))));
    }
}
