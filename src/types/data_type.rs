//! Sections of a forecast that can be requested, and how far ahead hourly data reaches.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One top-level section of a forecast response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Conditions at the requested time.
    #[serde(rename = "currently")]
    Current,
    /// Minute-by-minute conditions for the next hour.
    #[serde(rename = "minutely")]
    Minutes,
    /// Hour-by-hour conditions for the next two days, or a week when extended.
    #[serde(rename = "hourly")]
    Hours,
    /// Day-by-day conditions for the next week.
    #[serde(rename = "daily")]
    Days,
    /// Severe weather alerts.
    Alerts,
}

impl DataType {
    pub const ALL: [DataType; 5] = [
        DataType::Current,
        DataType::Minutes,
        DataType::Hours,
        DataType::Days,
        DataType::Alerts,
    ];

    /// Payload key of the section, also used in the `exclude` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Current => "currently",
            DataType::Minutes => "minutely",
            DataType::Hours => "hourly",
            DataType::Days => "daily",
            DataType::Alerts => "alerts",
        }
    }
}

/// Formats a `DataType` as its payload key.
///
/// # Examples
///
/// ```
/// use vremeto::DataType;
///
/// assert_eq!(DataType::Current.to_string(), "currently");
/// assert_eq!(format!("{}", DataType::Days), "daily");
/// ```
impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Number of hours covered by the hourly block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HourAmount {
    #[default]
    FortyEight,
    /// Requests the extended hourly forecast.
    HundredSixtyEight,
}

impl HourAmount {
    pub fn hours(&self) -> u32 {
        match self {
            HourAmount::FortyEight => 48,
            HourAmount::HundredSixtyEight => 168,
        }
    }
}
