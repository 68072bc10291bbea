use crate::weather_data::extractor::{
    get_opt_string, get_opt_string_list, get_opt_time, JsonObject,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// How urgently an [`Alert`] should be acted on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Be aware of a potentially hazardous weather situation.
    #[default]
    Advisory,
    /// Be prepared for a potentially severe weather situation.
    Watch,
    /// Take immediate action against severe weather.
    Warning,
}

impl AlertSeverity {
    /// Unrecognised severities map to [`AlertSeverity::Advisory`].
    pub fn from_api(value: &str) -> Self {
        match value {
            "watch" => AlertSeverity::Watch,
            "warning" => AlertSeverity::Warning,
            _ => AlertSeverity::Advisory,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Advisory => "advisory",
            AlertSeverity::Watch => "watch",
            AlertSeverity::Warning => "warning",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A severe weather warning issued by a governmental authority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub title: String,
    pub description: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub regions: Vec<String>,
    pub severity: AlertSeverity,
    /// When the alert was issued. The UNIX epoch when the payload carried no time.
    pub time: DateTime<Utc>,
    pub url: Option<Url>,
}

impl Alert {
    pub(crate) fn from_json(json: &JsonObject) -> Self {
        Self {
            title: get_opt_string(json, "title").unwrap_or_default(),
            description: get_opt_string(json, "description").unwrap_or_default(),
            expires_at: get_opt_time(json, "expires"),
            regions: get_opt_string_list(json, "regions").unwrap_or_default(),
            severity: get_opt_string(json, "severity")
                .map(|s| AlertSeverity::from_api(&s))
                .unwrap_or_default(),
            time: get_opt_time(json, "time").unwrap_or(DateTime::UNIX_EPOCH),
            url: get_opt_string(json, "uri").and_then(|uri| Url::parse(&uri).ok()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn alert(value: Value) -> Alert {
        match value {
            Value::Object(map) => Alert::from_json(&map),
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn test_full_alert() {
        let alert = alert(json!({
            "title": "Flood Watch",
            "description": "River levels rising.",
            "expires": 1_510_036_680,
            "regions": ["Hudson", "Essex"],
            "severity": "watch",
            "time": 1_509_993_360,
            "uri": "https://alerts.weather.gov/cap/wwacapget.php?x=NJ1259",
        }));
        assert_eq!(alert.title, "Flood Watch");
        assert_eq!(alert.regions, vec!["Hudson", "Essex"]);
        assert_eq!(alert.severity, AlertSeverity::Watch);
        assert_eq!(alert.expires_at.map(|t| t.timestamp()), Some(1_510_036_680));
        assert_eq!(alert.time.timestamp(), 1_509_993_360);
        assert_eq!(
            alert.url.as_ref().map(Url::host_str),
            Some(Some("alerts.weather.gov"))
        );
    }

    #[test]
    fn test_defaults_never_fail() {
        let alert = alert(json!({
            "title": 5,
            "regions": ["a", 1],
            "severity": "catastrophic",
            "uri": "not a url",
        }));
        assert_eq!(alert.title, "");
        assert_eq!(alert.description, "");
        assert!(alert.expires_at.is_none());
        assert!(alert.regions.is_empty());
        assert_eq!(alert.severity, AlertSeverity::Advisory);
        assert_eq!(alert.time, DateTime::UNIX_EPOCH);
        assert!(alert.url.is_none());
    }
}
