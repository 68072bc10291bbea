use crate::forecast::LatLon;
use crate::types::units::UnitConversion;
use crate::types::weather_data::data_point::DataPoint;
use crate::weather_data::extractor::{get_opt_object_list, get_opt_string, JsonObject};
use serde::{Deserialize, Serialize};

/// A run of [`DataPoint`]s over a period of time, in the order the API returned them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataBlock {
    pub summary: Option<String>,
    pub icon: Option<String>,
    pub data: Vec<DataPoint>,
}

impl DataBlock {
    pub(crate) fn from_json(
        json: &JsonObject,
        units: &UnitConversion,
        origin: Option<LatLon>,
    ) -> Self {
        let data = get_opt_object_list(json, "data")
            .map(|points| {
                points
                    .into_iter()
                    .map(|point| DataPoint::from_json(point, units, origin))
                    .collect()
            })
            .unwrap_or_default();
        Self {
            summary: get_opt_string(json, "summary"),
            icon: get_opt_string(json, "icon"),
            data,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::units::UnitProfile;
    use serde_json::{json, Value};

    fn block(value: Value) -> DataBlock {
        let units = UnitConversion::new(UnitProfile::default(), UnitProfile::default());
        match value {
            Value::Object(map) => DataBlock::from_json(&map, &units, None),
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn test_keeps_source_order() {
        let block = block(json!({
            "summary": "Light rain",
            "icon": "rain",
            "data": [{ "time": 300 }, { "time": 100 }, { "time": 200 }],
        }));
        let times: Vec<i64> = block.data.iter().map(|p| p.time.timestamp()).collect();
        assert_eq!(times, vec![300, 100, 200]);
        assert_eq!(block.summary.as_deref(), Some("Light rain"));
        assert_eq!(block.icon.as_deref(), Some("rain"));
    }

    #[test]
    fn test_malformed_data_is_empty() {
        assert!(block(json!({ "summary": "x" })).is_empty());
        assert!(block(json!({ "data": "nope" })).is_empty());
        assert!(block(json!({ "data": [{ "time": 1 }, 2] })).is_empty());
        assert_eq!(block(json!({ "data": [] })).len(), 0);
    }
}
