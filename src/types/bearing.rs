//! Compass directions for wind and storm bearings.

use serde::{Deserialize, Serialize};
use std::fmt;

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Direction in degrees, with true north at 0° and progressing clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bearing {
    /// The raw bearing as a fraction of a full turn (`raw / 360`).
    pub zero_to_one: f64,
    /// The bearing rounded to whole degrees.
    pub degrees: i32,
}

impl Bearing {
    pub fn new(degrees: f64) -> Self {
        Self {
            zero_to_one: degrees / 360.0,
            degrees: degrees.round() as i32,
        }
    }

    /// E.g. `"225°"`.
    pub fn label(&self) -> String {
        format!("{}°", self.degrees)
    }

    /// The 16-point compass name, e.g. `"SW"`.
    ///
    /// Sectors are 22.5° wide and centred on their point, so 11° is still `"N"` while
    /// 12° is `"NNE"`. Bearings of 360° and beyond wrap around.
    ///
    /// ```
    /// use vremeto::Bearing;
    ///
    /// assert_eq!(Bearing::new(0.0).cardinal_label(), "N");
    /// assert_eq!(Bearing::new(180.0).cardinal_label(), "S");
    /// assert_eq!(Bearing::new(360.0).cardinal_label(), "N");
    /// ```
    pub fn cardinal_label(&self) -> &'static str {
        let sector = ((f64::from(self.degrees) + 11.25) / 22.5).floor() as i64;
        COMPASS_POINTS[sector.rem_euclid(16) as usize]
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::Bearing;

    #[test]
    fn test_cardinal_boundaries() {
        assert_eq!(Bearing::new(0.0).cardinal_label(), "N");
        assert_eq!(Bearing::new(11.0).cardinal_label(), "N");
        assert_eq!(Bearing::new(12.0).cardinal_label(), "NNE");
        assert_eq!(Bearing::new(90.0).cardinal_label(), "E");
        assert_eq!(Bearing::new(180.0).cardinal_label(), "S");
        assert_eq!(Bearing::new(225.0).cardinal_label(), "SW");
        assert_eq!(Bearing::new(348.0).cardinal_label(), "NNW");
        assert_eq!(Bearing::new(350.0).cardinal_label(), "N");
        assert_eq!(Bearing::new(360.0).cardinal_label(), "N");
        assert_eq!(Bearing::new(-90.0).cardinal_label(), "W");
    }

    #[test]
    fn test_rounding_and_labels() {
        let bearing = Bearing::new(134.6);
        assert_eq!(bearing.degrees, 135);
        assert_eq!(bearing.label(), "135°");
        assert_eq!(bearing.cardinal_label(), "SE");
        assert!((Bearing::new(90.0).zero_to_one - 0.25).abs() < f64::EPSILON);
    }
}
