//! Whole-percent view of the fractions the API reports.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A ratio reported by the API as a fraction between 0 and 1 (humidity, cloud cover,
/// precipitation probability).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Percentage {
    /// The raw fraction, `0.0` for 0% and `1.0` for 100%.
    pub zero_to_one: f64,
    /// The fraction as a whole percentage, rounded.
    pub value: i32,
}

impl Percentage {
    pub fn new(zero_to_one: f64) -> Self {
        Self {
            zero_to_one,
            value: (zero_to_one * 100.0).round() as i32,
        }
    }

    /// E.g. `"83%"`.
    pub fn label(&self) -> String {
        format!("{}%", self.value)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::Percentage;

    #[test]
    fn test_rounds_to_whole_percent() {
        assert_eq!(Percentage::new(0.834).value, 83);
        assert_eq!(Percentage::new(0.836).label(), "84%");
        assert_eq!(Percentage::new(0.0).label(), "0%");
        assert_eq!(Percentage::new(1.0).to_string(), "100%");
    }
}
