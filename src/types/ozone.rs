//! Total atmospheric ozone in Dobson units.

use crate::utils::format_decimals;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Columnar density of total atmospheric ozone, in Dobson units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ozone {
    pub value: f64,
}

impl Ozone {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn label(&self) -> String {
        format!("{} DU", format_decimals(self.value, 0))
    }
}

impl fmt::Display for Ozone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Ozone;

    #[test]
    fn test_label() {
        assert_eq!(Ozone::new(301.82).label(), "302 DU");
    }
}
