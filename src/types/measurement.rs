//! The generic [`Measurement`] value and its per-family aliases.

use crate::types::units::{
    AccumulationUnit, DistanceUnit, PrecipitationUnit, PressureUnit, SpeedUnit, TemperatureUnit,
    UnitFamily,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric value tagged with the unit it is expressed in.
///
/// A measurement is frozen to the unit chosen when it was constructed: converting it
/// to another unit produces a new number and leaves the stored value untouched.
///
/// # Examples
///
/// ```
/// use vremeto::{Temperature, TemperatureUnit};
///
/// // 68℉ as reported by the API, displayed in Celsius
/// let t = Temperature::new(68.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius);
/// assert_eq!(t.unit(), TemperatureUnit::Celsius);
/// assert_eq!(t.label(), "20℃");
/// assert_eq!(t.label_as(TemperatureUnit::Kelvin), "293K");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement<U> {
    value: f64,
    unit: U,
}

impl<U: UnitFamily> Measurement<U> {
    /// Converts `raw`, expressed in `source`, into `display` and stores it in that unit.
    pub fn new(raw: f64, source: U, display: U) -> Self {
        Self {
            value: U::convert(raw, source, display),
            unit: display,
        }
    }

    /// The stored value, expressed in [`Measurement::unit`].
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The unit the value was frozen to at construction.
    pub fn unit(&self) -> U {
        self.unit
    }

    /// The value converted to `unit`.
    pub fn value_as(&self, unit: U) -> f64 {
        if unit == self.unit {
            self.value
        } else {
            U::convert(self.value, self.unit, unit)
        }
    }

    /// Human-readable value and unit, e.g. `"12 mph"`.
    pub fn label(&self) -> String {
        self.unit.format(self.value)
    }

    /// Same as [`Measurement::label`], converted to `unit` first.
    pub fn label_as(&self, unit: U) -> String {
        unit.format(self.value_as(unit))
    }
}

impl<U: UnitFamily> fmt::Display for Measurement<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Air, apparent or dew-point temperature.
pub type Temperature = Measurement<TemperatureUnit>;
/// Visibility or storm distance.
pub type Distance = Measurement<DistanceUnit>;
/// Wind speed or gust.
pub type Speed = Measurement<SpeedUnit>;
/// Sea-level air pressure.
pub type Pressure = Measurement<PressureUnit>;
/// Precipitation intensity, per hour.
pub type Intensity = Measurement<PrecipitationUnit>;
/// Snowfall accumulation.
pub type Accumulation = Measurement<AccumulationUnit>;
