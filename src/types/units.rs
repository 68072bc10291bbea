//! Unit enumerations for every measurement family, the caller-selected [`UnitProfile`]
//! and the fixed table of Dark Sky unit profiles ([`ApiUnitProfile`]).

use crate::types::measurement::{Accumulation, Distance, Intensity, Pressure, Speed, Temperature};
use crate::utils::format_decimals;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A family of interchangeable units for one physical quantity.
///
/// Implementors provide a pure pairwise conversion plus the formatting rules used by
/// [`crate::Measurement::label`].
pub trait UnitFamily: Copy + PartialEq + fmt::Debug {
    /// Converts `value` expressed in `from` into `to`. Never rounds.
    fn convert(value: f64, from: Self, to: Self) -> f64;

    /// Maximum number of fraction digits shown in a label.
    fn max_fraction_digits(self) -> usize;

    /// Literal suffix appended to the formatted number, including any leading space.
    fn suffix(self) -> &'static str;

    /// Formats `value` (already expressed in `self`) as a label.
    fn format(self, value: f64) -> String {
        format!(
            "{}{}",
            format_decimals(value, self.max_fraction_digits()),
            self.suffix()
        )
    }
}

/// The unit used for temperature values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
    Kelvin,
}

impl UnitFamily for TemperatureUnit {
    fn convert(value: f64, from: Self, to: Self) -> f64 {
        use TemperatureUnit::*;
        match (from, to) {
            (Fahrenheit, Celsius) => (value - 32.0) * (5.0 / 9.0),
            (Fahrenheit, Kelvin) => (value + 459.67) * (5.0 / 9.0),
            (Celsius, Fahrenheit) => value * (9.0 / 5.0) + 32.0,
            (Celsius, Kelvin) => value + 273.15,
            (Kelvin, Fahrenheit) => ((value - 273.15) * 1.8) + 32.0,
            (Kelvin, Celsius) => value - 273.15,
            _ => value,
        }
    }

    fn max_fraction_digits(self) -> usize {
        0
    }

    fn suffix(self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "℉",
            TemperatureUnit::Celsius => "℃",
            TemperatureUnit::Kelvin => "K",
        }
    }
}

/// The unit used for distance values (visibility, storm distance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DistanceUnit {
    #[default]
    Mile,
    Yard,
    Kilometer,
    Meter,
}

impl UnitFamily for DistanceUnit {
    fn convert(value: f64, from: Self, to: Self) -> f64 {
        use DistanceUnit::*;
        match (from, to) {
            (Mile, Yard) => value * 1760.0,
            (Mile, Kilometer) => value * 1.609344,
            (Mile, Meter) => value * 1609.344,
            (Yard, Mile) => value / 1760.0,
            (Yard, Kilometer) => value * 0.0009144,
            (Yard, Meter) => value * 0.9144,
            (Kilometer, Mile) => value / 1.609344,
            (Kilometer, Yard) => value / 0.0009144,
            (Kilometer, Meter) => value * 1000.0,
            (Meter, Mile) => value / 1609.344,
            (Meter, Yard) => value / 0.9144,
            (Meter, Kilometer) => value / 1000.0,
            _ => value,
        }
    }

    fn max_fraction_digits(self) -> usize {
        match self {
            DistanceUnit::Mile | DistanceUnit::Kilometer => 1,
            DistanceUnit::Yard | DistanceUnit::Meter => 0,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            DistanceUnit::Mile => " mi",
            DistanceUnit::Yard => " yd",
            DistanceUnit::Kilometer => " km",
            DistanceUnit::Meter => " m",
        }
    }
}

/// Upper-inclusive lower bounds, in km/h, of Beaufort forces 1 through 16.
const BEAUFORT_KPH: [f64; 16] = [
    1.0, 7.0, 12.0, 20.0, 31.0, 40.0, 51.0, 62.0, 75.0, 88.0, 103.0, 118.0, 178.0, 250.0, 333.0,
    419.0,
];

/// The unit used for speed values (wind speed and gusts).
///
/// [`SpeedUnit::Beaufort`] is an ordinal scale: any speed converts *to* it, but converting
/// *from* it returns the input unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpeedUnit {
    #[default]
    MilePerHour,
    KilometerPerHour,
    MeterPerSecond,
    Knot,
    Beaufort,
}

impl SpeedUnit {
    fn beaufort(value: f64, from: Self) -> f64 {
        let kph = Self::convert(value, from, SpeedUnit::KilometerPerHour);
        BEAUFORT_KPH
            .iter()
            .rposition(|&threshold| kph >= threshold)
            .map_or(0.0, |i| (i + 1) as f64)
    }
}

impl UnitFamily for SpeedUnit {
    fn convert(value: f64, from: Self, to: Self) -> f64 {
        use SpeedUnit::*;
        match (from, to) {
            // no inverse for the Beaufort scale
            (Beaufort, _) => value,
            (_, Beaufort) => Self::beaufort(value, from),
            (MilePerHour, KilometerPerHour) => value * 1.609344,
            (MilePerHour, MeterPerSecond) => value * 0.44704,
            (MilePerHour, Knot) => value / 1.150779,
            (KilometerPerHour, MilePerHour) => value / 1.609344,
            (KilometerPerHour, MeterPerSecond) => value / 3.6,
            (KilometerPerHour, Knot) => value / 1.852,
            (MeterPerSecond, MilePerHour) => value / 0.44704,
            (MeterPerSecond, KilometerPerHour) => value * 3.6,
            (MeterPerSecond, Knot) => value * 1.9438444924406,
            (Knot, MilePerHour) => value * 1.150779,
            (Knot, KilometerPerHour) => value * 1.852,
            (Knot, MeterPerSecond) => value / 1.9438444924406,
            _ => value,
        }
    }

    fn max_fraction_digits(self) -> usize {
        match self {
            SpeedUnit::MeterPerSecond => 1,
            SpeedUnit::Knot => 2,
            SpeedUnit::MilePerHour | SpeedUnit::KilometerPerHour | SpeedUnit::Beaufort => 0,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            SpeedUnit::MilePerHour => " mph",
            SpeedUnit::KilometerPerHour => " kph",
            SpeedUnit::MeterPerSecond => " m/s",
            SpeedUnit::Knot => " kt",
            SpeedUnit::Beaufort => " bft",
        }
    }
}

/// The unit used for sea-level air pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PressureUnit {
    #[default]
    Millibar,
    Hectopascal,
    InchesOfMercury,
}

impl UnitFamily for PressureUnit {
    fn convert(value: f64, from: Self, to: Self) -> f64 {
        use PressureUnit::*;
        match (from, to) {
            (Millibar | Hectopascal, InchesOfMercury) => value * 0.02953,
            (InchesOfMercury, Millibar | Hectopascal) => value / 0.02953,
            // 1 mb == 1 hPa
            _ => value,
        }
    }

    fn max_fraction_digits(self) -> usize {
        match self {
            PressureUnit::InchesOfMercury => 1,
            PressureUnit::Millibar | PressureUnit::Hectopascal => 0,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            PressureUnit::Millibar => " mb",
            PressureUnit::Hectopascal => " hPa",
            PressureUnit::InchesOfMercury => " inHg",
        }
    }
}

/// The unit used for precipitation intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrecipitationUnit {
    #[default]
    Inch,
    Millimeter,
}

impl UnitFamily for PrecipitationUnit {
    fn convert(value: f64, from: Self, to: Self) -> f64 {
        match (from, to) {
            (PrecipitationUnit::Inch, PrecipitationUnit::Millimeter) => value * 25.4,
            (PrecipitationUnit::Millimeter, PrecipitationUnit::Inch) => value / 25.4,
            _ => value,
        }
    }

    fn max_fraction_digits(self) -> usize {
        match self {
            PrecipitationUnit::Inch => 2,
            PrecipitationUnit::Millimeter => 1,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            PrecipitationUnit::Inch => " in",
            PrecipitationUnit::Millimeter => " mm",
        }
    }
}

/// The unit used for snowfall accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccumulationUnit {
    #[default]
    Inch,
    Centimeter,
}

impl UnitFamily for AccumulationUnit {
    fn convert(value: f64, from: Self, to: Self) -> f64 {
        match (from, to) {
            (AccumulationUnit::Inch, AccumulationUnit::Centimeter) => value * 2.54,
            (AccumulationUnit::Centimeter, AccumulationUnit::Inch) => value / 2.54,
            _ => value,
        }
    }

    fn max_fraction_digits(self) -> usize {
        match self {
            AccumulationUnit::Inch => 2,
            AccumulationUnit::Centimeter => 1,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            AccumulationUnit::Inch => " in",
            AccumulationUnit::Centimeter => " cm",
        }
    }
}

/// One unit per measurement family.
///
/// Used both as the caller's display preference and as the source units implied by an
/// [`ApiUnitProfile`]. Every family is chosen independently; the default is the imperial
/// bundle that matches the `us` profile.
///
/// # Examples
///
/// ```
/// use vremeto::*;
///
/// let units = UnitProfile {
///     temperature: TemperatureUnit::Celsius,
///     distance: DistanceUnit::Mile,
///     speed: SpeedUnit::Knot,
///     pressure: PressureUnit::Hectopascal,
///     precipitation: PrecipitationUnit::Millimeter,
///     accumulation: AccumulationUnit::Centimeter,
/// };
/// // everything but the speed matches uk2
/// assert_eq!(units.shortcode(), "uk2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UnitProfile {
    pub temperature: TemperatureUnit,
    pub distance: DistanceUnit,
    pub speed: SpeedUnit,
    pub pressure: PressureUnit,
    pub precipitation: PrecipitationUnit,
    pub accumulation: AccumulationUnit,
}

impl UnitProfile {
    /// The identifier of the named API profile closest to this selection.
    /// See [`resolve_profile_identifier`].
    pub fn shortcode(&self) -> &'static str {
        resolve_profile_identifier(self)
    }

    fn matches(&self, other: &UnitProfile) -> usize {
        [
            self.temperature == other.temperature,
            self.distance == other.distance,
            self.speed == other.speed,
            self.pressure == other.pressure,
            self.precipitation == other.precipitation,
            self.accumulation == other.accumulation,
        ]
        .into_iter()
        .filter(|&matched| matched)
        .count()
    }
}

/// The unit bundles Dark Sky can answer in, keyed by the `units` request parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiUnitProfile {
    /// Imperial units.
    #[default]
    Us,
    /// Same as `Si`, but speed in km/h.
    Ca,
    /// Same as `Si`, but distance in miles and speed in mph.
    Uk2,
    /// SI units, with hectopascal for pressure.
    Si,
}

impl ApiUnitProfile {
    /// All profiles, in the order used to break ties when matching.
    pub const ALL: [ApiUnitProfile; 4] = [
        ApiUnitProfile::Us,
        ApiUnitProfile::Ca,
        ApiUnitProfile::Uk2,
        ApiUnitProfile::Si,
    ];

    pub fn shortcode(&self) -> &'static str {
        match self {
            ApiUnitProfile::Us => "us",
            ApiUnitProfile::Ca => "ca",
            ApiUnitProfile::Uk2 => "uk2",
            ApiUnitProfile::Si => "si",
        }
    }

    /// Looks up a profile by identifier. Returns `None` for identifiers outside the table.
    pub fn parse(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|profile| profile.shortcode() == identifier)
    }

    /// Like [`ApiUnitProfile::parse`], falling back to [`ApiUnitProfile::Us`].
    pub fn from_shortcode(identifier: &str) -> Self {
        Self::parse(identifier).unwrap_or_default()
    }

    /// The units every value in a response of this profile is expressed in.
    pub fn units(&self) -> UnitProfile {
        match self {
            ApiUnitProfile::Us => UnitProfile::default(),
            ApiUnitProfile::Ca => UnitProfile {
                temperature: TemperatureUnit::Celsius,
                distance: DistanceUnit::Kilometer,
                speed: SpeedUnit::KilometerPerHour,
                pressure: PressureUnit::Hectopascal,
                precipitation: PrecipitationUnit::Millimeter,
                accumulation: AccumulationUnit::Centimeter,
            },
            ApiUnitProfile::Uk2 => UnitProfile {
                temperature: TemperatureUnit::Celsius,
                distance: DistanceUnit::Mile,
                speed: SpeedUnit::MilePerHour,
                pressure: PressureUnit::Hectopascal,
                precipitation: PrecipitationUnit::Millimeter,
                accumulation: AccumulationUnit::Centimeter,
            },
            ApiUnitProfile::Si => UnitProfile {
                temperature: TemperatureUnit::Celsius,
                distance: DistanceUnit::Kilometer,
                speed: SpeedUnit::MeterPerSecond,
                pressure: PressureUnit::Hectopascal,
                precipitation: PrecipitationUnit::Millimeter,
                accumulation: AccumulationUnit::Centimeter,
            },
        }
    }

    /// The profile sharing the most units with `selected`.
    ///
    /// Ties go to the profile declared first in [`ApiUnitProfile::ALL`].
    pub fn best_match(selected: &UnitProfile) -> Self {
        let mut best = ApiUnitProfile::Us;
        let mut best_score = 0;
        for profile in Self::ALL {
            let score = profile.units().matches(selected);
            if score > best_score {
                best = profile;
                best_score = score;
            }
        }
        best
    }
}

impl fmt::Display for ApiUnitProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.shortcode())
    }
}

/// Picks the API profile identifier to request for the caller's display units.
pub fn resolve_profile_identifier(selected: &UnitProfile) -> &'static str {
    ApiUnitProfile::best_match(selected).shortcode()
}

/// The unit bundle of a named profile; unknown identifiers resolve to `us`.
pub fn resolve_profile_units(identifier: &str) -> UnitProfile {
    ApiUnitProfile::from_shortcode(identifier).units()
}

/// Source units of a payload paired with the display units requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct UnitConversion {
    pub source: UnitProfile,
    pub display: UnitProfile,
}

impl UnitConversion {
    pub fn new(source: UnitProfile, display: UnitProfile) -> Self {
        Self { source, display }
    }

    pub fn temperature(&self, raw: f64) -> Temperature {
        Temperature::new(raw, self.source.temperature, self.display.temperature)
    }

    pub fn distance(&self, raw: f64) -> Distance {
        Distance::new(raw, self.source.distance, self.display.distance)
    }

    pub fn speed(&self, raw: f64) -> Speed {
        Speed::new(raw, self.source.speed, self.display.speed)
    }

    pub fn pressure(&self, raw: f64) -> Pressure {
        Pressure::new(raw, self.source.pressure, self.display.pressure)
    }

    pub fn intensity(&self, raw: f64) -> Intensity {
        Intensity::new(raw, self.source.precipitation, self.display.precipitation)
    }

    pub fn accumulation(&self, raw: f64) -> Accumulation {
        Accumulation::new(raw, self.source.accumulation, self.display.accumulation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_round_trip<U: UnitFamily>(units: &[U], samples: &[f64]) {
        for &from in units {
            for &to in units {
                for &x in samples {
                    let back = U::convert(U::convert(x, from, to), to, from);
                    assert!(
                        (back - x).abs() <= 1e-9 * x.abs().max(1.0),
                        "{:?} -> {:?} -> {:?} turned {} into {}",
                        from,
                        to,
                        from,
                        x,
                        back
                    );
                }
            }
        }
    }

    const SAMPLES: [f64; 6] = [-40.0, -3.5, 0.0, 1.0, 21.7, 1013.25];

    #[test]
    fn test_round_trip_all_families() {
        assert_round_trip(
            &[
                TemperatureUnit::Fahrenheit,
                TemperatureUnit::Celsius,
                TemperatureUnit::Kelvin,
            ],
            &SAMPLES,
        );
        assert_round_trip(
            &[
                DistanceUnit::Mile,
                DistanceUnit::Yard,
                DistanceUnit::Kilometer,
                DistanceUnit::Meter,
            ],
            &SAMPLES,
        );
        assert_round_trip(
            &[
                SpeedUnit::MilePerHour,
                SpeedUnit::KilometerPerHour,
                SpeedUnit::MeterPerSecond,
                SpeedUnit::Knot,
            ],
            &SAMPLES,
        );
        assert_round_trip(
            &[
                PressureUnit::Millibar,
                PressureUnit::Hectopascal,
                PressureUnit::InchesOfMercury,
            ],
            &SAMPLES,
        );
        assert_round_trip(
            &[PrecipitationUnit::Inch, PrecipitationUnit::Millimeter],
            &SAMPLES,
        );
        assert_round_trip(
            &[AccumulationUnit::Inch, AccumulationUnit::Centimeter],
            &SAMPLES,
        );
    }

    #[test]
    fn test_known_conversions() {
        let c = TemperatureUnit::convert(212.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius);
        assert!((c - 100.0).abs() < 1e-9);
        let k = TemperatureUnit::convert(32.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Kelvin);
        assert!((k - 273.15).abs() < 1e-9);
        let m = DistanceUnit::convert(1.0, DistanceUnit::Mile, DistanceUnit::Meter);
        assert_eq!(m, 1609.344);
        let kph = SpeedUnit::convert(10.0, SpeedUnit::MeterPerSecond, SpeedUnit::KilometerPerHour);
        assert!((kph - 36.0).abs() < 1e-9);
        assert_eq!(
            PressureUnit::convert(1013.0, PressureUnit::Millibar, PressureUnit::Hectopascal),
            1013.0
        );
    }

    #[test]
    fn test_beaufort_thresholds() {
        let to_bft =
            |kph: f64| SpeedUnit::convert(kph, SpeedUnit::KilometerPerHour, SpeedUnit::Beaufort);
        assert_eq!(to_bft(0.0), 0.0);
        assert_eq!(to_bft(0.99), 0.0);
        assert_eq!(to_bft(1.0), 1.0);
        assert_eq!(to_bft(11.9), 2.0);
        assert_eq!(to_bft(12.0), 3.0);
        assert_eq!(to_bft(118.0), 12.0);
        assert_eq!(to_bft(999.0), 16.0);
    }

    #[test]
    fn test_beaufort_from_other_units() {
        // 10 m/s is 36 km/h, force 5
        assert_eq!(
            SpeedUnit::convert(10.0, SpeedUnit::MeterPerSecond, SpeedUnit::Beaufort),
            5.0
        );
    }

    #[test]
    fn test_beaufort_is_one_way() {
        for to in [
            SpeedUnit::MilePerHour,
            SpeedUnit::KilometerPerHour,
            SpeedUnit::MeterPerSecond,
            SpeedUnit::Knot,
            SpeedUnit::Beaufort,
        ] {
            assert_eq!(SpeedUnit::convert(7.0, SpeedUnit::Beaufort, to), 7.0);
        }
    }

    #[test]
    fn test_profile_reflexivity() {
        for profile in ApiUnitProfile::ALL {
            assert_eq!(
                resolve_profile_identifier(&profile.units()),
                profile.shortcode(),
                "profile {} did not resolve to itself",
                profile
            );
        }
    }

    #[test]
    fn test_profile_resolution_ca() {
        let selected = UnitProfile {
            temperature: TemperatureUnit::Celsius,
            distance: DistanceUnit::Kilometer,
            speed: SpeedUnit::KilometerPerHour,
            pressure: PressureUnit::Hectopascal,
            precipitation: PrecipitationUnit::Millimeter,
            accumulation: AccumulationUnit::Centimeter,
        };
        assert_eq!(selected.shortcode(), "ca");
    }

    #[test]
    fn test_profile_resolution_defaults_and_ties() {
        assert_eq!(UnitProfile::default().shortcode(), "us");

        // Kelvin/yard/knot/inHg match nothing but the metric precipitation units,
        // which ca, uk2 and si share: the earliest of those wins.
        let metric_rain = UnitProfile {
            temperature: TemperatureUnit::Kelvin,
            distance: DistanceUnit::Yard,
            speed: SpeedUnit::Knot,
            pressure: PressureUnit::InchesOfMercury,
            precipitation: PrecipitationUnit::Millimeter,
            accumulation: AccumulationUnit::Centimeter,
        };
        assert_eq!(metric_rain.shortcode(), "ca");

        let nothing = UnitProfile {
            temperature: TemperatureUnit::Kelvin,
            distance: DistanceUnit::Yard,
            speed: SpeedUnit::Knot,
            pressure: PressureUnit::InchesOfMercury,
            ..UnitProfile::default()
        };
        // still shares inch/inch with us
        assert_eq!(nothing.shortcode(), "us");
    }

    #[test]
    fn test_profile_units_lookup() {
        assert_eq!(resolve_profile_units("si").speed, SpeedUnit::MeterPerSecond);
        assert_eq!(resolve_profile_units("uk2").distance, DistanceUnit::Mile);
        assert_eq!(resolve_profile_units("auto"), UnitProfile::default());
        assert_eq!(ApiUnitProfile::parse("auto"), None);
    }
}
