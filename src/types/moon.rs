//! Lunar phase classification from the lunation fraction reported on daily points.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of the illuminated portion of the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoonPhase {
    /// Completely invisible.
    New,
    /// Between new and first quarter.
    WaxingCrescent,
    FirstQuarter,
    /// Between first quarter and full.
    WaxingGibbous,
    Full,
    /// Between full and last quarter.
    WaningGibbous,
    LastQuarter,
    /// Between last quarter and new.
    WaningCrescent,
}

impl MoonPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoonPhase::New => "new",
            MoonPhase::WaxingCrescent => "waxing-crescent",
            MoonPhase::FirstQuarter => "first-quarter",
            MoonPhase::WaxingGibbous => "waxing-gibbous",
            MoonPhase::Full => "full",
            MoonPhase::WaningGibbous => "waning-gibbous",
            MoonPhase::LastQuarter => "last-quarter",
            MoonPhase::WaningCrescent => "waning-crescent",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fractional part of the lunation number and the phase it falls in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonValue {
    /// `0.0` is a new moon, `0.25` first quarter, `0.5` full, `0.75` last quarter.
    pub fraction: f64,
    pub phase: MoonPhase,
}

impl MoonValue {
    /// Classifies `fraction` into a [`MoonPhase`].
    ///
    /// The four principal phases only match on exact equality; anything not falling
    /// strictly inside the first three intervals is a waning crescent.
    #[allow(clippy::float_cmp)]
    pub fn new(fraction: f64) -> Self {
        let phase = if fraction == 0.0 {
            MoonPhase::New
        } else if fraction > 0.0 && fraction < 0.25 {
            MoonPhase::WaxingCrescent
        } else if fraction == 0.25 {
            MoonPhase::FirstQuarter
        } else if fraction > 0.25 && fraction < 0.5 {
            MoonPhase::WaxingGibbous
        } else if fraction == 0.5 {
            MoonPhase::Full
        } else if fraction > 0.5 && fraction < 0.75 {
            MoonPhase::WaningGibbous
        } else if fraction == 0.75 {
            MoonPhase::LastQuarter
        } else {
            MoonPhase::WaningCrescent
        };
        Self { fraction, phase }
    }
}
