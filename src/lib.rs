//! Typed Dark Sky forecasts.
//!
//! A raw forecast response is assembled into a [`Forecast`] whose measurements are
//! converted, at parse time, into the display units the caller asks for. The
//! response can be archived and replayed later under other units without another
//! API call.

mod archive;
mod error;
mod forecast;
mod request;
mod settings;
mod types;
mod utils;
mod weather_data;

pub use error::VremetoError;
pub use forecast::*;
pub use settings::ForecastSettings;

pub use archive::error::ArchiveError;
pub use archive::forecast_archive::ForecastArchive;
pub use request::error::RequestError;
pub use request::forecast_request::ForecastRequest;

pub use types::bearing::Bearing;
pub use types::data_type::*;
pub use types::language::Language;
pub use types::measurement::*;
pub use types::moon::*;
pub use types::ozone::Ozone;
pub use types::percentage::Percentage;
pub use types::units::{
    resolve_profile_identifier, resolve_profile_units, AccumulationUnit, ApiUnitProfile,
    DistanceUnit, PrecipitationUnit, PressureUnit, SpeedUnit, TemperatureUnit, UnitFamily,
    UnitProfile,
};

pub use types::weather_data::*;
