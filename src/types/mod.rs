pub mod bearing;
pub mod data_type;
pub mod language;
pub mod measurement;
pub mod moon;
pub mod ozone;
pub mod percentage;
pub mod units;
pub mod weather_data;
