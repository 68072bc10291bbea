pub mod error;
pub mod forecast_archive;
