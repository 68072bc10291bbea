pub mod error;
pub mod forecast_request;
