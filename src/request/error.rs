use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("No Dark Sky secret key was provided")]
    NoApiKey,

    #[error("No forecast data types were requested")]
    NoDataRequested,

    #[error("Invalid location '{0}'")]
    InvalidLocation(String),

    #[error("Failed to build request URL '{0}'")]
    UrlParse(String, #[source] url::ParseError),
}
