use crate::archive::error::ArchiveError;
use crate::request::error::RequestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VremetoError {
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("Failed to parse forecast settings")]
    Settings(#[source] serde_json::Error),
}
