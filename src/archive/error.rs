use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Failed to encode forecast archive")]
    Encode(#[source] Box<bincode::error::EncodeError>),

    #[error("Failed to decode forecast archive")]
    Decode(#[source] Box<bincode::error::DecodeError>),

    #[error("Forecast archive holds {0} trailing bytes")]
    TrailingBytes(usize),

    #[error("Failed to (de)serialize archived forecast payload")]
    Json(#[from] serde_json::Error),
}
