//! Offline storage of a raw forecast response, so a [`Forecast`](crate::Forecast) can be
//! rebuilt later, e.g. under different display units, without calling the API again.

use crate::archive::error::ArchiveError;
use crate::forecast::Headers;
use bincode::config::{Configuration, Fixint, LittleEndian};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const BINCODE_CONFIG: Configuration<LittleEndian, Fixint> =
    bincode::config::standard().with_fixed_int_encoding();

/// The payload and response headers a forecast was assembled from.
///
/// The payload is kept as JSON text; serializing a [`Value`] sorts object keys, so
/// archiving the same payload twice yields identical bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastArchive {
    pub json: String,
    pub headers: Option<Headers>,
}

impl ForecastArchive {
    pub fn new(payload: &Value, headers: Option<&Headers>) -> Result<Self, ArchiveError> {
        Ok(Self {
            json: serde_json::to_string(payload)?,
            headers: headers.cloned(),
        })
    }

    /// The archived payload, decoded back into JSON.
    pub fn payload(&self) -> Result<Value, ArchiveError> {
        Ok(serde_json::from_str(&self.json)?)
    }

    pub fn encode(&self) -> Result<Vec<u8>, ArchiveError> {
        let bytes = bincode::serde::encode_to_vec(self, BINCODE_CONFIG)
            .map_err(|e| ArchiveError::Encode(Box::new(e)))?;
        debug!("Encoded forecast archive ({} bytes)", bytes.len());
        Ok(bytes)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, ArchiveError> {
        let (archive, read) = bincode::serde::decode_from_slice::<Self, _>(bytes, BINCODE_CONFIG)
            .map_err(|e| ArchiveError::Decode(Box::new(e)))?;
        if read != bytes.len() {
            return Err(ArchiveError::TrailingBytes(bytes.len() - read));
        }
        Ok(archive)
    }
}
