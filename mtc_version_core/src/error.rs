use bincode::error::{DecodeError, EncodeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Encoding failed: {0}")]
    EncodingError(#[from] EncodeError),

    #[error("Decoding failed: {0}")]
    DecodingError(#[from] DecodeError),

    #[error("Invalid version: {0}")]
    Parse(String),

    #[error("Invalid stamp: {0}")]
    InvalidStamp(String),

    #[error("Invalid checksum: {0}")]
    InvalidChecksum(String),
}
