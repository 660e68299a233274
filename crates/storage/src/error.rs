use thiserror::Error;

/// Failures while decoding physical entries read back from the engine.
///
/// These indicate on-disk corruption, not recoverable conditions.
#[derive(Debug, Error)]
pub enum DecoderError {
    #[error("Empty entry, cannot decode")]
    Empty,
    #[error("Unsupported metadata version {0}")]
    InvalidVersion(u8),
    #[error("Invalid type tag")]
    InvalidType,
    #[error("Invalid data length")]
    InvalidLength,
}
