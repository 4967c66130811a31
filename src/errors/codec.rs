//! Error types for block parsing.

/// Errors that can occur when parsing raw block bytes into a transaction list.
///
/// A codec failure indicates upstream data corruption (or a wrong-network
/// block) and is fatal to the individual request. It is always reported
/// distinctly, never silently turned into an empty transaction list.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The raw bytes did not decode as a block.
    #[error("Malformed block bytes: {details}")]
    MalformedBlock {
        /// Details about where decoding failed
        details: String,
    },
}

impl CodecError {
    /// Helper to create a `MalformedBlock` error with details.
    pub fn malformed_block(details: impl Into<String>) -> Self {
        CodecError::MalformedBlock {
            details: details.into(),
        }
    }
}
