//! The error taxonomy returned by this crate: four kinds, no panics for
//! input-domain problems, no internal retry.

/// Errors raised by the minutia codec (never) or the fuzzy extractor
/// (`Gen`/`Rep`).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `value` passed to `gen`/`rep` was not valid hex.
    #[error("input is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The decoded `value` did not contain exactly `block_length` symbols'
    /// worth of bytes.
    #[error("invalid value length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required byte count (`block_length * T::WIDTH`).
        expected: usize,
        /// Byte count actually decoded from `value`.
        actual: usize,
    },

    /// `Rep` exhausted all helpers without a zero-tail match.
    #[error("unable to reproduce key: no helper matched")]
    UnableToReproduce,

    /// The injected random number generator failed while `Gen` was drawing
    /// the key, a mask, or a nonce.
    #[error("entropy source failed: {0}")]
    EntropyFailure(#[from] rand_core::Error),
}
