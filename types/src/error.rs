//! Error types returned by the decoders.

use thiserror::Error;

/// Rejection of a bech32-family identifier.
///
/// A checksum mismatch is not an error: it is reported through
/// [`Decoded::valid`](crate::Decoded::valid).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BechError {
    #[error("invalid length: expected {min} <= N <= {max}, given N = {actual}")]
    InvalidSize {
        actual: usize,
        min: usize,
        max: usize,
    },

    #[error("no separator found in given input")]
    NoSeparator,

    #[error("invalid character at position {position}")]
    InvalidCharacter { position: usize },

    #[error("identifier mixes upper- and lower-case characters")]
    InvalidCase,
}

/// Rejection of an arbitrary-base string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BaseError {
    #[error("non-dictionary character met: {0:?}")]
    InvalidCharacter(char),
}
