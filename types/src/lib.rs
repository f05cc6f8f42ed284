//! Fundamental types for the addrcheck decoders.
//!
//! This crate defines the values shared across the workspace: the decoded
//! identifier, the checksum variants with their parameter sets, and the
//! error enums each decoder returns.

pub mod decoded;
pub mod error;
pub mod variant;

pub use decoded::Decoded;
pub use error::{BaseError, BechError};
pub use variant::{ChecksumParams, Generator, UnknownVariant, Variant, MIN_LENGTH, SEPARATOR};
