//! Decoders for textual address encodings.
//!
//! - **Arbitrary base** (base58, base64, ...) to big-endian bytes
//! - **bech32 / bech32m** (BIP-173, BIP-350) prefix and checksum validation
//! - **blech32 / blech32m** (Elements confidential addresses), same algorithm
//!   over a wider generator
//!
//! Only decoding exists. Payload interpretation (witness versions, programs)
//! is left to the caller.

pub mod base;
pub mod checksum;
pub mod polymod;
pub mod variants;

pub use base::{base58_decode, base64_decode, base_decode, Alphabet, LookupTable, BASE58, BASE64};
pub use checksum::{decode, prefix_checksum};
pub use polymod::{bech, blech, polymod};
pub use variants::{bech32_decode, bech32m_decode, blech32_decode, blech32m_decode, decode_variant};
