//! The four public checksum encodings, each a fixed binding of
//! [`checksum::decode`](crate::checksum::decode).

use addrcheck_types::{BechError, Decoded, Variant};

use crate::checksum;

/// Decode with the parameters of `variant`.
pub fn decode_variant(variant: Variant, input: &str) -> Result<Decoded, BechError> {
    let params = variant.params();
    checksum::decode(
        input,
        params.encoding_constant,
        params.max_length,
        params.generator,
    )
}

/// BIP-173 bech32 (constant 1, up to 90 characters).
pub fn bech32_decode(input: &str) -> Result<Decoded, BechError> {
    decode_variant(Variant::Bech32, input)
}

/// BIP-350 bech32m (constant `0x2bc830a3`, up to 90 characters).
pub fn bech32m_decode(input: &str) -> Result<Decoded, BechError> {
    decode_variant(Variant::Bech32m, input)
}

/// Elements blech32 for confidential addresses (constant 1, up to 150 characters).
pub fn blech32_decode(input: &str) -> Result<Decoded, BechError> {
    decode_variant(Variant::Blech32, input)
}

/// Elements blech32m (constant `0x455972a3350f7a1`, up to 150 characters).
pub fn blech32m_decode(input: &str) -> Result<Decoded, BechError> {
    decode_variant(Variant::Blech32m, input)
}
