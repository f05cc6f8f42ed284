//! Generic decoder for the bech32 checksum family.
//!
//! An identifier is `prefix '1' payload`. The prefix is folded into the
//! checksum twice (high bits, then low bits of every character), the payload
//! symbols are folded once each, and the result is compared against the
//! variant's encoding constant.

use addrcheck_types::{BechError, Decoded, Generator, MIN_LENGTH, SEPARATOR};

use crate::polymod::{bech, polymod};

/// Offset of the first entry in [`PAYLOAD_TABLE`] (`'0'`).
const PAYLOAD_TABLE_OFFSET: u8 = 48;

/// Reverse lookup for the 32-symbol payload alphabet
/// `qpzry9x8gf2tvdw0s3jn54khce6mua7l`, upper and lower case,
/// indexed by `char - '0'` over `'0'..='z'` (-1 = invalid).
const PAYLOAD_TABLE: [i8; 75] = [
    15, -1, 10, 17, 21, 20, 26, 30, 7, 5, -1, -1, -1, -1, -1, -1, //
    -1, 29, -1, 24, 13, 25, 9, 8, 23, -1, 18, 22, 31, 27, 19, -1, //
    1, 0, 3, 16, 11, 28, 12, 14, 6, 4, 2, -1, -1, -1, -1, -1, //
    -1, 29, -1, 24, 13, 25, 9, 8, 23, -1, 18, 22, 31, 27, 19, -1, //
    1, 0, 3, 16, 11, 28, 12, 14, 6, 4, 2,
];

/// Map a payload byte to its 5-bit value.
fn payload_value(c: u8) -> Option<u64> {
    let idx = c.checked_sub(PAYLOAD_TABLE_OFFSET)? as usize;
    match PAYLOAD_TABLE.get(idx) {
        Some(&v) if v >= 0 => Some(v as u64),
        _ => None,
    }
}

/// Fold a human-readable prefix into a fresh checksum.
///
/// Every prefix byte must be printable ASCII (`33..=126`). The step between
/// the two passes always uses [`bech`], whichever generator is supplied.
pub fn prefix_checksum(prefix: &str, generator: Generator) -> Result<u64, BechError> {
    let mut checksum: u64 = 1;
    for (position, c) in prefix.bytes().enumerate() {
        if !(33..=126).contains(&c) {
            return Err(BechError::InvalidCharacter { position });
        }
        checksum = polymod(generator, checksum) ^ (c >> 5) as u64;
    }

    checksum = bech(checksum);
    for c in prefix.bytes() {
        checksum = polymod(generator, checksum) ^ (c & 0x1f) as u64;
    }

    Ok(checksum)
}

/// Split `input` at its rightmost separator and validate its checksum.
///
/// Structural problems are errors, checked in order: length, missing
/// separator, character set, then mixed case. A checksum that does not reduce to `encoding_constant`
/// is reported as `Decoded { valid: false, .. }`.
pub fn decode(
    input: &str,
    encoding_constant: u64,
    max_length: usize,
    generator: Generator,
) -> Result<Decoded, BechError> {
    let bytes = input.as_bytes();
    if bytes.len() < MIN_LENGTH || bytes.len() > max_length {
        return Err(BechError::InvalidSize {
            actual: bytes.len(),
            min: MIN_LENGTH,
            max: max_length,
        });
    }

    let separator = bytes
        .iter()
        .rposition(|&c| c == SEPARATOR)
        .ok_or(BechError::NoSeparator)?;

    let prefix = &input[..separator];
    let mut checksum = prefix_checksum(prefix, generator)?;

    for (offset, &c) in bytes[separator + 1..].iter().enumerate() {
        let position = separator + 1 + offset;
        let value = payload_value(c).ok_or_else(|| {
            tracing::debug!(position, byte = c, "rejecting payload character");
            BechError::InvalidCharacter { position }
        })?;
        checksum = polymod(generator, checksum) ^ value;
    }

    // Only reached once every character is individually acceptable.
    if bytes.iter().any(u8::is_ascii_lowercase) && bytes.iter().any(u8::is_ascii_uppercase) {
        return Err(BechError::InvalidCase);
    }

    let valid = checksum == encoding_constant;
    tracing::trace!(prefix, valid, ?generator, "decoded checksum identifier");
    Ok(Decoded::new(prefix, valid))
}
