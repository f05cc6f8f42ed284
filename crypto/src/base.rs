//! Arbitrary-base string-to-bytes conversion.
//!
//! The input is read as one big-endian integer written in base `B` and
//! rebuilt byte by byte with repeated multiply-accumulate. Leading zero
//! digits carry no value and are not expanded into zero bytes, so base58
//! strings starting with `1` lose those bytes.

use addrcheck_types::BaseError;

/// Reverse lookup table: character code → digit value (-1 = invalid).
pub type LookupTable = [i8; 256];

/// Bitcoin base58 alphabet (no 0, O, I, l).
pub const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// RFC 4648 standard base64 alphabet, decoded without padding.
pub const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Build a reverse table for an alphabet of at most 127 symbols.
pub const fn build_table(alphabet: &[u8]) -> LookupTable {
    let mut table = [-1i8; 256];
    let mut i = 0;
    while i < alphabet.len() {
        table[alphabet[i] as usize] = i as i8;
        i += 1;
    }
    table
}

/// A base together with its buffer growth factor and reverse table.
#[derive(Clone, Debug)]
pub struct Alphabet {
    base: u32,
    /// Output bytes per input symbol: approximately `log(256) / log(base)`,
    /// never below it.
    growth_factor: f64,
    table: LookupTable,
}

impl Alphabet {
    pub const fn new(symbols: &[u8], growth_factor: f64) -> Self {
        Self {
            base: symbols.len() as u32,
            growth_factor,
            table: build_table(symbols),
        }
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn table(&self) -> &LookupTable {
        &self.table
    }

    /// Decode `input` with this alphabet.
    pub fn decode(&self, input: &str) -> Result<Vec<u8>, BaseError> {
        base_decode(input, self.base, self.growth_factor, &self.table)
    }
}

pub const BASE58: Alphabet = Alphabet::new(BASE58_ALPHABET, 1.365_658_237_309_761);
pub const BASE64: Alphabet = Alphabet::new(BASE64_ALPHABET, 4.0 / 3.0);

/// Decode a base58 string (leading `1`s are dropped).
pub fn base58_decode(input: &str) -> Result<Vec<u8>, BaseError> {
    BASE58.decode(input)
}

/// Decode an unpadded base64 string whose bit length is a whole number of bytes.
pub fn base64_decode(input: &str) -> Result<Vec<u8>, BaseError> {
    BASE64.decode(input)
}

/// Decode `input` written in `base` into big-endian bytes.
///
/// `growth_factor` sizes the scratch buffer and must be at least
/// `log(256) / log(base)`; `table` maps every accepted character to its digit.
/// Empty input decodes to an empty vector.
pub fn base_decode(
    input: &str,
    base: u32,
    growth_factor: f64,
    table: &LookupTable,
) -> Result<Vec<u8>, BaseError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let size = (input.len() as f64 * growth_factor).ceil() as usize + 1;
    let mut result = vec![0u8; size];
    // Number of low-order bytes holding significant value so far.
    let mut length = 0usize;

    for c in input.chars() {
        let digit = match u8::try_from(c) {
            Ok(b) if table[b as usize] >= 0 => table[b as usize] as u32,
            _ => {
                tracing::debug!(character = ?c, base, "rejecting non-dictionary character");
                return Err(BaseError::InvalidCharacter(c));
            }
        };

        let mut carry = digit;
        let mut touched = 0usize;
        let mut j = size;
        while (carry != 0 || touched < length) && j > 0 {
            j -= 1;
            carry += base * result[j] as u32;
            result[j] = (carry % 256) as u8;
            carry /= 256;
            touched += 1;
        }
        length = touched;
    }

    let first_nonzero = result.iter().position(|&b| b != 0).unwrap_or(size);
    result.drain(..first_nonzero);
    Ok(result)
}
