//! Generator polynomial steps for the bech32 and blech32 checksums.
//!
//! Each step shifts the state left by one 5-bit symbol and folds the five
//! bits pushed out of the window back in through the generator constants.

use addrcheck_types::Generator;

const BECH_WINDOW: u64 = 0x1FF_FFFF;
const BECH_GENERATORS: [u64; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

const BLECH_WINDOW: u64 = 0x7F_FFFF_FFFF_FFFF;
const BLECH_GENERATORS: [u64; 5] = [
    0x7d52fba40bd886,
    0x5e8dbf1a03950c,
    0x1c3a3c74072a18,
    0x385d72fa0e5139,
    0x7093e5a608865b,
];

#[inline]
const fn step(x: u64, window: u64, top: u32, generators: &[u64; 5]) -> u64 {
    let mut result = (x & window) << 5;
    let mut k = 0;
    while k < 5 {
        // All-ones when the bit is set, zero otherwise.
        let mask = 0u64.wrapping_sub((x >> (top + k as u32)) & 1);
        result ^= mask & generators[k];
        k += 1;
    }
    result
}

/// One step of the bech32 recurrence (25-bit window, bits 25..=29 feed back).
#[inline]
pub const fn bech(x: u64) -> u64 {
    step(x, BECH_WINDOW, 25, &BECH_GENERATORS)
}

/// One step of the blech32 recurrence (55-bit window, bits 55..=59 feed back).
#[inline]
pub const fn blech(x: u64) -> u64 {
    step(x, BLECH_WINDOW, 55, &BLECH_GENERATORS)
}

/// Apply the recurrence selected by `generator`.
#[inline]
pub fn polymod(generator: Generator, x: u64) -> u64 {
    match generator {
        Generator::Bech => bech(x),
        Generator::Blech => blech(x),
    }
}
