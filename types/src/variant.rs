//! Checksum variants and their fixed parameter sets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum total length of any checksum-family identifier.
pub const MIN_LENGTH: usize = 8;

/// Separator between the human-readable prefix and the payload.
pub const SEPARATOR: u8 = b'1';

/// Generator polynomial family used for the checksum recurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Generator {
    /// 30-bit code over a 25-bit window (bech32, bech32m).
    Bech,
    /// 60-bit code over a 55-bit window (blech32, blech32m).
    Blech,
}

/// Fixed parameters that bind the generic decoder to one variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChecksumParams {
    pub generator: Generator,
    /// Value a valid identifier's checksum reduces to.
    pub encoding_constant: u64,
    /// Maximum total identifier length, inclusive.
    pub max_length: usize,
}

/// The four public checksum-family encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Bech32,
    Bech32m,
    Blech32,
    Blech32m,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Bech32,
        Variant::Bech32m,
        Variant::Blech32,
        Variant::Blech32m,
    ];

    /// Parameter set for this variant.
    pub const fn params(&self) -> ChecksumParams {
        match self {
            Self::Bech32 => ChecksumParams {
                generator: Generator::Bech,
                encoding_constant: 1,
                max_length: 90,
            },
            Self::Bech32m => ChecksumParams {
                generator: Generator::Bech,
                encoding_constant: 0x2bc830a3,
                max_length: 90,
            },
            Self::Blech32 => ChecksumParams {
                generator: Generator::Blech,
                encoding_constant: 1,
                max_length: 150,
            },
            Self::Blech32m => ChecksumParams {
                generator: Generator::Blech,
                encoding_constant: 0x455972a3350f7a1,
                max_length: 150,
            },
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bech32 => "bech32",
            Self::Bech32m => "bech32m",
            Self::Blech32 => "blech32",
            Self::Blech32m => "blech32m",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a variant name is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown checksum variant: {0}")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bech32" => Ok(Self::Bech32),
            "bech32m" => Ok(Self::Bech32m),
            "blech32" => Ok(Self::Blech32),
            "blech32m" => Ok(Self::Blech32m),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}
