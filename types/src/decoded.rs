//! Result of a successful checksum-family parse.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable prefix of an identifier plus the outcome of its checksum.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decoded {
    /// Everything before the rightmost separator.
    pub prefix: String,
    /// `true` when the folded checksum equals the variant's encoding constant.
    pub valid: bool,
}

impl Decoded {
    pub fn new(prefix: impl Into<String>, valid: bool) -> Self {
        Self {
            prefix: prefix.into(),
            valid,
        }
    }
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.valid { "valid" } else { "invalid" };
        write!(f, "{} ({})", self.prefix, status)
    }
}

impl From<Decoded> for (String, bool) {
    fn from(d: Decoded) -> Self {
        (d.prefix, d.valid)
    }
}
