#![no_main]

use addrcheck_types::{BechError, Variant};
use libfuzzer_sys::fuzz_target;

// Decoding arbitrary text must never panic, and every outcome must be
// consistent with the structural rules of the identifier.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for variant in Variant::ALL {
        let max = variant.params().max_length;
        match addrcheck_crypto::decode_variant(variant, text) {
            Ok(decoded) => {
                assert!((8..=max).contains(&text.len()));
                assert_eq!(text.rfind('1'), Some(decoded.prefix.len()));
            }
            Err(BechError::InvalidSize { actual, .. }) => {
                assert_eq!(actual, text.len());
                assert!(actual < 8 || actual > max);
            }
            Err(BechError::NoSeparator) => assert!(!text.contains('1')),
            Err(BechError::InvalidCharacter { position }) => assert!(position < text.len()),
            Err(BechError::InvalidCase) => {}
        }
    }
});
