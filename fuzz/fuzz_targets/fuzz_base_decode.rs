#![no_main]

use libfuzzer_sys::fuzz_target;

// Base conversion of arbitrary text must never panic, and a successful
// decode never starts with a zero byte.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for alphabet in [&addrcheck_crypto::BASE58, &addrcheck_crypto::BASE64] {
        if let Ok(bytes) = alphabet.decode(text) {
            assert_ne!(bytes.first(), Some(&0));
            assert!(bytes.len() <= text.len());
        }
    }
});
