use proptest::prelude::*;

use addrcheck_crypto::{
    base58_decode, base64_decode, bech32_decode, bech32m_decode, blech32_decode, blech32m_decode,
    decode_variant, prefix_checksum, BASE58,
};
use addrcheck_types::{BechError, Generator, Variant};

const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const VALID: [(Variant, &str); 4] = [
    (
        Variant::Bech32,
        "bc1qg8qch0yyctftgvxddy2knyequwgsrechdchdfh76x7pzq0pr0w8sqzw4qk",
    ),
    (
        Variant::Bech32m,
        "bc1peu5hzzyj8cnqm05le6ag7uwry0ysmtf3v4uuxv3v8hqhvsatca8ss2vuwx",
    ),
    (
        Variant::Blech32,
        "el1qqw3e3mk4ng3ks43mh54udznuekaadh9lgwef3mwgzrfzakmdwcvqpe4ppdaa3t44v3zv2u6w56pv6tc666fvgzaclqjnkz0sd",
    ),
    (
        Variant::Blech32m,
        "el1pqt2ggkpvrffw5t5zw4mpu23f8kppcw3mr258cpy8nhcnwdmle20g9uda2jsjhgvv6nvg600v68slq6044k5z4v3cwk5252k8whkzkc0kcu6mzca78auu",
    ),
];

/// Replace the payload character at `index` (counted after the separator)
/// with the charset symbol `shift` places further along.
fn substitute(addr: &str, index: usize, shift: usize) -> String {
    let sep = addr.rfind('1').unwrap();
    let mut bytes = addr.as_bytes().to_vec();
    let pos = sep + 1 + index % (addr.len() - sep - 1);
    let current = CHARSET.iter().position(|&c| c == bytes[pos]).unwrap();
    bytes[pos] = CHARSET[(current + shift) % 32];
    String::from_utf8(bytes).unwrap()
}

/// Encode `value` in base58 without leading zero digits.
fn to_base58(mut value: u128) -> String {
    let alphabet = addrcheck_crypto::base::BASE58_ALPHABET;
    let mut out = Vec::new();
    while value > 0 {
        out.push(alphabet[(value % 58) as usize]);
        value /= 58;
    }
    out.reverse();
    String::from_utf8(out).unwrap()
}

#[test]
fn decoders_emit_trace_events() {
    addrcheck_utils::try_init_tracing();
    for (variant, addr) in VALID {
        assert!(decode_variant(variant, addr).unwrap().valid);
    }
    assert!(base58_decode("0OIl").is_err());
}

#[test]
fn every_single_substitution_is_detected() {
    for (variant, addr) in VALID {
        let payload_len = addr.len() - addr.rfind('1').unwrap() - 1;
        for index in 0..payload_len {
            for shift in 1..32 {
                let corrupted = substitute(addr, index, shift);
                let decoded = decode_variant(variant, &corrupted).unwrap();
                assert!(!decoded.valid, "{variant}: {corrupted}");
            }
        }
    }
}

#[test]
fn entry_points_agree_with_dispatch() {
    let direct = [bech32_decode, bech32m_decode, blech32_decode, blech32m_decode];
    for ((variant, addr), f) in VALID.into_iter().zip(direct) {
        assert_eq!(f(addr), decode_variant(variant, addr));
    }
}

#[test]
fn base58_matches_reference_vector() {
    let decoded = BASE58.decode("16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM").unwrap();
    assert_eq!(
        hex::encode(decoded),
        "010966776006953d5567439e5e39f86a0d273beed61967f6"
    );
}

proptest! {
    /// Decoding arbitrary text never panics, for any variant.
    #[test]
    fn decode_never_panics(input in "\\PC{0,160}", v in 0usize..4) {
        let _ = decode_variant(Variant::ALL[v], &input);
    }

    /// Identical inputs give identical results.
    #[test]
    fn decode_is_deterministic(input in "[a-z0-9]{8,90}") {
        prop_assert_eq!(bech32_decode(&input), bech32_decode(&input));
        prop_assert_eq!(
            prefix_checksum(&input, Generator::Blech),
            prefix_checksum(&input, Generator::Blech)
        );
    }

    /// Any single in-alphabet substitution in the payload flips validity.
    #[test]
    fn substitution_invalidates(which in 0usize..4, index in 0usize..200, shift in 1usize..32) {
        let (variant, addr) = VALID[which];
        let corrupted = substitute(addr, index, shift);
        prop_assert!(!decode_variant(variant, &corrupted).unwrap().valid);
    }

    /// Lengths outside 8..=max are rejected before anything else is checked.
    #[test]
    fn out_of_range_lengths_rejected(len in prop_oneof![0usize..8, 91usize..200]) {
        let input = "1".repeat(len);
        let is_size_error = matches!(bech32_decode(&input), Err(BechError::InvalidSize { .. }));
        prop_assert!(is_size_error);
    }

    /// Prefix bytes outside printable ASCII are rejected at their position.
    #[test]
    fn prefix_control_characters_rejected(pos in 0usize..5, c in 0u8..33) {
        let mut prefix = b"terra".to_vec();
        prefix[pos] = c;
        let prefix = String::from_utf8(prefix).unwrap();
        prop_assert_eq!(
            prefix_checksum(&prefix, Generator::Bech),
            Err(BechError::InvalidCharacter { position: pos })
        );
    }

    /// base58 agrees with plain integer conversion.
    #[test]
    fn base58_matches_integer_conversion(value in 1u128..) {
        let decoded = base58_decode(&to_base58(value)).unwrap();
        let expected = value.to_be_bytes();
        let skip = expected.iter().position(|&b| b != 0).unwrap();
        prop_assert_eq!(decoded, expected[skip..].to_vec());
    }

    /// base64 of byte strings with a non-zero lead and whole 3-byte groups
    /// decodes back to the original bytes.
    #[test]
    fn base64_matches_byte_groups(
        lead in 1u8..,
        rest in proptest::collection::vec(any::<u8>(), 2..=47),
    ) {
        let mut bytes = vec![lead];
        bytes.extend(rest);
        bytes.truncate(bytes.len() / 3 * 3);
        let alphabet = addrcheck_crypto::base::BASE64_ALPHABET;
        let mut text = String::new();
        for chunk in bytes.chunks(3) {
            let n = (chunk[0] as u32) << 16 | (chunk[1] as u32) << 8 | chunk[2] as u32;
            for shift in [18, 12, 6, 0] {
                text.push(alphabet[((n >> shift) & 0x3f) as usize] as char);
            }
        }
        prop_assert_eq!(base64_decode(&text).unwrap(), bytes);
    }
}
