//! Codec vectors and round-trip properties for the base64 functions.

use alloc::{string::String, vec, vec::Vec};

use quickcheck_macros::quickcheck;

use crate::{decode_base64, decode_base64_url, encode_base64, encode_base64_url};

#[test]
fn known_vectors_standard() {
    assert_eq!(encode_base64(&[0, 0, 0], true), "AAAA");
    assert_eq!(encode_base64(b"Man", true), "TWFu");
    assert_eq!(encode_base64(b"Ma", true), "TWE=");
    assert_eq!(encode_base64(b"M", true), "TQ==");
    assert_eq!(encode_base64(b"", true), "");

    assert_eq!(decode_base64("AAAA").unwrap(), [0, 0, 0]);
    assert_eq!(decode_base64("TWFu").unwrap(), b"Man");
    assert_eq!(decode_base64("").unwrap(), Vec::<u8>::new());
}

#[test]
fn padding_is_stripped_and_restored() {
    assert_eq!(encode_base64(b"Ma", false), "TWE");
    assert_eq!(encode_base64(b"M", false), "TQ");

    // Unpadded and padded forms decode to the same bytes.
    assert_eq!(decode_base64("TWE").unwrap(), b"Ma");
    assert_eq!(decode_base64("TWE=").unwrap(), b"Ma");
    assert_eq!(decode_base64("TQ").unwrap(), b"M");
    assert_eq!(decode_base64("TQ==").unwrap(), b"M");
}

#[test]
fn url_safe_alphabet_substitutes_symbols() {
    // 0xFF 0xFE 0xFD exercises both remapped symbols.
    assert_eq!(encode_base64(&[0xFF, 0xFE, 0xFD], true), "//79");
    assert_eq!(encode_base64_url(&[0xFF, 0xFE, 0xFD], true), "__79");

    assert_eq!(decode_base64("//79").unwrap(), [0xFF, 0xFE, 0xFD]);
    assert_eq!(decode_base64_url("__79").unwrap(), [0xFF, 0xFE, 0xFD]);

    // Each variant rejects the other's alphabet.
    assert!(decode_base64("__79").is_err());
    assert!(decode_base64_url("//79").is_err());
}

#[test]
fn invalid_inputs_are_rejected() {
    assert!(decode_base64("!!!!").is_err());
    assert!(decode_base64("AAAA AAAA").is_err());
    // Length 1 mod 4 cannot be repaired by padding.
    assert!(decode_base64("A").is_err());
    assert!(decode_base64("AAAAA").is_err());
    // Excess padding is not silently dropped.
    assert!(decode_base64("TWE==").is_err());
}

#[test]
fn decode_error_is_displayable() {
    use alloc::string::ToString;

    let err = decode_base64("!!!!").unwrap_err();
    assert!(err.to_string().starts_with("invalid base64"));
    assert_eq!(err.clone(), err);
}

#[quickcheck]
fn roundtrip_standard(data: Vec<u8>) -> bool {
    decode_base64(&encode_base64(&data, true)) == Ok(data.clone())
        && decode_base64(&encode_base64(&data, false)) == Ok(data)
}

#[quickcheck]
fn roundtrip_url_safe(data: Vec<u8>) -> bool {
    decode_base64_url(&encode_base64_url(&data, true)) == Ok(data.clone())
        && decode_base64_url(&encode_base64_url(&data, false)) == Ok(data)
}

#[quickcheck]
fn decode_is_total(input: String) -> bool {
    // Arbitrary input must yield Ok or Err, never a panic.
    let _ = decode_base64(&input);
    let _ = decode_base64_url(&input);
    true
}

#[test]
fn unpadded_length_never_misdecodes() {
    // Every output length mod 3 exercises a distinct fill count.
    for len in 0..=9usize {
        let data = vec![0x5Au8; len];
        let unpadded = encode_base64(&data, false);
        assert_eq!(unpadded.len() % 4 != 0, len % 3 != 0);
        assert_eq!(decode_base64(&unpadded).unwrap(), data);
    }
}
