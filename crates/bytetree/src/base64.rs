//! Base64 encoding and decoding over raw byte slices.
//!
//! Thin layer over the `base64` crate's engines that fixes the padding
//! policy: encoders emit or strip trailing `=` per the caller's flag, and
//! decoders re-pad short input before decoding so correctly padded and
//! unpadded forms of the same data are both accepted.

use alloc::{string::String, vec::Vec};

use ::base64::{
    Engine,
    engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD},
};
use thiserror::Error;

/// Error returned when an input is not valid base64 after padding
/// normalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid base64: {0}")]
pub struct DecodeError(::base64::DecodeError);

/// Encodes `input` with the standard base64 alphabet.
///
/// When `padding` is `false`, trailing `=` fill characters are omitted
/// from the result.
///
/// # Examples
///
/// ```
/// use bytetree::encode_base64;
///
/// assert_eq!(encode_base64(&[0, 0, 0], true), "AAAA");
/// assert_eq!(encode_base64(b"Ma", true), "TWE=");
/// assert_eq!(encode_base64(b"Ma", false), "TWE");
/// ```
#[must_use]
pub fn encode_base64(input: &[u8], padding: bool) -> String {
    if padding {
        STANDARD.encode(input)
    } else {
        STANDARD_NO_PAD.encode(input)
    }
}

/// Decodes standard-alphabet base64, accepting padded and unpadded input.
///
/// Unpadded input is normalized by appending `(4 - len % 4) % 4` fill
/// characters before decoding.
///
/// # Errors
///
/// Returns [`DecodeError`] when the re-padded input is not valid base64.
///
/// # Examples
///
/// ```
/// use bytetree::decode_base64;
///
/// assert_eq!(decode_base64("AAAA").unwrap(), [0, 0, 0]);
/// assert_eq!(decode_base64("TWE=").unwrap(), b"Ma");
/// assert_eq!(decode_base64("TWE").unwrap(), b"Ma");
/// assert!(decode_base64("not base64!").is_err());
/// ```
pub fn decode_base64(input: &str) -> Result<Vec<u8>, DecodeError> {
    decode_with(&STANDARD, input)
}

/// Encodes `input` with the URL- and filename-safe alphabet
/// (`-` and `_` in place of `+` and `/`).
#[must_use]
pub fn encode_base64_url(input: &[u8], padding: bool) -> String {
    if padding {
        URL_SAFE.encode(input)
    } else {
        URL_SAFE_NO_PAD.encode(input)
    }
}

/// Decodes URL-safe-alphabet base64, accepting padded and unpadded input.
///
/// # Errors
///
/// Returns [`DecodeError`] when the re-padded input is not valid base64.
pub fn decode_base64_url(input: &str) -> Result<Vec<u8>, DecodeError> {
    decode_with(&URL_SAFE, input)
}

fn decode_with<E: Engine>(engine: &E, input: &str) -> Result<Vec<u8>, DecodeError> {
    let fill = (4 - input.len() % 4) % 4;
    if fill == 0 {
        return engine.decode(input).map_err(DecodeError);
    }
    let mut padded = String::with_capacity(input.len() + fill);
    padded.push_str(input);
    for _ in 0..fill {
        padded.push('=');
    }
    engine.decode(&padded).map_err(DecodeError)
}
