#![no_main]

use bytetree::{decode_base64, decode_base64_url, encode_base64, encode_base64_url};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary text must never panic, and anything that decodes
    // must re-encode to a form that decodes to the same bytes.
    if let Ok(text) = core::str::from_utf8(data) {
        if let Ok(decoded) = decode_base64(text) {
            assert_eq!(decode_base64(&encode_base64(&decoded, true)), Ok(decoded));
        }
        if let Ok(decoded) = decode_base64_url(text) {
            assert_eq!(
                decode_base64_url(&encode_base64_url(&decoded, false)),
                Ok(decoded)
            );
        }
    }

    // Every byte payload round-trips through all four encode forms.
    for padding in [true, false] {
        assert_eq!(decode_base64(&encode_base64(data, padding)).as_deref(), Ok(data));
        assert_eq!(
            decode_base64_url(&encode_base64_url(data, padding)).as_deref(),
            Ok(data)
        );
    }
});
