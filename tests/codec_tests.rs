// tests/codec_tests.rs
use base64_file_codec::codec::{decode, decode_text, encode, encode_text};
use base64_file_codec::error::CodecError;

#[test]
fn test_encode_decode_roundtrip_in_memory() {
    let data = b"The quick brown fox jumps over the lazy dog".to_vec();

    let encoded = encode(&data);
    let decoded = decode(&encoded).unwrap();

    assert!(encoded.is_ascii());
    assert_eq!(encoded.len() % 4, 0);
    assert_eq!(data, decoded);
}

#[test]
fn test_encode_known_vector() {
    assert_eq!(encode(&[0xDE, 0xAD]), "3q0=");
    assert_eq!(decode("3q0=").unwrap(), vec![0xDE, 0xAD]);
}

#[test]
fn test_encode_text_known_vector() {
    assert_eq!(encode_text("a,b\n"), "YSxiCg==");
    assert_eq!(decode_text("YSxiCg==").unwrap(), "a,b\n");
}

#[test]
fn test_encode_empty_input() {
    assert_eq!(encode(b""), "");
    assert_eq!(decode("").unwrap(), Vec::<u8>::new());
}

#[test]
fn test_decode_rejects_characters_outside_alphabet() {
    let result = decode("not*valid!");
    assert!(matches!(result, Err(CodecError::Decode(_))));
}

#[test]
fn test_decode_rejects_embedded_newline() {
    let result = decode("3q0=\n");
    assert!(matches!(result, Err(CodecError::Decode(_))));
}

#[test]
fn test_decode_rejects_missing_padding() {
    // canonical form is "YWJjZA==", so truncated padding is malformed
    let result = decode("YWJjZA");
    assert!(matches!(result, Err(CodecError::Decode(_))));
}

#[test]
fn test_decode_text_rejects_non_utf8_payload() {
    let encoded = encode(&[0xFF, 0xFE, 0xFD]);
    let result = decode_text(&encoded);
    assert!(matches!(result, Err(CodecError::Utf8(_))));
}

#[test]
fn test_decode_text_roundtrip() {
    let original = "héllo wörld — ünïcode";
    let decoded = decode_text(&encode_text(original)).unwrap();
    assert_eq!(original, decoded);
}
